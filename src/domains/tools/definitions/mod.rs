//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod audiodb;

pub use audiodb::{
    SearchAlbumParams, SearchAlbumTool, SearchArtistParams, SearchArtistTool, SearchTrackParams,
    SearchTrackTool,
};
