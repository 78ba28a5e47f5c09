//! TheAudioDB tool definitions.

pub mod album;
pub mod artist;
pub mod common;
pub mod track;

pub use album::{SearchAlbumParams, SearchAlbumTool};
pub use artist::{SearchArtistParams, SearchArtistTool};
pub use track::{SearchTrackParams, SearchTrackTool};
