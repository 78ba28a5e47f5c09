//! TheAudioDB domain module.
//!
//! Groups everything specific to the upstream music metadata API:
//!
//! - `model` - parsed record types and list envelopes
//! - `client` - HTTP client with retry/backoff and empty-on-failure
//! - `format` - pure text formatting of records
//! - `error` - client-internal error types
//!
//! The tool definitions under `domains/tools/definitions/audiodb/` are
//! thin wrappers over this module.

pub mod client;
pub mod error;
pub mod format;
pub mod model;

pub use client::{AudioDbClient, HttpBackend, ReqwestBackend};
pub use error::AudioDbError;
pub use format::{FormatOptions, format_album_list, format_artist, format_track_placeholder};
pub use model::{Album, Artist, ArtistKind, ArtistSearchResponse, DiscographyResponse};
