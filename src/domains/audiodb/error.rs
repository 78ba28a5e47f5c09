//! Error types for the TheAudioDB client.

use thiserror::Error;

/// Errors that can occur while talking to TheAudioDB.
///
/// These stay internal to the client: the public lookup operations
/// degrade to an empty result instead of surfacing them.
#[derive(Debug, Error)]
pub enum AudioDbError {
    /// The HTTP request itself failed (connect, timeout, ...).
    #[error("Request failed: {0}")]
    Request(String),

    /// The upstream returned a non-success status code.
    #[error("Upstream returned status {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl AudioDbError {
    /// Create a request error.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}
