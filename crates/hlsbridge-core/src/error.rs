//! Error types for hlsbridge

use thiserror::Error;

/// Result type alias for bridge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Bridge error types
#[derive(Error, Debug)]
pub enum Error {
    // Packet errors
    #[error("Failed to decode timed-metadata payload: {0}")]
    PayloadDecode(#[from] base64::DecodeError),

    // Engine property errors
    #[error("Engine reported level {index} outside the level list (len {len})")]
    LevelOutOfRange { index: i32, len: usize },

    #[error("Level playlist URI is not a valid URL: {0}")]
    InvalidPlaylistUri(#[from] url::ParseError),

    #[error("No levels reported by the engine")]
    NoLevels,
}

impl Error {
    /// Returns the error code for telemetry
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::PayloadDecode(_) => "PAYLOAD_DECODE",
            Error::LevelOutOfRange { .. } => "LEVEL_RANGE",
            Error::InvalidPlaylistUri(_) => "PLAYLIST_URI",
            Error::NoLevels => "NO_LEVELS",
        }
    }
}
