/// Core error types for Fable Player
use thiserror::Error;

/// Result type alias using `FableError`
pub type Result<T> = std::result::Result<T, FableError>;

/// Core error type for Fable Player
#[derive(Error, Debug)]
pub enum FableError {
    /// Persistent counter storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Media transport errors (playback primitive refused an operation)
    #[error("Media error: {0}")]
    Media(String),

    /// Clipboard write failed or is unavailable
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// The host environment has no native share capability
    #[error("Native share not supported")]
    ShareUnsupported,

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl FableError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a media error
    pub fn media(msg: impl Into<String>) -> Self {
        Self::Media(msg.into())
    }

    /// Create a clipboard error
    pub fn clipboard(msg: impl Into<String>) -> Self {
        Self::Clipboard(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
