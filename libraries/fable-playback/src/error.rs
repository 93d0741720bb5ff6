//! Error types for the audio control panel

use thiserror::Error;

/// Panel errors
///
/// These only surface at the capability seams (`MediaTransport`,
/// `ListenStore`); the panel's own UI-facing operations swallow them into
/// logged no-ops.
#[derive(Debug, Error)]
pub enum PanelError {
    /// The playback primitive refused an operation (e.g. autoplay blocked)
    #[error("Transport refused: {0}")]
    Transport(String),

    /// Core error (storage, serialization)
    #[error(transparent)]
    Core(#[from] fable_core::FableError),
}

/// Result type for panel operations
pub type Result<T> = std::result::Result<T, PanelError>;
