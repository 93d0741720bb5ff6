//! Media transport trait
//!
//! The opaque playback primitive supplied by the host platform, one per
//! track. The panel issues commands through it and never observes playback
//! state from it; asynchronous state notifications come back separately as
//! [`crate::MediaEvent`]s.

use crate::error::Result;
use std::time::Duration;

/// Platform playback primitive for one track
pub trait MediaTransport {
    /// Begin or resume playback
    ///
    /// # Errors
    /// Returns an error if the host refuses playback (e.g. autoplay policy)
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Set the playback volume (0.0 = silent, 1.0 = full)
    fn set_volume(&mut self, level: f32);

    /// Enable or disable looping
    fn set_looping(&mut self, looping: bool);

    /// Jump playback to the given position
    ///
    /// # Errors
    /// Returns an error if the medium is not seekable yet
    fn seek(&mut self, position: Duration) -> Result<()>;
}
