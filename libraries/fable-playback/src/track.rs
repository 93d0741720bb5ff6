//! Per-track state

use crate::volume::TrackVolume;
use fable_core::types::TrackId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Observable state of one audio track
///
/// `duration` becomes known only after the track's metadata resolves, which
/// arrives asynchronously as a [`crate::MediaEvent::MetadataLoaded`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackState {
    /// Track identifier
    pub id: TrackId,

    /// Whether this track is currently playing
    pub is_playing: bool,

    /// Whether this track loops at its end
    pub is_looping: bool,

    /// Volume controller
    pub volume: TrackVolume,

    /// Current playback position
    pub position: Duration,

    /// Total duration, once metadata has resolved
    pub duration: Option<Duration>,
}

impl TrackState {
    /// Create a fresh track at the given initial volume
    pub fn new(id: TrackId, volume: f32) -> Self {
        Self {
            id,
            is_playing: false,
            is_looping: false,
            volume: TrackVolume::new(volume),
            position: Duration::ZERO,
            duration: None,
        }
    }

    /// Position as a percentage of duration; `None` while duration unknown
    pub fn progress_percent(&self) -> Option<f32> {
        let duration = self.duration?;
        if duration.is_zero() {
            return None;
        }
        Some((self.position.as_secs_f64() / duration.as_secs_f64() * 100.0) as f32)
    }
}

/// Format a position for display as `M:SS`
///
/// Seconds are zero-padded; minutes are not (matches the time readouts next
/// to each progress bar).
pub fn format_clock(position: Duration) -> String {
    let total = position.as_secs();
    format!("{}:{:02}", total / 60, total % 60)
}
