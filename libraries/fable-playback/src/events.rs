//! Panel and media events
//!
//! `MediaEvent` flows host -> panel: asynchronous notifications from the
//! playback primitive (metadata resolved, position advanced, natural end).
//! `PanelEvent` flows panel -> host: state changes the rendering surface
//! mirrors, drained with [`crate::AudioPanel::take_events`].

use crate::volume::VolumeTier;
use fable_core::types::TrackId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Notifications from the playback primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediaEvent {
    /// Track metadata resolved; duration is now known
    MetadataLoaded {
        /// Total track duration
        duration: Duration,
    },

    /// Playback position advanced (continuous, high-frequency)
    PositionChanged {
        /// Current position from the start of the track
        position: Duration,
    },

    /// Playback reached the track's natural end
    Ended,
}

/// Events emitted by the panel for the host to mirror
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PanelEvent {
    /// A track's transport flipped between playing and paused
    TransportChanged {
        /// Affected track
        track_id: TrackId,
        /// Whether the track is now playing
        playing: bool,
    },

    /// A track's loop toggle flipped
    LoopChanged {
        /// Affected track
        track_id: TrackId,
        /// Whether the track now loops
        looping: bool,
    },

    /// A track's volume changed (slider or mute toggle)
    VolumeChanged {
        /// Affected track
        track_id: TrackId,
        /// New level (0.0 - 1.0)
        level: f32,
        /// Icon tier for the new level
        tier: VolumeTier,
    },

    /// A track's duration became known
    DurationResolved {
        /// Affected track
        track_id: TrackId,
        /// Total duration in milliseconds
        duration_ms: u64,
    },

    /// Playback progress for display (observational only)
    ProgressUpdated {
        /// Affected track
        track_id: TrackId,
        /// Current position in milliseconds
        position_ms: u64,
        /// Position as a percentage of duration; absent while duration unknown
        percent: Option<f32>,
    },

    /// A track finished playing naturally (reached its end)
    TrackFinished {
        /// Finished track
        track_id: TrackId,
    },

    /// The persisted listen counter advanced
    ListenCountChanged {
        /// New total
        count: u64,
    },
}
