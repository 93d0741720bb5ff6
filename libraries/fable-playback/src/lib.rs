//! Fable Player - Audio Control Panel
//!
//! Platform-agnostic control logic for the presentation's audio tracks.
//!
//! This crate provides:
//! - Per-track transport (play/pause toggle), loop toggle, seek
//! - Volume control (linear 0-100%, mute with previous-volume restore)
//! - A panel-wide "at most one track playing" invariant
//! - A persisted listen counter fed by natural track completions
//! - Background music toggle with autoplay-refusal handling
//!
//! # Architecture
//!
//! `fable-playback` is completely platform-agnostic: it never touches a real
//! media element. The host supplies a [`MediaTransport`] per track and feeds
//! asynchronous media notifications back in as [`MediaEvent`]s; the panel
//! reacts, mutates its state within the single callback, and queues
//! [`PanelEvent`]s for the host to drain. All UI-facing operations are total:
//! out-of-range or not-yet-ready inputs degrade to logged no-ops because the
//! caller is direct event dispatch with no error channel.
//!
//! # Example
//!
//! ```rust
//! use fable_core::storage::MemoryListenStore;
//! use fable_core::types::TrackId;
//! use fable_playback::{AudioPanel, MediaEvent, MediaTransport, PanelConfig, Result};
//! use std::time::Duration;
//!
//! struct NullTransport;
//!
//! impl MediaTransport for NullTransport {
//!     fn play(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!     fn pause(&mut self) {}
//!     fn set_volume(&mut self, _level: f32) {}
//!     fn set_looping(&mut self, _looping: bool) {}
//!     fn seek(&mut self, _position: Duration) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut panel = AudioPanel::new(PanelConfig::default(), Box::new(MemoryListenStore::new()));
//! panel.add_track(TrackId::new("voice-1"), Box::new(NullTransport));
//!
//! panel.toggle_play(&TrackId::new("voice-1"));
//! assert!(panel.track(&TrackId::new("voice-1")).unwrap().is_playing);
//!
//! panel.handle_media_event(&TrackId::new("voice-1"), MediaEvent::Ended);
//! assert_eq!(panel.listen_count(), 1);
//! ```

#![forbid(unsafe_code)]

mod error;
mod events;
mod listens;
mod music;
mod panel;
mod track;
mod transport;
pub mod types;
mod volume;

// Public exports
pub use error::{PanelError, Result};
pub use events::{MediaEvent, PanelEvent};
pub use listens::ListenCounter;
pub use music::BackgroundMusic;
pub use panel::AudioPanel;
pub use track::{format_clock, TrackState};
pub use transport::MediaTransport;
pub use types::PanelConfig;
pub use volume::{TrackVolume, VolumeTier};
