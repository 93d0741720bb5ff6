//! Background music toggle
//!
//! A single ambient track independent of the control panel: one affordance
//! doubles as play and pause, with a wave indicator mirroring the playing
//! state. Autoplay may be refused by the host environment; the music then
//! stays paused until the user toggles it.

use crate::transport::MediaTransport;
use crate::types::PanelConfig;
use tracing::{debug, warn};

/// Background music controller
pub struct BackgroundMusic {
    transport: Box<dyn MediaTransport>,
    playing: bool,
    autoplay_blocked: bool,
}

impl BackgroundMusic {
    /// Create the controller, pushing the initial volume to the transport
    pub fn new(mut transport: Box<dyn MediaTransport>, volume: f32) -> Self {
        transport.set_volume(volume.clamp(0.0, 1.0));
        Self {
            transport,
            playing: false,
            autoplay_blocked: false,
        }
    }

    /// Create the controller at the configured background volume
    pub fn with_config(transport: Box<dyn MediaTransport>, config: &PanelConfig) -> Self {
        Self::new(transport, config.background_volume)
    }

    /// Attempt to start playback without user interaction
    ///
    /// A refusal is expected under autoplay policies; the controller records
    /// it so the host can show the muted affordance until the user toggles.
    pub fn try_autoplay(&mut self) {
        match self.transport.play() {
            Ok(()) => self.playing = true,
            Err(e) => {
                debug!("autoplay prevented, user interaction required: {e}");
                self.autoplay_blocked = true;
            }
        }
    }

    /// Play/pause toggle
    pub fn toggle(&mut self) {
        if self.playing {
            self.transport.pause();
            self.playing = false;
        } else {
            match self.transport.play() {
                Ok(()) => {
                    self.playing = true;
                    self.autoplay_blocked = false;
                }
                Err(e) => warn!("transport refused play: {e}"),
            }
        }
    }

    /// Whether the music is currently playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the wave indicator should be shown
    pub fn indicator_active(&self) -> bool {
        self.playing
    }

    /// Whether the last autoplay attempt was refused
    pub fn autoplay_blocked(&self) -> bool {
        self.autoplay_blocked
    }
}

impl std::fmt::Debug for BackgroundMusic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackgroundMusic")
            .field("playing", &self.playing)
            .field("autoplay_blocked", &self.autoplay_blocked)
            .finish_non_exhaustive()
    }
}
