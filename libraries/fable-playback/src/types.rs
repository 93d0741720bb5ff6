//! Configuration types for the audio control panel

use serde::{Deserialize, Serialize};

/// Panel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Initial volume for special tracks (0.0 - 1.0)
    pub default_volume: f32,

    /// Initial volume for the background music (0.0 - 1.0)
    pub background_volume: f32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            default_volume: 0.8,
            background_volume: 0.5,
        }
    }
}
