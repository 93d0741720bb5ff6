//! Per-track volume control with mute/restore
//!
//! Volume is a linear level in `[0.0, 1.0]`. Muting is not a flag: it is
//! keyed off "is the level currently zero", with the pre-mute level stashed
//! so a second toggle restores it exactly.

use serde::{Deserialize, Serialize};

/// Fallback level restored by unmute when no level was ever stashed
pub const DEFAULT_LEVEL: f32 = 0.8;

/// Icon tier derived from the current level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeTier {
    /// Level is exactly zero
    Muted,
    /// Level in (0, 0.5)
    Low,
    /// Level in [0.5, 1]
    High,
}

/// Volume controller for one track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackVolume {
    /// Current level (0.0 - 1.0)
    level: f32,

    /// Level stashed by the last mute, restored by the next unmute
    previous: Option<f32>,
}

impl TrackVolume {
    /// Create a volume controller at the given level
    pub fn new(level: f32) -> Self {
        Self {
            level: level.clamp(0.0, 1.0),
            previous: None,
        }
    }

    /// Current level (0.0 - 1.0)
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Set the level from a percentage (0 - 100)
    ///
    /// Does not touch the stashed pre-mute level.
    pub fn set_percent(&mut self, percent: f32) {
        self.level = (percent.clamp(0.0, 100.0)) / 100.0;
    }

    /// Set the level directly (0.0 - 1.0)
    pub fn set_level(&mut self, level: f32) {
        self.level = level.clamp(0.0, 1.0);
    }

    /// Toggle mute
    ///
    /// Nonzero level: stash it and drop to zero. Zero level: restore the
    /// stashed level, defaulting to [`DEFAULT_LEVEL`] if none was ever
    /// stashed. Two toggles with no intervening change restore the original
    /// level exactly.
    pub fn toggle_mute(&mut self) {
        if self.level > 0.0 {
            self.previous = Some(self.level);
            self.level = 0.0;
        } else {
            self.level = self.previous.unwrap_or(DEFAULT_LEVEL);
        }
    }

    /// Whether the level is currently zero
    pub fn is_muted(&self) -> bool {
        self.level == 0.0
    }

    /// Icon tier for the current level
    pub fn tier(&self) -> VolumeTier {
        if self.level == 0.0 {
            VolumeTier::Muted
        } else if self.level < 0.5 {
            VolumeTier::Low
        } else {
            VolumeTier::High
        }
    }
}

impl Default for TrackVolume {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn create_volume() {
        let vol = TrackVolume::new(0.8);
        assert_eq!(vol.level(), 0.8);
        assert!(!vol.is_muted());
    }

    #[test]
    fn new_clamps_level() {
        assert_eq!(TrackVolume::new(1.5).level(), 1.0);
        assert_eq!(TrackVolume::new(-0.5).level(), 0.0);
    }

    #[test]
    fn set_percent_scales_and_clamps() {
        let mut vol = TrackVolume::default();
        vol.set_percent(65.0);
        assert_eq!(vol.level(), 0.65);

        vol.set_percent(150.0);
        assert_eq!(vol.level(), 1.0);

        vol.set_percent(-10.0);
        assert_eq!(vol.level(), 0.0);
    }

    #[test]
    fn double_toggle_restores_exact_level() {
        let mut vol = TrackVolume::new(0.37);

        vol.toggle_mute();
        assert!(vol.is_muted());

        vol.toggle_mute();
        assert_eq!(vol.level(), 0.37);
    }

    #[test]
    fn unmute_without_stash_restores_default() {
        let mut vol = TrackVolume::new(0.0);
        assert!(vol.is_muted());

        vol.toggle_mute();
        assert_eq!(vol.level(), DEFAULT_LEVEL);
    }

    #[test]
    fn set_percent_does_not_touch_stash() {
        let mut vol = TrackVolume::new(0.9);
        vol.toggle_mute();

        // Slider back to zero while muted: stash must survive
        vol.set_percent(0.0);
        vol.toggle_mute();
        assert_eq!(vol.level(), 0.9);
    }

    #[test]
    fn icon_tiers() {
        assert_eq!(TrackVolume::new(0.0).tier(), VolumeTier::Muted);
        assert_eq!(TrackVolume::new(0.2).tier(), VolumeTier::Low);
        assert_eq!(TrackVolume::new(0.49).tier(), VolumeTier::Low);
        assert_eq!(TrackVolume::new(0.5).tier(), VolumeTier::High);
        assert_eq!(TrackVolume::new(1.0).tier(), VolumeTier::High);
    }

    proptest! {
        #[test]
        fn double_toggle_is_identity(level in 0.01f32..=1.0) {
            let mut vol = TrackVolume::new(level);
            let before = vol.level();

            vol.toggle_mute();
            vol.toggle_mute();

            prop_assert_eq!(vol.level(), before);
        }

        #[test]
        fn set_percent_stays_in_range(percent in -1000.0f32..1000.0) {
            let mut vol = TrackVolume::default();
            vol.set_percent(percent);
            prop_assert!((0.0..=1.0).contains(&vol.level()));
        }
    }
}
