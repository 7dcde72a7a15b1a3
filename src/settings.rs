//! Settings Session
//!
//! Transient edit session over the display preferences: changes preview
//! live while the panel is open, and either commit on save or revert to the
//! snapshot captured at open.

use crate::models::ScreenCorner;

pub const DEFAULT_OPACITY: f64 = 0.95;

/// All persisted display preferences, captured when the settings panel
/// opens and re-applied bit-for-bit on cancel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingsSnapshot {
    pub dark_mode: bool,
    /// Stored as a fraction in `[0, 1]`; the slider operates in percent
    pub opacity: f64,
    pub free_drag: bool,
    pub notification_position: ScreenCorner,
}

impl Default for SettingsSnapshot {
    fn default() -> Self {
        Self {
            dark_mode: false,
            opacity: DEFAULT_OPACITY,
            free_drag: false,
            notification_position: ScreenCorner::default(),
        }
    }
}

/// Slider position (whole percent) → stored fraction
pub fn percent_to_fraction(percent: u32) -> f64 {
    f64::from(percent.min(100)) / 100.0
}

/// Stored fraction → slider position. Round-trips every integer percent.
pub fn fraction_to_percent(fraction: f64) -> u32 {
    (fraction.clamp(0.0, 1.0) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_round_trips_without_drift() {
        for percent in 0..=100u32 {
            let fraction = percent_to_fraction(percent);
            assert!((0.0..=1.0).contains(&fraction));
            assert_eq!(fraction_to_percent(fraction), percent);
        }
    }

    #[test]
    fn out_of_range_inputs_clamp() {
        assert_eq!(percent_to_fraction(150), 1.0);
        assert_eq!(fraction_to_percent(-0.5), 0);
        assert_eq!(fraction_to_percent(2.0), 100);
    }

    #[test]
    fn defaults_match_documented_startup_values() {
        let defaults = SettingsSnapshot::default();
        assert!(!defaults.dark_mode);
        assert_eq!(defaults.opacity, DEFAULT_OPACITY);
        assert!(!defaults.free_drag);
        assert_eq!(defaults.notification_position, ScreenCorner::TopRight);
    }

    #[test]
    fn snapshot_is_a_complete_copy() {
        // Cancel semantics rely on the snapshot carrying every field
        let snapshot = SettingsSnapshot {
            dark_mode: true,
            opacity: 0.42,
            free_drag: true,
            notification_position: ScreenCorner::BottomLeft,
        };
        let restored = snapshot;
        assert!(restored.dark_mode);
        assert_eq!(restored.opacity, 0.42);
        assert!(restored.free_drag);
        assert_eq!(restored.notification_position, ScreenCorner::BottomLeft);
    }
}
