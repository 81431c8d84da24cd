// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Volume**: Audio volume bounds and keyboard step
//! - **Playback Speed**: Speed selector presets
//! - **Skip**: Relative seek amounts for buttons, gestures and arrow keys
//! - **Gestures**: Double-tap window
//! - **Overlay**: Controls auto-hide and skip indicator fade

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 1.0;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Volume adjustment per arrow key press.
pub const DEFAULT_KEYBOARD_VOLUME_STEP: f32 = 0.1;

/// Smallest configurable keyboard volume step.
pub const MIN_KEYBOARD_VOLUME_STEP: f32 = 0.01;

/// Largest configurable keyboard volume step.
pub const MAX_KEYBOARD_VOLUME_STEP: f32 = 0.5;

/// Below this level audio is considered silent.
pub const SILENT_VOLUME_THRESHOLD: f32 = 0.001;

// ==========================================================================
// Playback Speed Defaults
// ==========================================================================

/// Slowest selectable playback rate.
pub const MIN_PLAYBACK_SPEED: f64 = 0.25;

/// Fastest selectable playback rate.
pub const MAX_PLAYBACK_SPEED: f64 = 2.0;

/// Normal playback rate.
pub const DEFAULT_PLAYBACK_SPEED: f64 = 1.0;

/// Rates offered by the speed selector, in ascending order.
pub const PLAYBACK_SPEED_PRESETS: [f64; 7] = [0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

// ==========================================================================
// Skip Defaults
// ==========================================================================

/// Skip amount for the rewind/forward buttons and double-tap gestures.
pub const DEFAULT_SKIP_SECS: f64 = 10.0;

/// Skip amount for the left/right arrow keys.
pub const DEFAULT_KEYBOARD_SEEK_SECS: f64 = 5.0;

/// Minimum configurable skip amount in seconds.
pub const MIN_SKIP_SECS: f64 = 0.5;

/// Maximum configurable skip amount in seconds.
pub const MAX_SKIP_SECS: f64 = 60.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Two taps closer than this form a double tap (milliseconds).
pub const DEFAULT_DOUBLE_TAP_MS: u64 = 300;

/// Minimum double-tap window (milliseconds).
pub const MIN_DOUBLE_TAP_MS: u64 = 100;

/// Maximum double-tap window (milliseconds).
pub const MAX_DOUBLE_TAP_MS: u64 = 1000;

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Idle time before the controls overlay hides during playback (milliseconds).
pub const DEFAULT_OVERLAY_TIMEOUT_MS: u64 = 3000;

/// Minimum overlay timeout (milliseconds).
pub const MIN_OVERLAY_TIMEOUT_MS: u64 = 1000;

/// Maximum overlay timeout (milliseconds).
pub const MAX_OVERLAY_TIMEOUT_MS: u64 = 30_000;

/// How long a skip indicator stays visible (milliseconds).
pub const DEFAULT_SKIP_INDICATOR_MS: u64 = 1000;

/// Minimum skip indicator duration (milliseconds).
pub const MIN_SKIP_INDICATOR_MS: u64 = 200;

/// Maximum skip indicator duration (milliseconds).
pub const MAX_SKIP_INDICATOR_MS: u64 = 5000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_VOLUME < MAX_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(MIN_KEYBOARD_VOLUME_STEP > 0.0);
    assert!(DEFAULT_KEYBOARD_VOLUME_STEP >= MIN_KEYBOARD_VOLUME_STEP);
    assert!(DEFAULT_KEYBOARD_VOLUME_STEP <= MAX_KEYBOARD_VOLUME_STEP);

    assert!(MIN_PLAYBACK_SPEED > 0.0);
    assert!(DEFAULT_PLAYBACK_SPEED >= MIN_PLAYBACK_SPEED);
    assert!(DEFAULT_PLAYBACK_SPEED <= MAX_PLAYBACK_SPEED);

    assert!(MIN_SKIP_SECS > 0.0);
    assert!(DEFAULT_SKIP_SECS >= MIN_SKIP_SECS);
    assert!(DEFAULT_SKIP_SECS <= MAX_SKIP_SECS);
    assert!(DEFAULT_KEYBOARD_SEEK_SECS >= MIN_SKIP_SECS);
    assert!(DEFAULT_KEYBOARD_SEEK_SECS <= MAX_SKIP_SECS);

    assert!(DEFAULT_DOUBLE_TAP_MS >= MIN_DOUBLE_TAP_MS);
    assert!(DEFAULT_DOUBLE_TAP_MS <= MAX_DOUBLE_TAP_MS);

    assert!(DEFAULT_OVERLAY_TIMEOUT_MS >= MIN_OVERLAY_TIMEOUT_MS);
    assert!(DEFAULT_OVERLAY_TIMEOUT_MS <= MAX_OVERLAY_TIMEOUT_MS);

    assert!(DEFAULT_SKIP_INDICATOR_MS >= MIN_SKIP_INDICATOR_MS);
    assert!(DEFAULT_SKIP_INDICATOR_MS <= MAX_SKIP_INDICATOR_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_defaults_are_valid() {
        assert_eq!(DEFAULT_VOLUME, 1.0);
        assert_eq!(DEFAULT_KEYBOARD_VOLUME_STEP, 0.1);
        assert!(SILENT_VOLUME_THRESHOLD < DEFAULT_KEYBOARD_VOLUME_STEP);
    }

    #[test]
    fn speed_presets_are_sorted_and_in_range() {
        assert!(PLAYBACK_SPEED_PRESETS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(PLAYBACK_SPEED_PRESETS[0], MIN_PLAYBACK_SPEED);
        assert_eq!(
            PLAYBACK_SPEED_PRESETS[PLAYBACK_SPEED_PRESETS.len() - 1],
            MAX_PLAYBACK_SPEED
        );
        assert!(PLAYBACK_SPEED_PRESETS.contains(&DEFAULT_PLAYBACK_SPEED));
    }

    #[test]
    fn skip_defaults_match_controls() {
        assert_eq!(DEFAULT_SKIP_SECS, 10.0);
        assert_eq!(DEFAULT_KEYBOARD_SEEK_SECS, 5.0);
    }

    #[test]
    fn timing_defaults_are_valid() {
        assert_eq!(DEFAULT_DOUBLE_TAP_MS, 300);
        assert_eq!(DEFAULT_OVERLAY_TIMEOUT_MS, 3000);
        assert_eq!(DEFAULT_SKIP_INDICATOR_MS, 1000);
    }
}
