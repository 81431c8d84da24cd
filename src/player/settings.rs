// SPDX-License-Identifier: MPL-2.0
//! Resolved controller settings.

use crate::config::{
    DEFAULT_DOUBLE_TAP_MS, DEFAULT_KEYBOARD_SEEK_SECS, DEFAULT_KEYBOARD_VOLUME_STEP,
    DEFAULT_OVERLAY_TIMEOUT_MS, DEFAULT_SKIP_INDICATOR_MS, DEFAULT_SKIP_SECS,
};
use crate::domain::player::SkipStep;
use std::time::Duration;

/// Timings and step sizes used by [`PlayerController`](super::PlayerController).
///
/// Built from the `[player]` config section with every value already clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSettings {
    /// Rewind/forward buttons, double tap and double click.
    pub skip_step: SkipStep,
    /// Left/right arrow keys.
    pub keyboard_seek_step: SkipStep,
    /// Up/down arrow keys.
    pub keyboard_volume_step: f32,
    pub double_tap_window: Duration,
    /// Idle time before the controls hide during playback.
    pub overlay_timeout: Duration,
    /// How long a skip indicator stays visible.
    pub skip_indicator_duration: Duration,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            skip_step: SkipStep::new(DEFAULT_SKIP_SECS),
            keyboard_seek_step: SkipStep::new(DEFAULT_KEYBOARD_SEEK_SECS),
            keyboard_volume_step: DEFAULT_KEYBOARD_VOLUME_STEP,
            double_tap_window: Duration::from_millis(DEFAULT_DOUBLE_TAP_MS),
            overlay_timeout: Duration::from_millis(DEFAULT_OVERLAY_TIMEOUT_MS),
            skip_indicator_duration: Duration::from_millis(DEFAULT_SKIP_INDICATOR_MS),
        }
    }
}
