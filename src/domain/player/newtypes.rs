// SPDX-License-Identifier: MPL-2.0
//! Player value types.
//!
//! This module provides type-safe wrappers for playback values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_PLAYBACK_SPEED, DEFAULT_SKIP_SECS, DEFAULT_VOLUME, MAX_PLAYBACK_SPEED, MAX_SKIP_SECS,
    MAX_VOLUME, MIN_PLAYBACK_SPEED, MIN_SKIP_SECS, MIN_VOLUME, PLAYBACK_SPEED_PRESETS,
    SILENT_VOLUME_THRESHOLD,
};
use std::fmt;

// =============================================================================
// Volume
// =============================================================================

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// # Example
///
/// ```
/// use iced_reel::domain::player::Volume;
///
/// let vol = Volume::new(0.5);
/// assert_eq!(vol.value(), 0.5);
///
/// // Values outside range are clamped
/// assert_eq!(Volume::new(2.0).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    ///
    /// Levels below the audible threshold snap to exactly zero so that
    /// repeated keyboard steps land on 0.0 instead of a float residue.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        let clamped = if volume.is_nan() {
            MIN_VOLUME
        } else {
            volume.clamp(MIN_VOLUME, MAX_VOLUME)
        };
        if clamped < SILENT_VOLUME_THRESHOLD {
            Self(MIN_VOLUME)
        } else {
            Self(clamped)
        }
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if the level is inaudible.
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 < SILENT_VOLUME_THRESHOLD
    }

    /// Raises the level by `step`, saturating at the maximum.
    #[must_use]
    pub fn increase(self, step: f32) -> Self {
        Self::new(self.0 + step)
    }

    /// Lowers the level by `step`, saturating at the minimum.
    #[must_use]
    pub fn decrease(self, step: f32) -> Self {
        Self::new(self.0 - step)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

// =============================================================================
// PlaybackSpeed
// =============================================================================

/// Playback rate multiplier offered by the speed selector.
///
/// The selector only lists presets, but a speed can also come from the
/// settings file; [`PlaybackSpeed::nearest_preset`] snaps those.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSpeed(f64);

/// Every selectable speed, slowest first.
pub static SPEED_PRESETS: [PlaybackSpeed; 7] = [
    PlaybackSpeed(PLAYBACK_SPEED_PRESETS[0]),
    PlaybackSpeed(PLAYBACK_SPEED_PRESETS[1]),
    PlaybackSpeed(PLAYBACK_SPEED_PRESETS[2]),
    PlaybackSpeed(PLAYBACK_SPEED_PRESETS[3]),
    PlaybackSpeed(PLAYBACK_SPEED_PRESETS[4]),
    PlaybackSpeed(PLAYBACK_SPEED_PRESETS[5]),
    PlaybackSpeed(PLAYBACK_SPEED_PRESETS[6]),
];

impl PlaybackSpeed {
    /// Creates a speed, clamping to the selectable range.
    #[must_use]
    pub fn new(speed: f64) -> Self {
        if speed.is_nan() {
            return Self::default();
        }
        Self(speed.clamp(MIN_PLAYBACK_SPEED, MAX_PLAYBACK_SPEED))
    }

    /// Returns the preset closest to `speed`.
    #[must_use]
    pub fn nearest_preset(speed: f64) -> Self {
        let target = Self::new(speed).0;
        SPEED_PRESETS
            .iter()
            .copied()
            .min_by(|a, b| (a.0 - target).abs().total_cmp(&(b.0 - target).abs()))
            .unwrap_or_default()
    }

    /// Returns the multiplier.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns all presets for the selector.
    #[must_use]
    pub fn presets() -> &'static [PlaybackSpeed] {
        &SPEED_PRESETS
    }
}

impl Default for PlaybackSpeed {
    fn default() -> Self {
        Self(DEFAULT_PLAYBACK_SPEED)
    }
}

impl fmt::Display for PlaybackSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

// =============================================================================
// SkipStep
// =============================================================================

/// Relative seek amount in seconds, always positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipStep(f64);

impl SkipStep {
    /// Creates a new skip step, clamping to valid range.
    #[must_use]
    pub fn new(secs: f64) -> Self {
        if secs.is_nan() {
            return Self::default();
        }
        Self(secs.clamp(MIN_SKIP_SECS, MAX_SKIP_SECS))
    }

    /// Returns the amount in seconds.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Signed delta for a skip toward `direction`.
    #[must_use]
    pub fn delta(self, direction: SkipDirection) -> f64 {
        match direction {
            SkipDirection::Backward => -self.0,
            SkipDirection::Forward => self.0,
        }
    }
}

impl Default for SkipStep {
    fn default() -> Self {
        Self(DEFAULT_SKIP_SECS)
    }
}

// =============================================================================
// Direction / Side
// =============================================================================

/// Direction of a relative seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipDirection {
    Backward,
    Forward,
}

/// Half of the video surface a gesture landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Locates `x` against the horizontal midpoint of a surface spanning
    /// `left..left + width`. The midpoint itself belongs to the right half.
    #[must_use]
    pub fn locate(x: f32, left: f32, width: f32) -> Self {
        if x < left + width / 2.0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Left half rewinds, right half skips forward.
    #[must_use]
    pub fn skip_direction(self) -> SkipDirection {
        match self {
            Side::Left => SkipDirection::Backward,
            Side::Right => SkipDirection::Forward,
        }
    }
}
