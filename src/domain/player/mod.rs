// SPDX-License-Identifier: MPL-2.0
//! Player value types and timeline math.

pub mod newtypes;
pub mod source;
pub mod time;

pub use newtypes::{PlaybackSpeed, Side, SkipDirection, SkipStep, Volume, SPEED_PRESETS};
pub use source::{MediaSource, SourceHandle};
pub use time::{clamp_skip, format_time, known_duration, progress_percent, seek_target, PROGRESS_MAX};
