// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects and rules with no toolkit dependencies.
//!
//! # Modules
//!
//! - [`player`]: Playback types ([`Volume`](player::Volume),
//!   [`PlaybackSpeed`](player::PlaybackSpeed), [`SkipStep`](player::SkipStep),
//!   [`Side`](player::Side)) and timeline math ([`format_time`](player::format_time))

pub mod player;
