// SPDX-License-Identifier: MPL-2.0
//! Media element port definition.
//!
//! This module defines the [`MediaElement`] trait: the playback object the
//! controller drives. It owns decoding, timing and audio output; the
//! controller only reads and writes its properties.
//!
//! # Design Notes
//!
//! - The element is **authoritative** for paused/playing, position, duration,
//!   volume, mute and rate. Callers never cache these.
//! - `duration()` is `None` until metadata has loaded.
//! - Setters never fail. Out-of-range values are the element's business
//!   (the reference adapter clamps them).

use crate::domain::player::MediaSource;

/// Port for a media playback element.
///
/// # Example
///
/// ```ignore
/// use iced_reel::application::port::MediaElement;
///
/// fn restart(media: &mut impl MediaElement) {
///     media.set_current_time(0.0);
///     media.play();
/// }
/// ```
pub trait MediaElement {
    /// Binds a new source. Position returns to zero, playback pauses and the
    /// duration becomes unknown until metadata loads.
    fn set_source(&mut self, source: &MediaSource);

    /// Releases the bound source, if any.
    fn clear_source(&mut self);

    /// Starts or resumes playback.
    fn play(&mut self);

    /// Pauses playback.
    fn pause(&mut self);

    /// Returns true unless playback is running.
    fn is_paused(&self) -> bool;

    /// Current position in seconds.
    fn current_time(&self) -> f64;

    /// Moves the position, in seconds.
    fn set_current_time(&mut self, secs: f64);

    /// Total length in seconds, once known.
    fn duration(&self) -> Option<f64>;

    /// Output level (0.0 to 1.0).
    fn volume(&self) -> f32;

    fn set_volume(&mut self, volume: f32);

    fn is_muted(&self) -> bool;

    fn set_muted(&mut self, muted: bool);

    /// Playback rate multiplier.
    fn playback_rate(&self) -> f64;

    fn set_playback_rate(&mut self, rate: f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn MediaElement) {}
}
