// SPDX-License-Identifier: MPL-2.0
//! Clock-driven media element.
//!
//! [`ClockMedia`] implements [`MediaElement`] the way a native media element
//! behaves, without decoding: the position advances with wall-clock time
//! scaled by the playback rate, stops at the end, and the timeline only
//! exists once the duration has been attached for the bound source. Until
//! then `play` is refused, since the clock could never move.
//!
//! The host drives it with [`ClockMedia::advance`] on every tick and attaches
//! the probed duration with [`ClockMedia::attach_metadata`].

use crate::application::port::MediaElement;
use crate::domain::player::{MediaSource, PlaybackSpeed, SourceHandle, Volume};
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ClockMedia {
    source: Option<SourceHandle>,
    paused: bool,
    position: f64,
    duration: Option<f64>,
    volume: Volume,
    muted: bool,
    rate: PlaybackSpeed,
    /// Instant the position was last advanced to; `None` while paused.
    clock: Option<Instant>,
}

impl Default for ClockMedia {
    fn default() -> Self {
        Self::new(Volume::default(), false, PlaybackSpeed::default())
    }
}

impl ClockMedia {
    #[must_use]
    pub fn new(volume: Volume, muted: bool, rate: PlaybackSpeed) -> Self {
        Self {
            source: None,
            paused: true,
            position: 0.0,
            duration: None,
            volume,
            muted,
            rate,
            clock: None,
        }
    }

    /// Publishes the duration of `handle`.
    ///
    /// Returns false, leaving the element unchanged, if `handle` is not the
    /// bound source.
    pub fn attach_metadata(&mut self, handle: SourceHandle, duration: f64) -> bool {
        if self.source != Some(handle) || !duration.is_finite() || duration <= 0.0 {
            debug!(%handle, duration, "metadata not attached");
            return false;
        }
        self.duration = Some(duration);
        self.position = self.position.min(duration);
        true
    }

    /// Returns true once the position has reached the end.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.duration.is_some_and(|d| self.position >= d)
    }

    /// Moves the position forward to `now`.
    ///
    /// The first call after `play` only starts the clock. Reaching the end
    /// pauses playback. Returns true if the position changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        if self.paused {
            return false;
        }
        let Some(duration) = self.duration else {
            return false;
        };
        let Some(last) = self.clock.replace(now) else {
            return false;
        };

        let elapsed = now.saturating_duration_since(last).as_secs_f64();
        if elapsed <= 0.0 {
            return false;
        }

        self.position = (self.position + elapsed * self.rate.value()).min(duration);
        if self.position >= duration {
            debug!("playback reached the end");
            self.paused = true;
            self.clock = None;
        }
        true
    }
}

impl MediaElement for ClockMedia {
    fn set_source(&mut self, source: &MediaSource) {
        self.source = Some(source.handle());
        self.paused = true;
        self.position = 0.0;
        self.duration = None;
        self.clock = None;
    }

    fn clear_source(&mut self) {
        self.source = None;
        self.paused = true;
        self.position = 0.0;
        self.duration = None;
        self.clock = None;
    }

    fn play(&mut self) {
        if self.source.is_none() {
            return;
        }
        if self.duration.is_none() {
            debug!("play refused, duration unknown");
            return;
        }
        if self.is_ended() {
            self.position = 0.0;
        }
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
        self.clock = None;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, secs: f64) {
        let secs = if secs.is_finite() { secs.max(0.0) } else { 0.0 };
        self.position = match self.duration {
            Some(duration) => secs.min(duration),
            None => secs,
        };
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn volume(&self) -> f32 {
        self.volume.value()
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = Volume::new(volume);
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn playback_rate(&self) -> f64 {
        self.rate.value()
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.rate = PlaybackSpeed::new(rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use std::path::PathBuf;
    use std::time::Duration;

    fn loaded(duration: f64) -> (ClockMedia, SourceHandle) {
        let handle = SourceHandle::new(1);
        let mut media = ClockMedia::default();
        media.set_source(&MediaSource::new(handle, PathBuf::from("clip.mp4")));
        assert!(media.attach_metadata(handle, duration));
        (media, handle)
    }

    #[test]
    fn new_source_resets_timeline() {
        let (mut media, _) = loaded(60.0);
        media.set_current_time(30.0);
        media.set_source(&MediaSource::new(SourceHandle::new(2), PathBuf::from("b.mp4")));

        assert!(media.is_paused());
        assert_abs_diff_eq!(media.current_time(), 0.0);
        assert_eq!(media.duration(), None);
    }

    #[test]
    fn metadata_for_other_source_is_rejected() {
        let (mut media, _) = loaded(60.0);
        assert!(!media.attach_metadata(SourceHandle::new(99), 10.0));
        assert_eq!(media.duration(), Some(60.0));
    }

    #[test]
    fn advance_scales_with_rate() {
        let (mut media, _) = loaded(60.0);
        let start = Instant::now();
        media.set_playback_rate(2.0);
        media.play();

        assert!(!media.advance(start));
        assert!(media.advance(start + Duration::from_secs(3)));
        assert_abs_diff_eq!(media.current_time(), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn advance_stops_at_end_and_pauses() {
        let (mut media, _) = loaded(5.0);
        let start = Instant::now();
        media.play();
        media.advance(start);
        media.advance(start + Duration::from_secs(10));

        assert!(media.is_paused());
        assert!(media.is_ended());
        assert_abs_diff_eq!(media.current_time(), 5.0);
    }

    #[test]
    fn play_after_end_restarts() {
        let (mut media, _) = loaded(5.0);
        media.set_current_time(5.0);
        media.play();
        assert_abs_diff_eq!(media.current_time(), 0.0);
        assert!(!media.is_paused());
    }

    #[test]
    fn paused_media_does_not_advance() {
        let (mut media, _) = loaded(60.0);
        let start = Instant::now();
        assert!(!media.advance(start));
        assert!(!media.advance(start + Duration::from_secs(1)));
        assert_abs_diff_eq!(media.current_time(), 0.0);
    }

    #[test]
    fn seek_clamps_to_timeline() {
        let (mut media, _) = loaded(60.0);
        media.set_current_time(90.0);
        assert_abs_diff_eq!(media.current_time(), 60.0);
        media.set_current_time(-3.0);
        assert_abs_diff_eq!(media.current_time(), 0.0);
    }

    #[test]
    fn play_without_source_stays_paused() {
        let mut media = ClockMedia::default();
        media.play();
        assert!(media.is_paused());
    }

    #[test]
    fn play_waits_for_metadata() {
        let handle = SourceHandle::new(1);
        let mut media = ClockMedia::default();
        media.set_source(&MediaSource::new(handle, PathBuf::from("clip.mp4")));

        media.play();
        assert!(media.is_paused());

        assert!(media.attach_metadata(handle, 30.0));
        media.play();
        assert!(!media.is_paused());
    }

    #[test]
    fn volume_and_rate_are_clamped() {
        let mut media = ClockMedia::default();
        media.set_volume(3.0);
        media.set_playback_rate(10.0);
        assert_abs_diff_eq!(media.volume(), 1.0);
        assert_abs_diff_eq!(media.playback_rate(), 2.0);
    }
}
