// SPDX-License-Identifier: MPL-2.0
//! Single/double tap disambiguation for touch input.
//!
//! A tap that arrives within the window after the previous tap is a double
//! tap and cancels the pending single-tap action. Any other tap arms the
//! single-tap timer; if nothing follows before it expires, the single tap
//! is delivered by [`TapTracker::poll`].

use super::timer::OneShot;
use std::time::{Duration, Instant};

/// What a tap turned out to be at the moment it landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Second tap inside the window.
    Double,
    /// Possibly the first half of a double tap; resolved by `poll`.
    Pending,
}

#[derive(Debug, Clone)]
pub struct TapTracker {
    window: Duration,
    last_tap: Option<Instant>,
    single_tap: OneShot,
}

impl TapTracker {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_tap: None,
            single_tap: OneShot::new(),
        }
    }

    /// Registers a tap at `now`.
    ///
    /// The gap must be strictly positive and strictly below the window.
    /// Every tap, double or not, becomes the reference for the next one.
    pub fn tap(&mut self, now: Instant) -> TapOutcome {
        let is_double = self.last_tap.is_some_and(|last| {
            let gap = now.saturating_duration_since(last);
            !gap.is_zero() && gap < self.window
        });
        self.last_tap = Some(now);

        if is_double {
            self.single_tap.cancel();
            TapOutcome::Double
        } else {
            self.single_tap.schedule(now, self.window);
            TapOutcome::Pending
        }
    }

    /// Returns true when a pending single tap has matured.
    pub fn poll(&mut self, now: Instant) -> bool {
        self.single_tap.fire(now)
    }

    #[must_use]
    pub fn has_pending_tap(&self) -> bool {
        self.single_tap.is_pending()
    }

    /// Forgets the last tap and drops any pending single tap.
    pub fn reset(&mut self) {
        self.last_tap = None;
        self.single_tap.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(300);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn quick_second_tap_is_double_and_cancels_single() {
        let start = Instant::now();
        let mut taps = TapTracker::new(WINDOW);

        assert_eq!(taps.tap(start), TapOutcome::Pending);
        assert_eq!(taps.tap(start + ms(150)), TapOutcome::Double);
        assert!(!taps.has_pending_tap());
        assert!(!taps.poll(start + ms(1000)));
    }

    #[test]
    fn lone_tap_matures_after_window() {
        let start = Instant::now();
        let mut taps = TapTracker::new(WINDOW);

        taps.tap(start);
        assert!(!taps.poll(start + ms(299)));
        assert!(taps.poll(start + ms(300)));
        assert!(!taps.poll(start + ms(301)));
    }

    #[test]
    fn gap_equal_to_window_is_not_double() {
        let start = Instant::now();
        let mut taps = TapTracker::new(WINDOW);

        taps.tap(start);
        assert!(taps.poll(start + WINDOW));
        assert_eq!(taps.tap(start + WINDOW), TapOutcome::Pending);
    }

    #[test]
    fn simultaneous_taps_are_not_double() {
        let start = Instant::now();
        let mut taps = TapTracker::new(WINDOW);

        taps.tap(start);
        assert_eq!(taps.tap(start), TapOutcome::Pending);
        assert!(taps.has_pending_tap());
    }

    #[test]
    fn third_quick_tap_pairs_with_second() {
        let start = Instant::now();
        let mut taps = TapTracker::new(WINDOW);

        taps.tap(start);
        assert_eq!(taps.tap(start + ms(100)), TapOutcome::Double);
        assert_eq!(taps.tap(start + ms(200)), TapOutcome::Double);
    }

    #[test]
    fn reset_clears_history() {
        let start = Instant::now();
        let mut taps = TapTracker::new(WINDOW);

        taps.tap(start);
        taps.reset();
        assert!(!taps.has_pending_tap());
        assert_eq!(taps.tap(start + ms(100)), TapOutcome::Pending);
    }
}
