// SPDX-License-Identifier: MPL-2.0
//! One-shot deadline timer.
//!
//! The controller never owns real timers. Each deferred action is a
//! [`OneShot`] holding at most one deadline; scheduling replaces the previous
//! deadline and the host's periodic tick fires it.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneShot {
    deadline: Option<Instant>,
}

impl OneShot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer for `now + after`, dropping any earlier deadline.
    pub fn schedule(&mut self, now: Instant, after: Duration) {
        self.deadline = Some(now + after);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Disarms and returns true once `now` has reached the deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_deadline() {
        let start = Instant::now();
        let mut timer = OneShot::new();
        timer.schedule(start, Duration::from_millis(300));

        assert!(!timer.fire(start + Duration::from_millis(299)));
        assert!(timer.fire(start + Duration::from_millis(300)));
        assert!(!timer.fire(start + Duration::from_millis(400)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn reschedule_replaces_deadline() {
        let start = Instant::now();
        let mut timer = OneShot::new();
        timer.schedule(start, Duration::from_millis(300));
        timer.schedule(start + Duration::from_millis(200), Duration::from_millis(300));

        assert_eq!(timer.deadline(), Some(start + Duration::from_millis(500)));
        assert!(!timer.fire(start + Duration::from_millis(300)));
        assert!(timer.fire(start + Duration::from_millis(500)));
    }

    #[test]
    fn cancel_disarms() {
        let start = Instant::now();
        let mut timer = OneShot::new();
        timer.schedule(start, Duration::ZERO);
        timer.cancel();
        assert!(!timer.fire(start + Duration::from_secs(1)));
    }
}
