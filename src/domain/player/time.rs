// SPDX-License-Identifier: MPL-2.0
//! Timeline arithmetic shared by the controller and the views.
//!
//! The progress indicator works in percent (0–100) while the media element
//! works in seconds. A duration is only meaningful once metadata has loaded,
//! so every helper takes it as `Option<f64>` and treats non-finite or
//! non-positive values as unknown.

/// Progress indicator range upper bound.
pub const PROGRESS_MAX: f64 = 100.0;

/// Returns the duration if it is usable for timeline math.
#[must_use]
pub fn known_duration(duration: Option<f64>) -> Option<f64> {
    duration.filter(|d| d.is_finite() && *d > 0.0)
}

/// Formats seconds as zero-padded `MM:SS`.
///
/// Minutes are not wrapped into hours: 3665 s renders as `61:05`.
/// Negative and non-finite inputs render as `00:00`.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() {
        seconds.max(0.0).floor() as u64
    } else {
        0
    };
    let minutes = total_secs / 60;
    let secs = total_secs % 60;
    format!("{minutes:02}:{secs:02}")
}

/// Elapsed fraction of the timeline in percent.
///
/// Returns 0 while the duration is unknown.
#[must_use]
pub fn progress_percent(current: f64, duration: Option<f64>) -> f64 {
    match known_duration(duration) {
        Some(duration) => current / duration * PROGRESS_MAX,
        None => 0.0,
    }
}

/// Converts a progress indicator value back into a timeline position.
///
/// Returns `None` while the duration is unknown.
#[must_use]
pub fn seek_target(percent: f64, duration: Option<f64>) -> Option<f64> {
    known_duration(duration).map(|duration| percent / PROGRESS_MAX * duration)
}

/// Applies a relative seek, saturating at both ends of the timeline.
///
/// With an unknown duration only the lower bound applies.
#[must_use]
pub fn clamp_skip(current: f64, delta: f64, duration: Option<f64>) -> f64 {
    let target = current + delta;
    match known_duration(duration) {
        Some(duration) => target.min(duration).max(0.0),
        None => target.max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn format_time_handles_zero() {
        assert_eq!(format_time(0.0), "00:00");
    }

    #[test]
    fn format_time_handles_seconds() {
        assert_eq!(format_time(45.9), "00:45");
    }

    #[test]
    fn format_time_handles_minutes() {
        assert_eq!(format_time(125.0), "02:05");
    }

    #[test]
    fn format_time_keeps_counting_minutes_past_an_hour() {
        assert_eq!(format_time(3665.0), "61:05");
    }

    #[test]
    fn format_time_handles_invalid_input() {
        assert_eq!(format_time(-10.0), "00:00");
        assert_eq!(format_time(f64::NAN), "00:00");
        assert_eq!(format_time(f64::INFINITY), "00:00");
    }

    #[test]
    fn progress_is_fraction_of_duration() {
        assert_abs_diff_eq!(progress_percent(30.0, Some(120.0)), 25.0);
        assert_abs_diff_eq!(progress_percent(120.0, Some(120.0)), 100.0);
        assert_abs_diff_eq!(progress_percent(0.0, Some(120.0)), 0.0);
    }

    #[test]
    fn progress_is_zero_without_duration() {
        assert_abs_diff_eq!(progress_percent(30.0, None), 0.0);
        assert_abs_diff_eq!(progress_percent(30.0, Some(0.0)), 0.0);
        assert_abs_diff_eq!(progress_percent(30.0, Some(f64::NAN)), 0.0);
    }

    #[test]
    fn seek_target_scales_percent() {
        assert_eq!(seek_target(50.0, Some(125.0)), Some(62.5));
        assert_eq!(seek_target(0.0, Some(125.0)), Some(0.0));
        assert_eq!(seek_target(50.0, None), None);
    }

    #[test]
    fn clamp_skip_saturates() {
        assert_abs_diff_eq!(clamp_skip(5.0, -10.0, Some(60.0)), 0.0);
        assert_abs_diff_eq!(clamp_skip(55.0, 10.0, Some(60.0)), 60.0);
        assert_abs_diff_eq!(clamp_skip(30.0, 10.0, Some(60.0)), 40.0);
        assert_abs_diff_eq!(clamp_skip(30.0, -5.0, Some(60.0)), 25.0);
    }

    #[test]
    fn clamp_skip_without_duration_only_bounds_below() {
        assert_abs_diff_eq!(clamp_skip(3.0, -5.0, None), 0.0);
        assert_abs_diff_eq!(clamp_skip(3.0, 5.0, None), 8.0);
    }
}
