// SPDX-License-Identifier: MPL-2.0
//! Pure derivation of the control surface from playback state.
//!
//! [`ControlsVisual::derive`] is the only place that decides which icon,
//! slider position or text the controls show. Views render it verbatim and
//! tests check it without a window.

use crate::application::port::MediaElement;
use crate::domain::player::{format_time, PlaybackSpeed};

/// Which screen the player shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// No media yet; upload box with picker and drop target.
    #[default]
    Upload,
    /// Media bound; surface plus control bar.
    Player,
}

/// Glyph on the play/pause button. Shows the action a press performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackIcon {
    Play,
    Pause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIcon {
    Muted,
    Audible,
}

/// Properties read from the media element at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSnapshot {
    pub paused: bool,
    pub current_time: f64,
    pub duration: Option<f64>,
    pub volume: f32,
    pub muted: bool,
    pub playback_rate: f64,
}

impl PlaybackSnapshot {
    #[must_use]
    pub fn capture<M: MediaElement + ?Sized>(media: &M) -> Self {
        Self {
            paused: media.is_paused(),
            current_time: media.current_time(),
            duration: media.duration(),
            volume: media.volume(),
            muted: media.is_muted(),
            playback_rate: media.playback_rate(),
        }
    }
}

/// Controller-owned presentation state that the media element does not hold.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayState {
    pub layout: Layout,
    pub upload_highlighted: bool,
    /// Display name of the bound file.
    pub title: Option<String>,
    /// Position reported by the last time update.
    pub elapsed: f64,
    /// Progress reported by the last time update (0 to 100).
    pub progress: f64,
    /// Duration published when metadata loaded.
    pub duration: Option<f64>,
    pub controls_visible: bool,
    pub left_indicator: bool,
    pub right_indicator: bool,
    /// Fullscreen marker on the player container.
    pub fullscreen: bool,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            layout: Layout::Upload,
            upload_highlighted: false,
            title: None,
            elapsed: 0.0,
            progress: 0.0,
            duration: None,
            controls_visible: true,
            left_indicator: false,
            right_indicator: false,
            fullscreen: false,
        }
    }
}

/// Everything the view needs to draw the player.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsVisual {
    pub layout: Layout,
    pub upload_highlighted: bool,
    pub title: Option<String>,
    pub playback_icon: PlaybackIcon,
    pub volume_icon: VolumeIcon,
    /// Progress indicator value (0 to 100).
    pub progress: f64,
    pub elapsed_text: String,
    pub duration_text: String,
    /// Volume slider position; 0 while muted.
    pub volume_slider: f32,
    pub speed: PlaybackSpeed,
    pub controls_visible: bool,
    pub left_indicator_opacity: f32,
    pub right_indicator_opacity: f32,
    pub fullscreen_class: bool,
}

fn opacity(visible: bool) -> f32 {
    if visible {
        1.0
    } else {
        0.0
    }
}

impl ControlsVisual {
    #[must_use]
    pub fn derive(playback: &PlaybackSnapshot, overlay: &OverlayState) -> Self {
        Self {
            layout: overlay.layout,
            upload_highlighted: overlay.upload_highlighted,
            title: overlay.title.clone(),
            playback_icon: if playback.paused {
                PlaybackIcon::Play
            } else {
                PlaybackIcon::Pause
            },
            volume_icon: if playback.muted {
                VolumeIcon::Muted
            } else {
                VolumeIcon::Audible
            },
            progress: overlay.progress,
            elapsed_text: format_time(overlay.elapsed),
            duration_text: overlay.duration.map_or_else(|| format_time(0.0), format_time),
            volume_slider: if playback.muted { 0.0 } else { playback.volume },
            speed: PlaybackSpeed::nearest_preset(playback.playback_rate),
            controls_visible: overlay.controls_visible,
            left_indicator_opacity: opacity(overlay.left_indicator),
            right_indicator_opacity: opacity(overlay.right_indicator),
            fullscreen_class: overlay.fullscreen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn playing() -> PlaybackSnapshot {
        PlaybackSnapshot {
            paused: false,
            current_time: 0.0,
            duration: Some(125.0),
            volume: 0.6,
            muted: false,
            playback_rate: 1.0,
        }
    }

    #[test]
    fn paused_media_shows_play_glyph() {
        let mut playback = playing();
        let overlay = OverlayState::default();
        assert_eq!(
            ControlsVisual::derive(&playback, &overlay).playback_icon,
            PlaybackIcon::Pause
        );

        playback.paused = true;
        assert_eq!(
            ControlsVisual::derive(&playback, &overlay).playback_icon,
            PlaybackIcon::Play
        );
    }

    #[test]
    fn muted_forces_slider_to_zero() {
        let mut playback = playing();
        playback.muted = true;
        let visual = ControlsVisual::derive(&playback, &OverlayState::default());

        assert_eq!(visual.volume_icon, VolumeIcon::Muted);
        assert_abs_diff_eq!(visual.volume_slider, 0.0);
    }

    #[test]
    fn unmuted_slider_follows_volume() {
        let visual = ControlsVisual::derive(&playing(), &OverlayState::default());
        assert_eq!(visual.volume_icon, VolumeIcon::Audible);
        assert_abs_diff_eq!(visual.volume_slider, 0.6);
    }

    #[test]
    fn time_texts_come_from_overlay() {
        let overlay = OverlayState {
            layout: Layout::Player,
            elapsed: 62.5,
            progress: 50.0,
            duration: Some(125.0),
            ..OverlayState::default()
        };
        let visual = ControlsVisual::derive(&playing(), &overlay);

        assert_eq!(visual.elapsed_text, "01:02");
        assert_eq!(visual.duration_text, "02:05");
        assert_abs_diff_eq!(visual.progress, 50.0);
    }

    #[test]
    fn unknown_duration_renders_zero() {
        let visual = ControlsVisual::derive(&playing(), &OverlayState::default());
        assert_eq!(visual.duration_text, "00:00");
    }

    #[test]
    fn indicators_are_opaque_only_while_shown() {
        let overlay = OverlayState {
            left_indicator: true,
            ..OverlayState::default()
        };
        let visual = ControlsVisual::derive(&playing(), &overlay);
        assert_abs_diff_eq!(visual.left_indicator_opacity, 1.0);
        assert_abs_diff_eq!(visual.right_indicator_opacity, 0.0);
    }

    #[test]
    fn speed_snaps_to_preset() {
        let mut playback = playing();
        playback.playback_rate = 1.5;
        let visual = ControlsVisual::derive(&playback, &OverlayState::default());
        assert_eq!(visual.speed.to_string(), "1.5x");
    }
}
