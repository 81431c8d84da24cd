// SPDX-License-Identifier: MPL-2.0
//! Text glyph icons for the control bar.
//!
//! Icons are plain Unicode glyphs rendered with the `text` widget, so no
//! image assets are embedded. Each function maps a visual state to its glyph.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `rewind` not `skip_back_ten`).

use crate::player::{PlaybackIcon, VolumeIcon};
use iced::widget::{text, Text};

const PLAY: &str = "\u{25B6}";
const PAUSE: &str = "\u{23F8}";
const VOLUME_UP: &str = "\u{1F50A}";
const VOLUME_MUTE: &str = "\u{1F507}";
const REWIND: &str = "\u{23EA}";
const FORWARD: &str = "\u{23E9}";
const EXPAND: &str = "\u{26F6}";
const COMPRESS: &str = "\u{2716}";
const UPLOAD: &str = "\u{2B06}";

/// Glyph for the play/pause button.
#[must_use]
pub fn playback_glyph(icon: PlaybackIcon) -> &'static str {
    match icon {
        PlaybackIcon::Play => PLAY,
        PlaybackIcon::Pause => PAUSE,
    }
}

/// Glyph for the mute button.
#[must_use]
pub fn volume_glyph(icon: VolumeIcon) -> &'static str {
    match icon {
        VolumeIcon::Muted => VOLUME_MUTE,
        VolumeIcon::Audible => VOLUME_UP,
    }
}

/// Glyph for the fullscreen button.
#[must_use]
pub fn fullscreen_glyph(fullscreen: bool) -> &'static str {
    if fullscreen {
        COMPRESS
    } else {
        EXPAND
    }
}

pub fn sized<'a>(glyph: &'a str, size: f32) -> Text<'a> {
    text(glyph).size(size)
}

pub fn rewind<'a>() -> Text<'a> {
    text(REWIND)
}

pub fn forward<'a>() -> Text<'a> {
    text(FORWARD)
}

pub fn upload<'a>() -> Text<'a> {
    text(UPLOAD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playback_glyph_shows_next_action() {
        assert_eq!(playback_glyph(PlaybackIcon::Play), PLAY);
        assert_eq!(playback_glyph(PlaybackIcon::Pause), PAUSE);
    }

    #[test]
    fn volume_glyph_tracks_mute() {
        assert_eq!(volume_glyph(VolumeIcon::Muted), VOLUME_MUTE);
        assert_ne!(volume_glyph(VolumeIcon::Audible), VOLUME_MUTE);
    }

    #[test]
    fn fullscreen_glyph_differs_per_state() {
        assert_ne!(fullscreen_glyph(true), fullscreen_glyph(false));
    }
}
