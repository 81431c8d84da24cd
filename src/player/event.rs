// SPDX-License-Identifier: MPL-2.0
//! Input events understood by the player controller.
//!
//! One variant per logical gesture. The host translates its raw input
//! (Iced events, widget messages) into these and feeds them to
//! [`PlayerController::handle`](super::PlayerController::handle).

use crate::domain::player::{PlaybackSpeed, Side, SourceHandle};
use std::path::PathBuf;

/// Horizontal position of a pointer or touch on the video surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    /// Pointer x in window coordinates.
    pub x: f32,
    /// Left edge of the surface in window coordinates.
    pub left: f32,
    /// Surface width.
    pub width: f32,
}

impl SurfacePoint {
    #[must_use]
    pub fn new(x: f32, left: f32, width: f32) -> Self {
        Self { x, left, width }
    }

    /// Half of the surface the point falls in.
    #[must_use]
    pub fn side(&self) -> Side {
        Side::locate(self.x, self.left, self.width)
    }
}

/// Keys the controller cares about, already stripped of platform details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Escape,
    Character(char),
}

/// Action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    TogglePlayback,
    SeekBackward,
    SeekForward,
    VolumeUp,
    VolumeDown,
    ToggleFullscreen,
    ExitFullscreen,
    ToggleMute,
}

impl Shortcut {
    /// Resolves the shortcut bound to `key`, if any.
    #[must_use]
    pub fn for_key(key: Key) -> Option<Self> {
        match key {
            Key::Space => Some(Self::TogglePlayback),
            Key::ArrowLeft => Some(Self::SeekBackward),
            Key::ArrowRight => Some(Self::SeekForward),
            Key::ArrowUp => Some(Self::VolumeUp),
            Key::ArrowDown => Some(Self::VolumeDown),
            Key::Escape => Some(Self::ExitFullscreen),
            Key::Character(c) => match c.to_ascii_lowercase() {
                'f' => Some(Self::ToggleFullscreen),
                'm' => Some(Self::ToggleMute),
                _ => None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// Files chosen in the picker. Only the first one is used.
    SelectFiles(Vec<PathBuf>),
    /// Files dropped on the upload box. Only the first one is used.
    DropFiles(Vec<PathBuf>),
    /// A drag is hovering the upload box.
    DragOver,
    /// The hovering drag left without dropping.
    DragLeave,
    /// The media element reports metadata for `handle`.
    MetadataLoaded(SourceHandle),
    /// The media element position moved.
    TimeUpdate,
    /// Play/pause button, space key, or a click on the surface.
    TogglePlayback,
    /// Progress indicator moved to a percentage (0 to 100).
    Seek(f64),
    Rewind,
    Forward,
    SetPlaybackSpeed(PlaybackSpeed),
    /// Double click on the surface.
    SurfaceDoubleClicked(SurfacePoint),
    /// Touch press on the surface.
    SurfaceTouched(SurfacePoint),
    ToggleMute,
    /// Volume slider moved (0.0 to 1.0).
    SetVolume(f32),
    ToggleFullscreen,
    /// The host left or entered fullscreen on its own (window manager,
    /// title bar button).
    FullscreenChanged(bool),
    KeyPressed {
        key: Key,
        /// An input control holds keyboard focus.
        input_focused: bool,
    },
    /// Pointer moved over the player.
    PointerMoved,
    /// Periodic host tick; fires due timers.
    Tick,
    /// The host is going away; release the source.
    Unload,
}

/// How the controller dealt with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Nothing happened.
    Ignored,
    /// State changed.
    Handled,
    /// State changed and the host must not apply its default action.
    Consumed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_shortcuts_ignore_case() {
        assert_eq!(
            Shortcut::for_key(Key::Character('f')),
            Some(Shortcut::ToggleFullscreen)
        );
        assert_eq!(
            Shortcut::for_key(Key::Character('F')),
            Some(Shortcut::ToggleFullscreen)
        );
        assert_eq!(
            Shortcut::for_key(Key::Character('M')),
            Some(Shortcut::ToggleMute)
        );
        assert_eq!(Shortcut::for_key(Key::Character('x')), None);
    }

    #[test]
    fn arrows_map_to_seek_and_volume() {
        assert_eq!(
            Shortcut::for_key(Key::ArrowLeft),
            Some(Shortcut::SeekBackward)
        );
        assert_eq!(
            Shortcut::for_key(Key::ArrowRight),
            Some(Shortcut::SeekForward)
        );
        assert_eq!(Shortcut::for_key(Key::ArrowUp), Some(Shortcut::VolumeUp));
        assert_eq!(
            Shortcut::for_key(Key::ArrowDown),
            Some(Shortcut::VolumeDown)
        );
    }

    #[test]
    fn surface_point_side_splits_at_midpoint() {
        assert_eq!(SurfacePoint::new(10.0, 0.0, 100.0).side(), Side::Left);
        assert_eq!(SurfacePoint::new(50.0, 0.0, 100.0).side(), Side::Right);
        assert_eq!(SurfacePoint::new(120.0, 100.0, 100.0).side(), Side::Left);
    }
}
