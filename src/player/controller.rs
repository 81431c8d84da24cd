// SPDX-License-Identifier: MPL-2.0
//! The player controller.
//!
//! Maps [`PlayerEvent`]s to mutations on the media element and the
//! fullscreen host, and keeps the presentation state the element does not
//! own (layout, overlay visibility, indicators, cached time texts).
//!
//! All deferred work is expressed as [`OneShot`] deadlines. The host delivers
//! [`PlayerEvent::Tick`] periodically while [`PlayerController::needs_tick`]
//! is true.

use super::event::{Disposition, Key, PlayerEvent, Shortcut, SurfacePoint};
use super::gesture::{TapOutcome, TapTracker};
use super::settings::PlayerSettings;
use super::source::SourceRegistry;
use super::timer::OneShot;
use super::visual::{ControlsVisual, Layout, OverlayState, PlaybackSnapshot};
use crate::application::port::{FullscreenHost, MediaElement};
use crate::domain::player::{
    clamp_skip, known_duration, progress_percent, seek_target, MediaSource, PlaybackSpeed, Side,
    SkipDirection, SkipStep, SourceHandle, Volume,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error, info};

pub struct PlayerController<M, F> {
    media: M,
    fullscreen: F,
    settings: PlayerSettings,
    sources: SourceRegistry,
    taps: TapTracker,
    auto_hide: OneShot,
    left_indicator: OneShot,
    right_indicator: OneShot,
    overlay: OverlayState,
    /// Volume restored when unmuting from a silent level.
    last_audible_volume: Volume,
}

impl<M: MediaElement, F: FullscreenHost> PlayerController<M, F> {
    pub fn new(media: M, fullscreen: F, settings: PlayerSettings) -> Self {
        let current = Volume::new(media.volume());
        let last_audible_volume = if current.is_silent() {
            Volume::default()
        } else {
            current
        };

        Self {
            media,
            fullscreen,
            taps: TapTracker::new(settings.double_tap_window),
            settings,
            sources: SourceRegistry::new(),
            auto_hide: OneShot::new(),
            left_indicator: OneShot::new(),
            right_indicator: OneShot::new(),
            overlay: OverlayState::default(),
            last_audible_volume,
        }
    }

    /// Single entry point for every input the player reacts to.
    pub fn handle(&mut self, event: PlayerEvent, now: Instant) -> Disposition {
        match event {
            PlayerEvent::SelectFiles(paths) => self.load_first(paths),
            PlayerEvent::DropFiles(paths) => {
                self.overlay.upload_highlighted = false;
                self.load_first(paths)
            }
            PlayerEvent::DragOver => self.set_upload_highlight(true),
            PlayerEvent::DragLeave => self.set_upload_highlight(false),
            PlayerEvent::MetadataLoaded(handle) => self.metadata_loaded(handle),
            PlayerEvent::TimeUpdate => self.if_loaded(Self::time_update),
            PlayerEvent::TogglePlayback => self.if_loaded(Self::toggle_playback),
            PlayerEvent::Seek(percent) => self.seek(percent),
            PlayerEvent::Rewind => self.skip(self.settings.skip_step, SkipDirection::Backward),
            PlayerEvent::Forward => self.skip(self.settings.skip_step, SkipDirection::Forward),
            PlayerEvent::SetPlaybackSpeed(speed) => self.set_playback_speed(speed),
            PlayerEvent::SurfaceDoubleClicked(point) => self.skip_toward(point, now),
            PlayerEvent::SurfaceTouched(point) => self.touch(point, now),
            PlayerEvent::ToggleMute => self.if_loaded(Self::toggle_mute),
            PlayerEvent::SetVolume(volume) => self.set_volume(Volume::new(volume)),
            PlayerEvent::ToggleFullscreen => self.if_loaded(Self::toggle_fullscreen),
            PlayerEvent::FullscreenChanged(active) => self.fullscreen_changed(active),
            PlayerEvent::KeyPressed { key, input_focused } => self.key_pressed(key, input_focused),
            PlayerEvent::PointerMoved => self.pointer_moved(now),
            PlayerEvent::Tick => self.tick(now),
            PlayerEvent::Unload => self.unload(),
        }
    }

    /// Visual state for the current instant.
    #[must_use]
    pub fn visual(&self) -> ControlsVisual {
        ControlsVisual::derive(&PlaybackSnapshot::capture(&self.media), &self.overlay)
    }

    /// True while any timer is pending or playback is running.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.taps.has_pending_tap()
            || self.auto_hide.is_pending()
            || self.left_indicator.is_pending()
            || self.right_indicator.is_pending()
            || (self.is_loaded() && !self.media.is_paused())
    }

    #[must_use]
    pub fn source(&self) -> Option<&MediaSource> {
        self.sources.current()
    }

    #[must_use]
    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    #[must_use]
    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    #[must_use]
    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    #[must_use]
    pub fn fullscreen(&self) -> &F {
        &self.fullscreen
    }

    pub fn fullscreen_mut(&mut self) -> &mut F {
        &mut self.fullscreen
    }

    fn is_loaded(&self) -> bool {
        self.sources.current().is_some()
    }

    fn if_loaded(&mut self, action: fn(&mut Self) -> Disposition) -> Disposition {
        if self.is_loaded() {
            action(self)
        } else {
            Disposition::Ignored
        }
    }

    // -------------------------------------------------------------------------
    // Source selection
    // -------------------------------------------------------------------------

    fn load_first(&mut self, paths: Vec<PathBuf>) -> Disposition {
        let Some(path) = paths.into_iter().next() else {
            debug!("empty file selection ignored");
            return Disposition::Ignored;
        };

        let source = self.sources.bind(path).clone();
        info!(file = %source.display_name(), "loading media");
        self.media.set_source(&source);

        self.taps.reset();
        self.auto_hide.cancel();
        self.left_indicator.cancel();
        self.right_indicator.cancel();
        self.overlay = OverlayState {
            layout: Layout::Player,
            title: Some(source.display_name()),
            fullscreen: self.overlay.fullscreen,
            ..OverlayState::default()
        };
        Disposition::Handled
    }

    fn set_upload_highlight(&mut self, highlighted: bool) -> Disposition {
        if self.overlay.layout != Layout::Upload || self.overlay.upload_highlighted == highlighted
        {
            return Disposition::Ignored;
        }
        self.overlay.upload_highlighted = highlighted;
        Disposition::Handled
    }

    fn metadata_loaded(&mut self, handle: SourceHandle) -> Disposition {
        if !self.sources.is_current(handle) {
            debug!(%handle, "metadata for a replaced source ignored");
            return Disposition::Ignored;
        }
        self.overlay.duration = known_duration(self.media.duration());
        self.time_update()
    }

    // -------------------------------------------------------------------------
    // Playback
    // -------------------------------------------------------------------------

    fn time_update(&mut self) -> Disposition {
        let current = self.media.current_time();
        self.overlay.elapsed = current;
        self.overlay.progress = progress_percent(current, self.media.duration());
        Disposition::Handled
    }

    fn toggle_playback(&mut self) -> Disposition {
        if self.media.is_paused() {
            self.media.play();
        } else {
            self.media.pause();
        }
        Disposition::Handled
    }

    fn seek(&mut self, percent: f64) -> Disposition {
        if !self.is_loaded() {
            return Disposition::Ignored;
        }
        let Some(target) = seek_target(percent, self.media.duration()) else {
            debug!(percent, "seek ignored, duration unknown");
            return Disposition::Ignored;
        };
        self.media.set_current_time(target);
        self.time_update()
    }

    fn skip(&mut self, step: SkipStep, direction: SkipDirection) -> Disposition {
        if !self.is_loaded() {
            return Disposition::Ignored;
        }
        let target = clamp_skip(
            self.media.current_time(),
            step.delta(direction),
            self.media.duration(),
        );
        self.media.set_current_time(target);
        self.time_update()
    }

    fn set_playback_speed(&mut self, speed: PlaybackSpeed) -> Disposition {
        if !self.is_loaded() {
            return Disposition::Ignored;
        }
        self.media.set_playback_rate(speed.value());
        Disposition::Handled
    }

    // -------------------------------------------------------------------------
    // Surface gestures
    // -------------------------------------------------------------------------

    fn skip_toward(&mut self, point: SurfacePoint, now: Instant) -> Disposition {
        if !self.is_loaded() {
            return Disposition::Ignored;
        }
        let side = point.side();
        self.skip(self.settings.skip_step, side.skip_direction());
        self.show_indicator(side, now);
        Disposition::Handled
    }

    fn touch(&mut self, point: SurfacePoint, now: Instant) -> Disposition {
        if !self.is_loaded() {
            return Disposition::Ignored;
        }
        match self.taps.tap(now) {
            TapOutcome::Double => self.skip_toward(point, now),
            TapOutcome::Pending => Disposition::Handled,
        }
    }

    fn show_indicator(&mut self, side: Side, now: Instant) {
        let duration = self.settings.skip_indicator_duration;
        match side {
            Side::Left => {
                self.overlay.left_indicator = true;
                self.left_indicator.schedule(now, duration);
            }
            Side::Right => {
                self.overlay.right_indicator = true;
                self.right_indicator.schedule(now, duration);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Audio
    // -------------------------------------------------------------------------

    fn toggle_mute(&mut self) -> Disposition {
        if self.media.is_muted() {
            self.media.set_muted(false);
            if Volume::new(self.media.volume()).is_silent() {
                self.media.set_volume(self.last_audible_volume.value());
            }
        } else {
            self.media.set_muted(true);
        }
        Disposition::Handled
    }

    fn set_volume(&mut self, volume: Volume) -> Disposition {
        if !self.is_loaded() {
            return Disposition::Ignored;
        }
        self.media.set_volume(volume.value());
        if volume.is_silent() {
            self.media.set_muted(true);
        } else {
            self.last_audible_volume = volume;
            self.media.set_muted(false);
        }
        Disposition::Handled
    }

    // -------------------------------------------------------------------------
    // Fullscreen
    // -------------------------------------------------------------------------

    fn toggle_fullscreen(&mut self) -> Disposition {
        if self.fullscreen.is_fullscreen() {
            self.fullscreen.exit();
            self.overlay.fullscreen = false;
            return Disposition::Handled;
        }

        match self.fullscreen.request() {
            Ok(()) => {
                self.overlay.fullscreen = true;
                Disposition::Handled
            }
            Err(err) => {
                error!("Error attempting to enable fullscreen: {err}");
                Disposition::Ignored
            }
        }
    }

    fn exit_fullscreen(&mut self) -> Disposition {
        if !self.fullscreen.is_fullscreen() {
            return Disposition::Ignored;
        }
        self.fullscreen.exit();
        self.overlay.fullscreen = false;
        Disposition::Handled
    }

    fn fullscreen_changed(&mut self, active: bool) -> Disposition {
        if self.overlay.fullscreen == active {
            return Disposition::Ignored;
        }
        debug!(active, "fullscreen changed by the host");
        self.overlay.fullscreen = active;
        Disposition::Handled
    }

    // -------------------------------------------------------------------------
    // Keyboard and pointer
    // -------------------------------------------------------------------------

    fn key_pressed(&mut self, key: Key, input_focused: bool) -> Disposition {
        if input_focused || !self.is_loaded() {
            return Disposition::Ignored;
        }
        let Some(shortcut) = Shortcut::for_key(key) else {
            return Disposition::Ignored;
        };

        let seek_step = self.settings.keyboard_seek_step;
        let volume_step = self.settings.keyboard_volume_step;
        match shortcut {
            Shortcut::TogglePlayback => {
                self.toggle_playback();
                Disposition::Consumed
            }
            Shortcut::SeekBackward => self.skip(seek_step, SkipDirection::Backward),
            Shortcut::SeekForward => self.skip(seek_step, SkipDirection::Forward),
            Shortcut::VolumeUp => {
                self.set_volume(Volume::new(self.media.volume()).increase(volume_step))
            }
            Shortcut::VolumeDown => {
                self.set_volume(Volume::new(self.media.volume()).decrease(volume_step))
            }
            Shortcut::ToggleFullscreen => self.toggle_fullscreen(),
            Shortcut::ExitFullscreen => self.exit_fullscreen(),
            Shortcut::ToggleMute => self.toggle_mute(),
        }
    }

    fn pointer_moved(&mut self, now: Instant) -> Disposition {
        if self.overlay.layout != Layout::Player {
            return Disposition::Ignored;
        }
        self.overlay.controls_visible = true;
        self.auto_hide.schedule(now, self.settings.overlay_timeout);
        Disposition::Handled
    }

    fn tick(&mut self, now: Instant) -> Disposition {
        let mut changed = false;

        if self.taps.poll(now) && self.is_loaded() {
            self.toggle_playback();
            changed = true;
        }
        if self.auto_hide.fire(now) && !self.media.is_paused() {
            self.overlay.controls_visible = false;
            changed = true;
        }
        if self.left_indicator.fire(now) {
            self.overlay.left_indicator = false;
            changed = true;
        }
        if self.right_indicator.fire(now) {
            self.overlay.right_indicator = false;
            changed = true;
        }

        if changed {
            Disposition::Handled
        } else {
            Disposition::Ignored
        }
    }

    fn unload(&mut self) -> Disposition {
        self.taps.reset();
        self.auto_hide.cancel();
        self.left_indicator.cancel();
        self.right_indicator.cancel();
        match self.sources.release() {
            Some(_) => {
                self.media.clear_source();
                Disposition::Handled
            }
            None => Disposition::Ignored,
        }
    }
}
