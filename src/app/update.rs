// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Native events are translated into [`PlayerEvent`]s here. Everything the
//! controller decides is then turned back into Iced tasks: duration probes
//! for newly bound sources and window mode switches for fullscreen.

use super::fullscreen::WindowFullscreen;
use super::Message;
use crate::domain::player::{MediaSource, SourceHandle};
use crate::error::{Error, MediaError};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{probe_duration_async, ClockMedia};
use crate::player::{Key, Layout, PlayerController, PlayerEvent};
use crate::ui::surface::surface_hit;
use iced::keyboard::{self, key::Named};
use iced::{mouse, touch, window, Point, Size, Task};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Controller wired to the in-process media clock and the main window.
pub type Player = PlayerController<ClockMedia, WindowFullscreen>;

/// Maximum gap between two clicks on the surface to count as a double-click.
const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(350);

/// File extensions offered by the open file dialog.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mkv", "mov", "avi", "m4v", "ogv"];

/// Mutable application state the handlers operate on.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub player: &'a mut Player,
    pub window_size: &'a mut Size,
    pub cursor: &'a mut Option<Point>,
    pub last_click: &'a mut Option<Instant>,
}

/// Hands an event to the controller and collects the follow-up tasks.
pub fn dispatch(ctx: &mut UpdateContext<'_>, event: PlayerEvent, now: Instant) -> Task<Message> {
    let previous = ctx.player.source().map(MediaSource::handle);
    ctx.player.handle(event, now);

    let mut tasks = vec![ctx.player.fullscreen_mut().take_task()];
    if let Some(source) = ctx.player.source() {
        if previous != Some(source.handle()) {
            tasks.push(probe_task(source));
        }
    }
    Task::batch(tasks)
}

fn probe_task(source: &MediaSource) -> Task<Message> {
    let handle = source.handle();
    let path = source.path().to_path_buf();
    Task::perform(probe_duration_async(path), move |result| {
        Message::MetadataProbed { handle, result }
    })
}

/// Routes a native event from the event subscription.
pub fn handle_raw_event(
    ctx: &mut UpdateContext<'_>,
    window: window::Id,
    event: iced::Event,
    captured: bool,
    now: Instant,
) -> Task<Message> {
    ctx.player.fullscreen_mut().set_window(window);

    match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            if modifiers.command() || modifiers.alt() {
                return Task::none();
            }
            match player_key(&key) {
                Some(key) => dispatch(
                    ctx,
                    PlayerEvent::KeyPressed {
                        key,
                        input_focused: captured,
                    },
                    now,
                ),
                None => Task::none(),
            }
        }
        iced::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            // Resolve against the layout the user saw before the reveal.
            let point = if captured {
                None
            } else {
                hit_surface(ctx, position)
            };
            let reveal = dispatch(ctx, PlayerEvent::PointerMoved, now);
            match point {
                Some(point) => Task::batch([
                    reveal,
                    dispatch(ctx, PlayerEvent::SurfaceTouched(point), now),
                ]),
                None => reveal,
            }
        }
        iced::Event::Touch(touch::Event::FingerMoved { .. }) => {
            dispatch(ctx, PlayerEvent::PointerMoved, now)
        }
        iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            *ctx.cursor = Some(position);
            dispatch(ctx, PlayerEvent::PointerMoved, now)
        }
        iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) if !captured => {
            handle_surface_click(ctx, now)
        }
        iced::Event::Window(window::Event::FileHovered(_)) => {
            dispatch(ctx, PlayerEvent::DragOver, now)
        }
        iced::Event::Window(window::Event::FilesHoveredLeft) => {
            dispatch(ctx, PlayerEvent::DragLeave, now)
        }
        iced::Event::Window(window::Event::FileDropped(path)) => {
            dispatch(ctx, PlayerEvent::DropFiles(vec![path]), now)
        }
        iced::Event::Window(window::Event::Opened { size, .. }) => {
            *ctx.window_size = size;
            Task::none()
        }
        // Mode changes made outside the app (window manager, title bar
        // button) surface as resizes.
        iced::Event::Window(window::Event::Resized(size)) => {
            *ctx.window_size = size;
            window::mode(window).map(Message::WindowModeObserved)
        }
        _ => Task::none(),
    }
}

fn player_key(key: &keyboard::Key) -> Option<Key> {
    match key {
        keyboard::Key::Named(Named::Space) => Some(Key::Space),
        keyboard::Key::Named(Named::ArrowLeft) => Some(Key::ArrowLeft),
        keyboard::Key::Named(Named::ArrowRight) => Some(Key::ArrowRight),
        keyboard::Key::Named(Named::ArrowUp) => Some(Key::ArrowUp),
        keyboard::Key::Named(Named::ArrowDown) => Some(Key::ArrowDown),
        keyboard::Key::Named(Named::Escape) => Some(Key::Escape),
        keyboard::Key::Character(c) => c.as_str().chars().next().map(Key::Character),
        _ => None,
    }
}

fn hit_surface(ctx: &UpdateContext<'_>, position: Point) -> Option<crate::player::SurfacePoint> {
    let overlay = ctx.player.overlay();
    if overlay.layout != Layout::Player {
        return None;
    }
    surface_hit(position, *ctx.window_size, overlay.controls_visible)
}

/// A click on the surface toggles playback; a second click inside the
/// double-click window additionally skips toward the clicked side.
fn handle_surface_click(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let Some(position) = *ctx.cursor else {
        return Task::none();
    };
    let Some(point) = hit_surface(ctx, position) else {
        return Task::none();
    };

    let is_double = ctx
        .last_click
        .is_some_and(|last| now.saturating_duration_since(last) < DOUBLE_CLICK_THRESHOLD);
    *ctx.last_click = if is_double { None } else { Some(now) };

    let toggle = dispatch(ctx, PlayerEvent::TogglePlayback, now);
    if is_double {
        Task::batch([
            toggle,
            dispatch(ctx, PlayerEvent::SurfaceDoubleClicked(point), now),
        ])
    } else {
        toggle
    }
}

/// Advances the media clock, then fires due timers.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let time_task = if ctx.player.media_mut().advance(now) {
        dispatch(ctx, PlayerEvent::TimeUpdate, now)
    } else {
        Task::none()
    };
    Task::batch([time_task, dispatch(ctx, PlayerEvent::Tick, now)])
}

pub fn handle_window_mode(
    ctx: &mut UpdateContext<'_>,
    mode: window::Mode,
    now: Instant,
) -> Task<Message> {
    if !ctx.player.fullscreen_mut().sync(mode) {
        return Task::none();
    }
    let active = mode == window::Mode::Fullscreen;
    dispatch(ctx, PlayerEvent::FullscreenChanged(active), now)
}

pub fn handle_metadata_probed(
    ctx: &mut UpdateContext<'_>,
    handle: SourceHandle,
    result: Result<f64, MediaError>,
    now: Instant,
) -> Task<Message> {
    match result {
        Ok(duration) => {
            if ctx.player.media_mut().attach_metadata(handle, duration) {
                dispatch(ctx, PlayerEvent::MetadataLoaded(handle), now)
            } else {
                tracing::debug!(%handle, duration, "discarding metadata for an inactive source");
                Task::none()
            }
        }
        Err(err) => {
            let err = Error::from(err);
            tracing::warn!(%handle, "could not read media duration: {err}");
            Task::none()
        }
    }
}

/// Opens the native file picker filtered to video files.
pub fn handle_open_file_dialog(i18n: &I18n) -> Task<Message> {
    let filter_name = i18n.tr("dialog-filter-video");
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter(filter_name, VIDEO_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

pub fn handle_open_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
    now: Instant,
) -> Task<Message> {
    match path {
        Some(path) => dispatch(ctx, PlayerEvent::SelectFiles(vec![path]), now),
        None => Task::none(),
    }
}

/// Releases the source before the window goes away.
pub fn handle_close_requested(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let unload = dispatch(ctx, PlayerEvent::Unload, now);
    unload.chain(iced::exit())
}
