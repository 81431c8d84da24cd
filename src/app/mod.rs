// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the upload screen and
//! the player.
//!
//! The `App` struct owns the player controller, wired to the media clock and
//! the window fullscreen adapter, and translates Iced messages into
//! controller events. Rendering is a pure function of the controller's
//! [`ControlsVisual`](crate::player::ControlsVisual).

pub mod fullscreen;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::{Player, VIDEO_EXTENSIONS};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::infrastructure::ClockMedia;
use crate::player::{PlayerController, PlayerEvent};
use crate::ui::upload;
use fullscreen::WindowFullscreen;
use iced::{window, Element, Point, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    player: Player,
    window_size: Size,
    /// Last known cursor position, used to resolve surface clicks.
    cursor: Option<Point>,
    /// Time of the last surface click, for double-click detection.
    last_click: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("source", &self.player.source())
            .field("window_size", &self.window_size)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings.
///
/// Close requests are intercepted so the media source can be released
/// before the application exits.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be Fn; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the player from the loaded configuration and optionally
    /// preloads the video passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }

        let i18n = I18n::new(flags.lang.clone(), &config);
        let media = ClockMedia::new(
            config.player.initial_volume(),
            config.player.muted.unwrap_or(false),
            config.player.initial_speed(),
        );
        let player = PlayerController::new(
            media,
            WindowFullscreen::new(),
            config.player.to_settings(),
        );

        let mut app = App {
            i18n,
            player,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            cursor: None,
            last_click: None,
        };

        let task = match flags.file_path {
            Some(path) => {
                tracing::info!(path = %path, "opening file from command line");
                app.update(Message::Player(PlayerEvent::SelectFiles(vec![
                    PathBuf::from(path),
                ])))
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.player.source() {
            Some(source) => format!("{} - {app_name}", source.display_name()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.player.needs_tick()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            player: &mut self.player,
            window_size: &mut self.window_size,
            cursor: &mut self.cursor,
            last_click: &mut self.last_click,
        };

        match message {
            Message::Player(event) => update::dispatch(&mut ctx, event, now),
            Message::Upload(upload::Message::ChooseFile) => {
                update::handle_open_file_dialog(ctx.i18n)
            }
            Message::RawEvent {
                window,
                event,
                captured,
            } => update::handle_raw_event(&mut ctx, window, event, captured, now),
            Message::Tick(instant) => update::handle_tick(&mut ctx, instant),
            Message::OpenFileDialogResult(path) => {
                update::handle_open_file_dialog_result(&mut ctx, path, now)
            }
            Message::WindowModeObserved(mode) => update::handle_window_mode(&mut ctx, mode, now),
            Message::MetadataProbed { handle, result } => {
                update::handle_metadata_probed(&mut ctx, handle, result, now)
            }
            Message::WindowCloseRequested(_) => update::handle_close_requested(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            visual: self.player.visual(),
            skip_secs: self.player.settings().skip_step.value(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Layout;

    fn test_app() -> App {
        App {
            i18n: I18n::default(),
            player: PlayerController::new(
                ClockMedia::default(),
                WindowFullscreen::new(),
                crate::player::PlayerSettings::default(),
            ),
            window_size: Size::new(800.0, 600.0),
            cursor: None,
            last_click: None,
        }
    }

    #[test]
    fn title_shows_app_name_when_nothing_is_loaded() {
        let app = test_app();
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }

    #[test]
    fn title_shows_file_name_once_loaded() {
        let mut app = test_app();
        let _ = app.update(Message::Player(PlayerEvent::SelectFiles(vec![
            PathBuf::from("/videos/holiday.mp4"),
        ])));

        assert!(app.title().starts_with("holiday.mp4 - "));
        assert_eq!(app.player.overlay().layout, Layout::Player);
    }

    #[test]
    fn playback_without_duration_leaves_no_tick_running() {
        let mut app = test_app();
        let _ = app.update(Message::Player(PlayerEvent::SelectFiles(vec![
            PathBuf::from("clip.mp4"),
        ])));
        let _ = app.update(Message::Player(PlayerEvent::TogglePlayback));

        assert!(!app.player.needs_tick());
        assert_eq!(
            app.player.visual().playback_icon,
            crate::player::PlaybackIcon::Play
        );
    }

    #[test]
    fn dialog_cancel_keeps_upload_layout() {
        let mut app = test_app();
        let _ = app.update(Message::OpenFileDialogResult(None));
        assert_eq!(app.player.overlay().layout, Layout::Upload);
    }

    #[test]
    fn stale_probe_result_is_discarded() {
        let mut app = test_app();
        let _ = app.update(Message::Player(PlayerEvent::SelectFiles(vec![
            PathBuf::from("first.mp4"),
        ])));
        let first = app.player.source().map(|s| s.handle()).expect("bound");
        let _ = app.update(Message::Player(PlayerEvent::SelectFiles(vec![
            PathBuf::from("second.mp4"),
        ])));

        let _ = app.update(Message::MetadataProbed {
            handle: first,
            result: Ok(120.0),
        });

        assert_eq!(app.player.overlay().duration, None);
    }

    #[test]
    fn probe_result_sets_duration() {
        let mut app = test_app();
        let _ = app.update(Message::Player(PlayerEvent::SelectFiles(vec![
            PathBuf::from("clip.mp4"),
        ])));
        let handle = app.player.source().map(|s| s.handle()).expect("bound");

        let _ = app.update(Message::MetadataProbed {
            handle,
            result: Ok(125.0),
        });

        assert_eq!(app.player.overlay().duration, Some(125.0));
        assert_eq!(app.player.visual().duration_text, "02:05");
    }
}
