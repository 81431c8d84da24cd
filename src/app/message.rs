// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::player::SourceHandle;
use crate::error::MediaError;
use crate::player::PlayerEvent;
use crate::ui::upload;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Control bar and surface widgets.
    Player(PlayerEvent),
    Upload(upload::Message),
    /// Native event forwarded by the event subscription.
    RawEvent {
        window: iced::window::Id,
        event: iced::Event,
        /// A widget already handled the event (e.g. a focused input).
        captured: bool,
    },
    Tick(Instant), // Periodic tick for timers and the media clock
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// Window mode reported after a resize.
    WindowModeObserved(iced::window::Mode),
    /// Result from probing the duration of a bound source.
    MetadataProbed {
        handle: SourceHandle,
        result: Result<f64, MediaError>,
    },
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional video path to preload on startup.
    pub file_path: Option<String>,
}
