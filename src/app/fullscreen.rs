// SPDX-License-Identifier: MPL-2.0
//! Window-mode fullscreen adapter.
//!
//! Implements [`FullscreenHost`] for the main window. Requests are recorded
//! synchronously and turned into an Iced `window::set_mode` task by
//! [`WindowFullscreen::take_task`] after the controller has handled the
//! event.

use crate::application::port::FullscreenHost;
use crate::error::FullscreenError;
use iced::{window, Task};

#[derive(Debug, Default)]
pub struct WindowFullscreen {
    window_id: Option<window::Id>,
    active: bool,
    pending: Option<window::Mode>,
}

impl WindowFullscreen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the window that fullscreen requests apply to.
    pub fn set_window(&mut self, id: window::Id) {
        self.window_id = Some(id);
    }

    /// Adopts the mode the window actually reports.
    ///
    /// Returns true if it differed from the tracked state; any queued switch
    /// is dropped in that case.
    pub fn sync(&mut self, mode: window::Mode) -> bool {
        let active = mode == window::Mode::Fullscreen;
        if self.active == active {
            return false;
        }
        self.active = active;
        self.pending = None;
        true
    }

    /// Returns the mode switch requested since the last call, if any.
    pub fn take_task<Message: Send + 'static>(&mut self) -> Task<Message> {
        match (self.pending.take(), self.window_id) {
            (Some(mode), Some(id)) => window::set_mode(id, mode),
            _ => Task::none(),
        }
    }
}

impl FullscreenHost for WindowFullscreen {
    fn is_fullscreen(&self) -> bool {
        self.active
    }

    fn request(&mut self) -> Result<(), FullscreenError> {
        if self.window_id.is_none() {
            return Err(FullscreenError::NoWindow);
        }
        self.active = true;
        self.pending = Some(window::Mode::Fullscreen);
        Ok(())
    }

    fn exit(&mut self) {
        if self.active {
            self.active = false;
            self.pending = Some(window::Mode::Windowed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_without_window_is_rejected() {
        let mut host = WindowFullscreen::new();
        assert_eq!(host.request(), Err(FullscreenError::NoWindow));
        assert!(!host.is_fullscreen());
    }

    #[test]
    fn request_then_exit_restores_windowed() {
        let mut host = WindowFullscreen::new();
        host.set_window(window::Id::unique());

        assert!(host.request().is_ok());
        assert!(host.is_fullscreen());
        assert_eq!(host.pending, Some(window::Mode::Fullscreen));

        host.exit();
        assert!(!host.is_fullscreen());
        assert_eq!(host.pending, Some(window::Mode::Windowed));
    }

    #[test]
    fn sync_follows_mode_left_by_the_window_manager() {
        let mut host = WindowFullscreen::new();
        host.set_window(window::Id::unique());
        assert!(host.request().is_ok());

        assert!(!host.sync(window::Mode::Fullscreen));
        assert!(host.sync(window::Mode::Windowed));
        assert!(!host.is_fullscreen());
        assert_eq!(host.pending, None);

        // The next toggle requests fullscreen again instead of only clearing
        // a stale flag.
        assert!(host.request().is_ok());
        assert_eq!(host.pending, Some(window::Mode::Fullscreen));
    }

    #[test]
    fn exit_while_windowed_queues_nothing() {
        let mut host = WindowFullscreen::new();
        host.set_window(window::Id::unique());
        host.exit();
        assert_eq!(host.pending, None);
    }
}
