// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events (keyboard, mouse, touch, window) are forwarded to
//! `App::update` as [`Message::RawEvent`] with their capture status, so the
//! update loop can tell whether a widget already consumed them.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Tick interval while timers are pending or media is playing.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Routes every native event to the update loop.
///
/// Window close requests get their own message so the source can be
/// released before exiting.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }

        Some(Message::RawEvent {
            window: window_id,
            event,
            captured: matches!(status, event::Status::Captured),
        })
    })
}

/// Creates the periodic tick while the player has deferred work.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
