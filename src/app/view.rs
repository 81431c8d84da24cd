// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Picks the upload screen or the player layout from the derived
//! [`ControlsVisual`].

use super::Message;
use crate::i18n::fluent::I18n;
use crate::player::{ControlsVisual, Layout, PlayerEvent};
use crate::ui::{controls, surface, upload};
use iced::widget::{column, stack, Space};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub visual: ControlsVisual,
    pub skip_secs: f64,
}

/// Renders the current layout.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.visual.layout {
        Layout::Upload => upload::view(
            upload::ViewContext { i18n: ctx.i18n },
            ctx.visual.upload_highlighted,
        )
        .map(Message::Upload),
        Layout::Player => view_player(ctx.i18n, &ctx.visual, ctx.skip_secs).map(Message::Player),
    }
}

fn view_player<'a>(
    i18n: &'a I18n,
    visual: &ControlsVisual,
    skip_secs: f64,
) -> Element<'a, PlayerEvent> {
    let surface = surface::view(surface::ViewContext { i18n, skip_secs }, visual);

    let mut layers = stack![surface].width(Length::Fill).height(Length::Fill);
    if visual.controls_visible {
        let bar = controls::view(controls::ViewContext { i18n, skip_secs }, visual);
        layers = layers.push(column![Space::new().height(Length::Fill), bar]);
    }

    layers.into()
}
