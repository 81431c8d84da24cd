// SPDX-License-Identifier: MPL-2.0
//! Video surface with its skip indicators.
//!
//! The surface fills the window. While the control bar is shown it overlays
//! the bottom of the surface, and pointer input there belongs to the bar.

use crate::i18n::fluent::I18n;
use crate::player::{ControlsVisual, SurfacePoint};
use crate::ui::design_tokens::{sizing, typography};
use crate::ui::styles;
use iced::widget::{container, row, stack, text};
use iced::{Element, Length, Point, Size};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub skip_secs: f64,
}

/// Resolves a window position to a point on the video surface.
///
/// Returns `None` for positions outside the window or over the visible
/// control bar.
#[must_use]
pub fn surface_hit(position: Point, window: Size, controls_visible: bool) -> Option<SurfacePoint> {
    let inside = position.x >= 0.0
        && position.y >= 0.0
        && position.x < window.width
        && position.y < window.height;
    if !inside {
        return None;
    }

    if controls_visible && position.y >= window.height - sizing::CONTROL_BAR_HEIGHT {
        return None;
    }

    Some(SurfacePoint::new(position.x, 0.0, window.width))
}

fn indicator<'a, Message: 'a>(label: String, alpha: f32) -> Element<'a, Message> {
    let badge = container(text(label).size(typography::TITLE_MD))
        .center_x(Length::Fixed(sizing::SKIP_INDICATOR))
        .center_y(Length::Fixed(sizing::SKIP_INDICATOR))
        .style(styles::overlay::skip_indicator(
            alpha,
            sizing::SKIP_INDICATOR / 2.0,
        ));

    container(badge)
        .center_x(Length::FillPortion(1))
        .center_y(Length::Fill)
        .into()
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>, visual: &ControlsVisual) -> Element<'a, Message> {
    let seconds = format!("{}", ctx.skip_secs);
    let title = visual.title.clone().unwrap_or_default();

    let backdrop = container(text(title).size(typography::BODY_LG))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::surface);

    let indicators = row![
        indicator(
            ctx.i18n
                .tr_with_args("skip-indicator-back", &[("seconds", seconds.as_str())]),
            visual.left_indicator_opacity,
        ),
        indicator(
            ctx.i18n
                .tr_with_args("skip-indicator-forward", &[("seconds", seconds.as_str())]),
            visual.right_indicator_opacity,
        ),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    stack![backdrop, indicators]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
