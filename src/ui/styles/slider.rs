// SPDX-License-Identifier: MPL-2.0
//! Slider-specific style definitions.

use crate::ui::design_tokens::palette;
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Progress and volume sliders on the control bar.
///
/// The filled part of the rail uses the accent color.
pub fn player(_theme: &Theme, status: slider::Status) -> slider::Style {
    let handle_radius = match status {
        slider::Status::Hovered | slider::Status::Dragged => 7.0,
        slider::Status::Active => 6.0,
    };

    slider::Style {
        rail: slider::Rail {
            backgrounds: (
                Background::Color(palette::ACCENT_500),
                Background::Color(Color {
                    a: 0.4,
                    ..palette::WHITE
                }),
            ),
            width: 4.0,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 2.0.into(),
            },
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle {
                radius: handle_radius,
            },
            background: Background::Color(palette::ACCENT_500),
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
        },
    }
}
