// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the control bar and skip indicators.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dark translucent strip behind the control bar.
#[must_use]
pub fn controls_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Round skip indicator badge, faded by `alpha` (0 hidden, 1 shown).
pub fn skip_indicator(alpha: f32, rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM * alpha,
            ..BLACK
        })),
        text_color: Some(Color { a: alpha, ..WHITE }),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE * alpha,
                ..WHITE
            },
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_indicator_is_fully_transparent() {
        let style = skip_indicator(0.0, 8.0)(&Theme::Dark);
        assert_eq!(style.text_color.map(|c| c.a), Some(0.0));
        assert_eq!(
            style.background,
            Some(Background::Color(Color { a: 0.0, ..BLACK }))
        );
    }
}
