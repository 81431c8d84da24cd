// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Upload box. Highlighted while a file drag hovers the window.
pub fn upload_box(highlighted: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let (border_color, fill) = if highlighted {
            (palette::ACCENT_500, palette::UPLOAD_FILL_ACTIVE)
        } else {
            (palette::UPLOAD_BORDER, palette::UPLOAD_FILL)
        };

        container::Style {
            background: Some(Background::Color(fill)),
            text_color: Some(palette::WHITE),
            border: Border {
                color: border_color,
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            ..Default::default()
        }
    }
}

/// Black backdrop behind the video surface.
pub fn surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: Some(palette::GRAY_200),
        ..Default::default()
    }
}

/// Window background behind the upload box.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        ..Default::default()
    }
}
