// SPDX-License-Identifier: MPL-2.0
//! Upload screen shown until a video is chosen.
//!
//! A centered box with a prompt and a "Choose video" button. Files dragged
//! onto the window are routed through window events, not through this view;
//! the box only reflects the hover highlight.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Open the native file picker.
    ChooseFile,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(ctx: ViewContext<'a>, highlighted: bool) -> Element<'a, Message> {
    let prompt = if highlighted {
        ctx.i18n.tr("upload-drop-hint")
    } else {
        ctx.i18n.tr("upload-prompt")
    };

    let content = column![
        icons::upload().size(sizing::ICON_XL),
        text(ctx.i18n.tr("upload-title")).size(typography::TITLE_LG),
        text(prompt).size(typography::BODY_LG),
        text(ctx.i18n.tr("upload-or")).size(typography::BODY),
        button(text(ctx.i18n.tr("upload-choose-button")).size(typography::BODY_LG))
            .on_press(Message::ChooseFile)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary),
    ]
    .spacing(spacing::SM)
    .align_x(Alignment::Center);

    let upload_box = container(content)
        .width(Length::Fixed(sizing::UPLOAD_BOX_WIDTH))
        .height(Length::Fixed(sizing::UPLOAD_BOX_HEIGHT))
        .center_x(Length::Fixed(sizing::UPLOAD_BOX_WIDTH))
        .center_y(Length::Fixed(sizing::UPLOAD_BOX_HEIGHT))
        .style(styles::container::upload_box(highlighted));

    container(upload_box)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::backdrop)
        .into()
}
