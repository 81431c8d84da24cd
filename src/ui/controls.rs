// SPDX-License-Identifier: MPL-2.0
//! Player control bar.
//!
//! Renders a [`ControlsVisual`] into a progress slider on top and a row of
//! buttons below: play/pause, rewind, forward, time display, mute, volume,
//! speed selector and fullscreen. Widgets emit [`PlayerEvent`]s directly.

use crate::domain::player::{PlaybackSpeed, PROGRESS_MAX};
use crate::i18n::fluent::I18n;
use crate::player::{ControlsVisual, PlaybackIcon, PlayerEvent, VolumeIcon};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, column, container, pick_list, row, slider, text, tooltip, Space, Text};
use iced::{Alignment, Element, Length};

/// Progress slider resolution in percent.
const PROGRESS_STEP: f64 = 0.1;

/// Volume slider resolution.
const VOLUME_STEP: f32 = 0.01;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Seconds skipped by the rewind/forward buttons, for tooltips.
    pub skip_secs: f64,
}

fn with_tooltip<'a>(
    content: impl Into<Element<'a, PlayerEvent>>,
    label: String,
) -> Element<'a, PlayerEvent> {
    tooltip(content, Text::new(label), tooltip::Position::Top)
        .gap(4)
        .into()
}

fn control_button<'a>(glyph: Text<'a>, on_press: PlayerEvent) -> button::Button<'a, PlayerEvent> {
    button(glyph)
        .on_press(on_press)
        .padding(spacing::XS)
        .width(Length::Shrink)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::control)
}

pub fn view<'a>(ctx: ViewContext<'a>, visual: &ControlsVisual) -> Element<'a, PlayerEvent> {
    let icon_size = sizing::ICON_SM;
    let skip_secs = format!("{}", ctx.skip_secs);

    let play_pause_tooltip = match visual.playback_icon {
        PlaybackIcon::Play => ctx.i18n.tr("player-play"),
        PlaybackIcon::Pause => ctx.i18n.tr("player-pause"),
    };
    let play_pause = with_tooltip(
        control_button(
            icons::sized(icons::playback_glyph(visual.playback_icon), icon_size),
            PlayerEvent::TogglePlayback,
        ),
        play_pause_tooltip,
    );

    let rewind = with_tooltip(
        control_button(icons::rewind().size(icon_size), PlayerEvent::Rewind),
        ctx.i18n
            .tr_with_args("player-rewind", &[("seconds", skip_secs.as_str())]),
    );
    let forward = with_tooltip(
        control_button(icons::forward().size(icon_size), PlayerEvent::Forward),
        ctx.i18n
            .tr_with_args("player-forward", &[("seconds", skip_secs.as_str())]),
    );

    let time_display = text(format!(
        "{} / {}",
        visual.elapsed_text, visual.duration_text
    ))
    .size(typography::BODY);

    let muted = visual.volume_icon == VolumeIcon::Muted;
    let mute_tooltip = if muted {
        ctx.i18n.tr("player-unmute")
    } else {
        ctx.i18n.tr("player-mute")
    };
    let mute_button = control_button(
        icons::sized(icons::volume_glyph(visual.volume_icon), icon_size),
        PlayerEvent::ToggleMute,
    );
    let mute_button = if muted {
        mute_button.style(styles::button::control_active)
    } else {
        mute_button
    };
    let mute = with_tooltip(mute_button, mute_tooltip);

    let volume = with_tooltip(
        slider(0.0..=1.0, visual.volume_slider, PlayerEvent::SetVolume)
            .width(Length::Fixed(sizing::VOLUME_SLIDER_WIDTH))
            .step(VOLUME_STEP)
            .style(styles::slider::player),
        ctx.i18n.tr("player-volume"),
    );

    let speed = with_tooltip(
        pick_list(
            PlaybackSpeed::presets(),
            Some(visual.speed),
            PlayerEvent::SetPlaybackSpeed,
        )
        .text_size(typography::CAPTION)
        .width(Length::Fixed(sizing::SPEED_PICKER_WIDTH)),
        ctx.i18n.tr("player-speed"),
    );

    let fullscreen_tooltip = if visual.fullscreen_class {
        ctx.i18n.tr("player-exit-fullscreen")
    } else {
        ctx.i18n.tr("player-fullscreen")
    };
    let fullscreen = with_tooltip(
        control_button(
            icons::sized(icons::fullscreen_glyph(visual.fullscreen_class), icon_size),
            PlayerEvent::ToggleFullscreen,
        ),
        fullscreen_tooltip,
    );

    let progress = slider(0.0..=PROGRESS_MAX, visual.progress, PlayerEvent::Seek)
        .step(PROGRESS_STEP)
        .width(Length::Fill)
        .style(styles::slider::player);

    let buttons = row![
        play_pause,
        rewind,
        forward,
        time_display,
        Space::new().width(Length::Fill),
        mute,
        volume,
        speed,
        fullscreen,
    ]
    .spacing(spacing::XS)
    .align_y(Alignment::Center);

    container(column![progress, buttons].spacing(spacing::XS))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CONTROL_BAR_HEIGHT))
        .padding(spacing::XS)
        .style(styles::overlay::controls_container)
        .into()
}
