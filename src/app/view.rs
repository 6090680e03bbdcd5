// SPDX-License-Identifier: MPL-2.0
//! Root view composition: shot heading, panel, toast overlay.

use super::Message;
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{self, toast};
use crate::ui::shot_panel;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub shot_title: Option<&'a str>,
    pub panel: &'a shot_panel::State,
    pub notifications: &'a notifications::Manager,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = match ctx.shot_title {
        Some(title) => ctx.i18n.tr_with_args("app-shot-heading", &[("title", title)]),
        None => ctx.i18n.tr("app-untitled-shot"),
    };

    let panel = shot_panel::view(
        shot_panel::ViewContext::new(ctx.i18n, &ctx.config.panel),
        ctx.panel,
    )
    .map(Message::Panel);

    let mode = ctx.i18n.tr(ctx.config.general.theme_mode.i18n_key());
    let theme_toggle = button(
        Text::new(ctx.i18n.tr_with_args("app-theme-toggle", &[("mode", mode.as_str())]))
            .size(typography::CAPTION),
    )
    .padding(spacing::XXS)
    .on_press(Message::CycleTheme);

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(heading).size(typography::TITLE_MD).width(Length::Fill))
        .push(theme_toggle);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(panel);

    let base = Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = toast::overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(Container::new(toasts).padding(spacing::MD))
        .into()
}
