// SPDX-License-Identifier: MPL-2.0
//! Toast cards stacked over the panel's bottom-right corner.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Localised toast text with its Fluent arguments filled in.
pub fn message_text(notification: &Notification, i18n: &I18n) -> String {
    let args: Vec<(&str, &str)> = notification
        .message_args()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    if args.is_empty() {
        i18n.tr(notification.message_key())
    } else {
        i18n.tr_with_args(notification.message_key(), &args)
    }
}

/// Repeat counter shown next to a folded toast, `None` for a single event.
pub fn repeat_badge(notification: &Notification, i18n: &I18n) -> Option<String> {
    let count = notification.occurrences();
    (count > 1).then(|| {
        let count = count.to_string();
        i18n.tr_with_args("notification-repeat-count", &[("count", count.as_str())])
    })
}

/// Overlay holding every visible toast; empty space when there is none.
pub fn overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    if manager.visible_count() == 0 {
        return Space::new().into();
    }

    let cards = Column::with_children(manager.visible().map(|notification| card(notification, i18n)))
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(cards)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn card<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let accent = notification.severity().color();

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(message_text(notification, i18n))
                .size(typography::BODY)
                .width(Length::Fill),
        );
    if let Some(badge) = repeat_badge(notification, i18n) {
        content = content.push(Text::new(badge).size(typography::CAPTION).color(accent));
    }
    content = content.push(
        button(Text::new(i18n.tr("notification-dismiss")).size(typography::CAPTION))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style),
    );

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| card_style(theme, accent))
        .into()
}

fn card_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.base.color.into()),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let fill = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: fill.map(|a| Color { a, ..palette::GRAY_400 }.into()),
        text_color: theme.extended_palette().background.base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
