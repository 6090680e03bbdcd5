// SPDX-License-Identifier: MPL-2.0
//! Attachment thumbnail card.
//!
//! The image slot picks one of three branches from the resolver state:
//! a placeholder while loading, the image once ready, a notice when the
//! source points to nothing renderable.

use super::messages::Message;
use super::ViewContext;
use crate::application::port::ImageStatus;
use crate::domain::attachment::{is_remote_location, Attachment};
use crate::domain::editing::{compute_transform, TransformSpec};
use crate::ui::design_tokens::{border, palette, radius, spacing, typography};
use iced::widget::image::Handle;
use iced::widget::{button, container, image, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Padding, Radians, Rotation, Theme, Vector};

/// Which branch the image slot renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<'a> {
    Placeholder,
    LocalImage(&'a str),
    /// Ready, but only reachable over the network; the location is shown.
    RemoteImage(&'a str),
    Unavailable,
}

impl<'a> Slot<'a> {
    pub fn from_status(status: &'a ImageStatus) -> Self {
        match status {
            ImageStatus::Loading => Slot::Placeholder,
            ImageStatus::Unavailable => Slot::Unavailable,
            ImageStatus::Ready(location) if is_remote_location(location) => {
                Slot::RemoteImage(location)
            }
            ImageStatus::Ready(location) => Slot::LocalImage(location),
        }
    }
}

/// Widget parameters that reproduce a [`TransformSpec`] inside a square
/// frame of `frame` pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Displacement of the image centre from the frame centre.
    pub offset: Vector,
    /// Rendered edge length of the image.
    pub extent: f32,
    pub rotation: Radians,
}

impl Placement {
    pub fn new(transform: &TransformSpec, frame: f32) -> Self {
        let centre = frame / 2.0;
        let (x, y) = transform.to_matrix(frame, frame).apply(centre, centre);
        Self {
            offset: Vector::new(x - centre, y - centre),
            extent: (frame * transform.scale).max(1.0),
            rotation: Radians(transform.rotation_radians()),
        }
    }

    /// Padding that moves a centred image by `offset`.
    #[must_use]
    pub fn padding(&self) -> Padding {
        Padding {
            top: (2.0 * self.offset.y).max(0.0),
            right: (-2.0 * self.offset.x).max(0.0),
            bottom: (-2.0 * self.offset.y).max(0.0),
            left: (2.0 * self.offset.x).max(0.0),
        }
    }
}

/// Local image rendered with its crop transform, clipped to a square frame.
pub fn transformed_image<'a, M: 'a>(path: &str, transform: &TransformSpec, frame: f32) -> Element<'a, M> {
    let placement = Placement::new(transform, frame);
    let picture = image(Handle::from_path(path))
        .width(Length::Fixed(placement.extent))
        .height(Length::Fixed(placement.extent))
        .rotation(Rotation::Floating(placement.rotation));

    Container::new(Container::new(picture).padding(placement.padding()))
        .width(Length::Fixed(frame))
        .height(Length::Fixed(frame))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .clip(true)
        .into()
}

/// Everything the card needs about one collection member.
pub struct Model<'a> {
    pub attachment: &'a Attachment,
    pub status: &'a ImageStatus,
    pub position: usize,
    pub total: usize,
}

pub fn view<'a>(ctx: &ViewContext<'a>, model: Model<'a>) -> Element<'a, Message> {
    let size = f32::from(ctx.thumbnail_size);
    let attachment = model.attachment;

    let transform = compute_transform(attachment.crop.as_ref());
    let slot: Element<'a, Message> = match Slot::from_status(model.status) {
        Slot::LocalImage(path) => transformed_image(path, &transform, size),
        Slot::RemoteImage(url) => caption(url.to_string()),
        Slot::Placeholder => caption(ctx.i18n.tr("panel-image-loading")),
        Slot::Unavailable => caption(ctx.i18n.tr("panel-image-unavailable")),
    };

    let slot = Container::new(slot)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(slot_style);

    let position = (model.position + 1).to_string();
    let total = model.total.to_string();
    let mut details = Column::new().spacing(spacing::XXS).push(
        Text::new(ctx.i18n.tr_with_args(
            "panel-attachment-position",
            &[("position", position.as_str()), ("total", total.as_str())],
        ))
        .size(typography::CAPTION),
    );
    if attachment.is_primary {
        details = details.push(
            Text::new(ctx.i18n.tr("panel-attachment-primary"))
                .size(typography::CAPTION)
                .color(palette::PRIMARY_500),
        );
    }
    if !transform.is_identity() {
        details = details.push(
            Text::new(ctx.i18n.tr("panel-attachment-cropped"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    let id = &attachment.id;
    let enabled = |message: Message, allowed: bool| allowed.then_some(message);
    let last = model.total.saturating_sub(1);
    let to_isize = |index: usize| isize::try_from(index).unwrap_or(isize::MAX);

    let actions = Row::new()
        .spacing(spacing::XXS)
        .push(action(
            ctx.i18n.tr("panel-action-move-earlier"),
            enabled(
                Message::Moved {
                    from: model.position,
                    to: to_isize(model.position) - 1,
                },
                model.position > 0,
            ),
        ))
        .push(action(
            ctx.i18n.tr("panel-action-move-later"),
            enabled(
                Message::Moved {
                    from: model.position,
                    to: to_isize(model.position) + 1,
                },
                model.position < last,
            ),
        ))
        .push(action(
            ctx.i18n.tr("panel-action-set-primary"),
            enabled(Message::SetPrimary(id.clone()), !attachment.is_primary),
        ))
        .push(action(
            ctx.i18n.tr("panel-action-edit-crop"),
            enabled(Message::OpenCropEditor(id.clone()), true),
        ))
        .push(action(
            ctx.i18n.tr("panel-action-delete"),
            enabled(Message::Delete(id.clone()), true),
        ));

    Column::new()
        .spacing(spacing::XS)
        .push(slot)
        .push(details)
        .push(actions)
        .into()
}

pub(super) fn caption<'a, M: 'a>(content: String) -> Element<'a, M> {
    Text::new(content)
        .size(typography::CAPTION)
        .color(palette::GRAY_400)
        .into()
}

fn action<'a>(label: String, on_press: Option<Message>) -> Element<'a, Message> {
    button(Text::new(label).size(typography::CAPTION))
        .padding(spacing::XXS)
        .on_press_maybe(on_press)
        .into()
}

pub(super) fn slot_style(theme: &Theme) -> container::Style {
    container::Style {
        border: iced::Border {
            color: theme.extended_palette().background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
