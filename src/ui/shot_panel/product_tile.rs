// SPDX-License-Identifier: MPL-2.0
//! Product tiles and the size picker sheet.

use super::messages::Message;
use super::thumbnail::{self, Slot};
use super::ViewContext;
use crate::application::port::ImageStatus;
use crate::domain::editing::TransformSpec;
use crate::domain::product::{resolve, ActionKind, ProductAssociation, SizeLabel, SizeSelection};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Localised size label; literal sizes pass through untranslated.
pub fn size_label_text(label: &SizeLabel, i18n: &I18n) -> String {
    match label.i18n_key() {
        Some(key) => i18n.tr(key),
        None => label.to_string(),
    }
}

/// Message emitted by the tile's primary button.
#[must_use]
pub fn primary_action(product: &ProductAssociation) -> Message {
    match resolve(product).primary_action_kind {
        ActionKind::ResolveSize => Message::ResolveSize(product.id.clone()),
        ActionKind::Edit => Message::EditProduct(product.id.clone()),
    }
}

/// Product tile. `image` is the resolver state of the tile image, `None`
/// when the product has no image and shows its colour name instead.
pub fn view<'a>(
    ctx: &ViewContext<'a>,
    product: &'a ProductAssociation,
    image: Option<&'a ImageStatus>,
) -> Element<'a, Message> {
    let tile = resolve(product);

    let picture: Element<'a, Message> = match image.map(Slot::from_status) {
        Some(Slot::LocalImage(path)) => {
            thumbnail::transformed_image(path, &TransformSpec::IDENTITY, sizing::PRODUCT_IMAGE)
        }
        Some(Slot::RemoteImage(url)) => thumbnail::caption(url.to_string()),
        Some(Slot::Placeholder) => thumbnail::caption(ctx.i18n.tr("panel-image-loading")),
        Some(Slot::Unavailable) => thumbnail::caption(ctx.i18n.tr("panel-image-unavailable")),
        None => Text::new(product.colour_name.clone()).size(typography::CAPTION).into(),
    };
    let picture = Container::new(picture)
        .width(Length::Fixed(sizing::PRODUCT_IMAGE))
        .height(Length::Fixed(sizing::PRODUCT_IMAGE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .clip(true);

    let mut details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(product.family_name.clone()).size(typography::BODY))
        .push(
            Text::new(product.colour_name.clone())
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    if let Some(style) = &product.style_number {
        details = details.push(
            Text::new(ctx.i18n.tr_with_args("product-style-number", &[("style", style.as_str())]))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    let status_color = match tile.primary_action_kind {
        ActionKind::ResolveSize => palette::WARNING_500,
        ActionKind::Edit => palette::SUCCESS_500,
    };
    let badge = Row::new()
        .spacing(spacing::XS)
        .push(
            Text::new(ctx.i18n.tr(tile.status_i18n_key()))
                .size(typography::CAPTION)
                .color(status_color),
        )
        .push(Text::new(size_label_text(&tile.size_label, ctx.i18n)).size(typography::CAPTION));

    let action = button(Text::new(ctx.i18n.tr(tile.primary_action_kind.i18n_key())))
        .on_press(primary_action(product));

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(picture)
            .push(details)
            .push(badge)
            .push(action),
    )
    .width(Length::Fixed(sizing::PRODUCT_TILE_WIDTH))
    .padding(spacing::SM)
    .into()
}

/// Size choices for one product: "All sizes" first, then the offered sizes.
pub fn size_picker<'a>(ctx: &ViewContext<'a>, product: &'a ProductAssociation) -> Element<'a, Message> {
    let title = ctx.i18n.tr_with_args(
        "product-size-picker-title",
        &[("product", product.family_name.as_str())],
    );

    let choices = product.available_sizes.iter().fold(
        Row::new().spacing(spacing::XS).push(
            button(Text::new(ctx.i18n.tr("product-size-picker-all")))
                .on_press(Message::SizeChosen(product.id.clone(), SizeSelection::All)),
        ),
        |row, size| {
            row.push(button(Text::new(size.clone())).on_press(Message::SizeChosen(
                product.id.clone(),
                SizeSelection::Specific(size.clone()),
            )))
        },
    );

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(title).size(typography::TITLE_SM))
            .push(choices.wrap())
            .push(
                button(Text::new(ctx.i18n.tr("product-size-picker-cancel")))
                    .on_press(Message::CloseSizePicker),
            ),
    )
    .width(Length::Fixed(sizing::SHEET_WIDTH))
    .padding(spacing::MD)
    .into()
}
