// SPDX-License-Identifier: MPL-2.0
//! Panel layout: attachment grid, product row, optional side sheet.

use super::messages::Message;
use super::state::State;
use super::{crop_editor, product_tile, thumbnail, ViewContext};
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{scrollable, Column, Container, Row, Text};
use iced::{Element, Length};

pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let attachments = state.attachments();
    let total = attachments.len();

    let mut header = Row::new().spacing(spacing::SM).push(
        Text::new(ctx.i18n.tr("panel-attachments-title"))
            .size(typography::TITLE_SM)
            .width(Length::Fill),
    );
    if state.is_committing() {
        header = header.push(
            Text::new(ctx.i18n.tr("panel-saving"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }
    if state.pending_count() > 0 {
        let count = state.pending_count().to_string();
        header = header.push(
            Text::new(ctx.i18n.tr_with_args("panel-pending-changes", &[("count", count.as_str())]))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    let grid: Element<'a, Message> = if attachments.is_empty() {
        Text::new(ctx.i18n.tr("panel-attachments-empty"))
            .size(typography::BODY)
            .color(palette::GRAY_400)
            .into()
    } else {
        let cards = attachments.iter().enumerate().map(|(position, attachment)| {
            thumbnail::view(
                &ctx,
                thumbnail::Model {
                    attachment,
                    status: state.image_status(&attachment.id),
                    position,
                    total,
                },
            )
        });
        Row::with_children(cards).spacing(spacing::MD).wrap().into()
    };

    let products: Element<'a, Message> = if state.products().is_empty() {
        Text::new(ctx.i18n.tr("panel-products-empty"))
            .size(typography::BODY)
            .color(palette::GRAY_400)
            .into()
    } else {
        Row::with_children(
            state
                .products()
                .iter()
                .map(|product| {
                    product_tile::view(&ctx, product, state.product_image_status(&product.id))
                }),
        )
        .spacing(spacing::MD)
        .wrap()
        .into()
    };

    let main = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(grid)
        .push(Text::new(ctx.i18n.tr("panel-products-title")).size(typography::TITLE_SM))
        .push(products);

    let sheet = state
        .crop_editor()
        .map(|editor| crop_editor::view(&ctx, editor, state.image_status(editor.target())))
        .or_else(|| {
            state
                .size_picker()
                .map(|product| product_tile::size_picker(&ctx, product))
        });

    let mut layout = Row::new()
        .spacing(spacing::LG)
        .push(scrollable(Container::new(main).padding(spacing::MD)).width(Length::Fill));
    if let Some(sheet) = sheet {
        layout = layout.push(sheet);
    }

    Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
