// SPDX-License-Identifier: MPL-2.0
//! Crop editor side sheet.
//!
//! Edits a draft copy of one attachment's crop. Nothing reaches the
//! collection until the draft is applied.

use super::messages::{CropField, Message};
use super::thumbnail::{self, Slot};
use super::ViewContext;
use crate::application::port::ImageStatus;
use crate::config::{CROP_PAN_LIMIT_PERCENT, CROP_ROTATION_LIMIT_DEGREES};
use crate::domain::attachment::{AttachmentId, CropData};
use crate::domain::editing::compute_transform;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{button, slider, Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::ops::RangeInclusive;

/// Draft crop for the attachment being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct CropDraft {
    target: AttachmentId,
    draft: CropData,
}

impl CropDraft {
    pub fn new(target: AttachmentId, initial: CropData) -> Self {
        Self {
            target,
            draft: initial,
        }
    }

    #[must_use]
    pub fn target(&self) -> &AttachmentId {
        &self.target
    }

    #[must_use]
    pub fn draft(&self) -> CropData {
        self.draft
    }

    pub fn set(&mut self, field: CropField, value: f32) {
        match field {
            CropField::PanX => self.draft.x = value,
            CropField::PanY => self.draft.y = value,
            CropField::Zoom => self.draft.zoom = value,
            CropField::Rotation => self.draft.rotation = value,
        }
    }

    pub fn reset(&mut self) {
        self.draft = CropData::default();
    }

    /// Crop to store: a neutral draft clears the crop.
    #[must_use]
    pub fn result(&self) -> Option<CropData> {
        (!self.draft.is_neutral()).then_some(self.draft)
    }
}

/// Slider bounds that always contain `value`.
///
/// Stored crops may lie outside the configured range; the slider then
/// grows to show the real value instead of pinning it at an end.
#[must_use]
pub fn slider_range(min: f32, max: f32, value: f32) -> RangeInclusive<f32> {
    if value.is_finite() {
        min.min(value)..=max.max(value)
    } else {
        min..=max
    }
}

pub fn view<'a>(
    ctx: &ViewContext<'a>,
    editor: &'a CropDraft,
    status: &'a ImageStatus,
) -> Element<'a, Message> {
    let crop = editor.draft();
    let (zoom_min, zoom_max) = ctx.zoom_range;

    let row = |label_key: &str, value: String, control: Element<'a, Message>| {
        Column::new()
            .spacing(spacing::XXS)
            .push(
                Row::new()
                    .push(Text::new(ctx.i18n.tr(label_key)).size(typography::BODY).width(Length::Fill))
                    .push(Text::new(value).size(typography::CAPTION).color(palette::GRAY_400)),
            )
            .push(control)
    };

    let pan_x = slider(
        slider_range(-CROP_PAN_LIMIT_PERCENT, CROP_PAN_LIMIT_PERCENT, crop.x),
        crop.x,
        |v| Message::CropDraftChanged(CropField::PanX, v),
    )
    .step(1.0);
    let pan_y = slider(
        slider_range(-CROP_PAN_LIMIT_PERCENT, CROP_PAN_LIMIT_PERCENT, crop.y),
        crop.y,
        |v| Message::CropDraftChanged(CropField::PanY, v),
    )
    .step(1.0);
    let zoom = slider(slider_range(zoom_min, zoom_max, crop.zoom), crop.zoom, |v| {
        Message::CropDraftChanged(CropField::Zoom, v)
    })
    .step(ctx.zoom_step);
    let rotation = slider(
        slider_range(-CROP_ROTATION_LIMIT_DEGREES, CROP_ROTATION_LIMIT_DEGREES, crop.rotation),
        crop.rotation,
        |v| Message::CropDraftChanged(CropField::Rotation, v),
    )
    .step(1.0);

    let transform = compute_transform(Some(&crop));
    let css = transform.css();
    let preview_frame = f32::from(ctx.thumbnail_size);
    let preview: Element<'a, Message> = match Slot::from_status(status) {
        Slot::LocalImage(path) => thumbnail::transformed_image(path, &transform, preview_frame),
        Slot::RemoteImage(url) => thumbnail::caption(url.to_string()),
        Slot::Placeholder => thumbnail::caption(ctx.i18n.tr("panel-image-loading")),
        Slot::Unavailable => thumbnail::caption(ctx.i18n.tr("panel-image-unavailable")),
    };
    let preview = Container::new(preview)
        .width(Length::Fixed(preview_frame))
        .height(Length::Fixed(preview_frame))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(thumbnail::slot_style);
    let readout = ctx.i18n.tr_with_args("crop-editor-preview", &[("transform", css.as_str())]);

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new(ctx.i18n.tr("crop-editor-reset"))).on_press(Message::ResetCropDraft))
        .push(button(Text::new(ctx.i18n.tr("crop-editor-cancel"))).on_press(Message::CancelCropEditor))
        .push(button(Text::new(ctx.i18n.tr("crop-editor-apply"))).on_press(Message::ApplyCropEditor));

    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("crop-editor-title")).size(typography::TITLE_SM))
        .push(Text::new(editor.target().to_string()).size(typography::CAPTION).color(palette::GRAY_400))
        .push(preview)
        .push(row("crop-editor-pan-x", format!("{:.0}%", crop.x), pan_x.into()))
        .push(row("crop-editor-pan-y", format!("{:.0}%", crop.y), pan_y.into()))
        .push(row("crop-editor-zoom", format!("{:.2}×", crop.zoom), zoom.into()))
        .push(row("crop-editor-rotation", format!("{:.0}°", crop.rotation), rotation.into()))
        .push(Text::new(readout).size(typography::CAPTION).color(palette::GRAY_400))
        .push(actions)
        .align_x(alignment::Horizontal::Left);

    Container::new(content)
        .width(Length::Fixed(sizing::SHEET_WIDTH))
        .padding(spacing::MD)
        .into()
}
