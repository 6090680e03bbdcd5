// SPDX-License-Identifier: MPL-2.0
//! Shot attachment panel.
//!
//! Renders a shot's images and linked products, and turns button presses and
//! drag results into collection mutations.
//!
//! ## Composition
//!
//! - [`state`]: mutation serialization against host commits
//! - [`thumbnail`]: one card per attachment, branching on image status
//! - [`crop_editor`]: draft crop side sheet
//! - [`product_tile`]: resolver-driven product tiles and size picker
//!
//! The host owns persistence and image resolution. It answers
//! [`Effect::Commit`] with [`Message::Committed`] or [`Message::CommitRejected`]
//! and [`Effect::ResolveImages`] with one [`Message::ImageResolved`] per entry.
//! Product tile images follow the same path through
//! [`Effect::ResolveProductImages`] and [`Message::ProductImageResolved`].

pub mod crop_editor;
mod messages;
pub mod product_tile;
mod state;
pub mod thumbnail;
mod view;

pub use messages::{CropField, Effect, Message, Revision};
pub use state::{Intent, State};
pub use view::view;

use crate::config::PanelConfig;
use crate::i18n::fluent::I18n;

/// Rendering inputs that do not live in panel state.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub thumbnail_size: u16,
    pub zoom_range: (f32, f32),
    pub zoom_step: f32,
}

impl<'a> ViewContext<'a> {
    pub fn new(i18n: &'a I18n, panel: &PanelConfig) -> Self {
        Self {
            i18n,
            thumbnail_size: panel.thumbnail_size(),
            zoom_range: panel.crop_zoom_range(),
            zoom_step: panel.crop_zoom_step(),
        }
    }
}
