// SPDX-License-Identifier: MPL-2.0
//! Shot attachment domain.
//!
//! - [`Attachment`], [`AttachmentId`], [`ImageSource`], [`CropData`]: record types
//! - [`AttachmentCollection`]: ordering and primary rules for one shot

mod collection;
mod types;

pub use collection::AttachmentCollection;
pub use types::{crop_defaults, is_remote_location, Attachment, AttachmentId, CropData, ImageSource};
