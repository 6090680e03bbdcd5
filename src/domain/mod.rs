// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`attachment`]: Shot attachments ([`AttachmentCollection`](attachment::AttachmentCollection),
//!   [`CropData`](attachment::CropData))
//! - [`editing`]: Crop preview transform ([`compute_transform`](editing::compute_transform))
//! - [`error`]: Domain error types ([`AttachmentError`](error::AttachmentError),
//!   [`ProductError`](error::ProductError))
//! - [`product`]: Product associations ([`resolve`](product::resolve))

pub mod attachment;
pub mod editing;
pub mod error;
pub mod product;
