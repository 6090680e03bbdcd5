// SPDX-License-Identifier: MPL-2.0
//! `shotlist` is the shot attachment panel of a fashion photo-shoot planner,
//! built with the Iced GUI framework.
//!
//! It manages the images attached to one shot (ordering, primary image,
//! crop framing) and the products linked to it, with Fluent localization and
//! TOML preferences.
//!
//! # Layers
//!
//! - [`domain`]: attachment collection rules, crop transform, product resolver
//! - [`application`]: ports implemented by adapters
//! - [`infrastructure`]: filesystem image resolution
//! - [`ui`]: the attachment panel and toast notifications
//! - [`app`]: Iced application shell, config, snapshot loading

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

pub use app::config;

#[cfg(test)]
pub(crate) mod test_utils;
