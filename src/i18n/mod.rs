// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded from `assets/i18n/`.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, then system settings
//! - Message arguments (`{ $name }`) via [`fluent::I18n::tr_with_args`]
//! - Fallback to `en-US` when a key is missing in the current locale

pub mod fluent;

pub use fluent::I18n;
