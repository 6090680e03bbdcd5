// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`image_resolver`]: Local filesystem image resolution (implements [`ImageResolver`])
//!
//! [`ImageResolver`]: crate::application::port::ImageResolver

pub mod image_resolver;

pub use image_resolver::LocalImageResolver;
