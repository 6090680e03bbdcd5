// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use shotlist::application::port::{ImageResolver, ImageStatus};
//! use shotlist::domain::attachment::ImageSource;
//!
//! struct AlwaysMissing;
//! impl ImageResolver for AlwaysMissing {
//!     fn resolve(&self, _source: &ImageSource) -> ImageStatus {
//!         ImageStatus::Unavailable
//!     }
//! }
//! ```

pub mod port;
