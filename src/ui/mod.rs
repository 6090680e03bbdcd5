// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`shot_panel`] - Attachment grid, crop editor and product tiles
//! - [`notifications`] - Toast notification system for user feedback
//! - [`theming`] - Light/Dark/System theme mode
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod notifications;
pub mod shot_panel;
pub mod theming;
