// SPDX-License-Identifier: MPL-2.0
//! Editing domain types.
//!
//! - [`compute_transform`]: crop data to preview transform
//! - [`TransformSpec`], [`Affine2`]: the resulting transform

pub mod crop_transform;

pub use crop_transform::{compute_transform, Affine2, TransformSpec};
