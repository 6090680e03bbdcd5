// SPDX-License-Identifier: MPL-2.0
//! Test helpers for float comparisons.
//!
//! Crop offsets and zooms go through trigonometry and percentage scaling, so
//! tests compare them with `approx` instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;
