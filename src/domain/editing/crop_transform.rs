// SPDX-License-Identifier: MPL-2.0
//! Crop transform computation.
//!
//! Converts an attachment's [`CropData`] into the visual transform applied to
//! its preview: translate by `(-x%, -y%)` of the element's own box, then scale
//! by `zoom`, then rotate by `rotation` degrees, all around the element's
//! centre. This is the same composition as the CSS declaration
//! `transform: translate(..) scale(..) rotate(..)` with a centred origin.
//!
//! Nothing is clamped: pans past the visible edges and rotations beyond a full
//! turn are passed through unchanged.

use crate::domain::attachment::CropData;

// =============================================================================
// Affine2
// =============================================================================

/// 2D affine matrix in CSS `matrix(a, b, c, d, e, f)` layout.
///
/// A point maps as `x' = a·x + c·y + e`, `y' = b·x + d·y + f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2 {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Affine2 {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    #[must_use]
    pub fn translation(dx: f32, dy: f32) -> Self {
        Self {
            e: dx,
            f: dy,
            ..Self::IDENTITY
        }
    }

    #[must_use]
    pub fn scaling(factor: f32) -> Self {
        Self {
            a: factor,
            d: factor,
            ..Self::IDENTITY
        }
    }

    /// Clockwise rotation in screen space (y axis pointing down).
    #[must_use]
    pub fn rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Returns `self ∘ other`: `other` is applied first.
    #[must_use]
    pub fn then_after(self, other: Self) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    /// Maps a point through the matrix.
    #[must_use]
    pub fn apply(self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// =============================================================================
// TransformSpec
// =============================================================================

/// Resolution-independent description of a crop transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSpec {
    /// Horizontal translation in percent of the element width.
    pub translate_x_percent: f32,
    /// Vertical translation in percent of the element height.
    pub translate_y_percent: f32,
    /// Uniform scale factor.
    pub scale: f32,
    /// Clockwise rotation in degrees.
    pub rotation_degrees: f32,
}

impl TransformSpec {
    pub const IDENTITY: Self = Self {
        translate_x_percent: 0.0,
        translate_y_percent: 0.0,
        scale: 1.0,
        rotation_degrees: 0.0,
    };

    /// Returns true if the transform leaves the element unchanged.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.translate_x_percent == 0.0
            && self.translate_y_percent == 0.0
            && self.scale == 1.0
            && self.rotation_degrees.rem_euclid(360.0) == 0.0
    }

    #[must_use]
    pub fn rotation_radians(&self) -> f32 {
        self.rotation_degrees.to_radians()
    }

    /// Builds the pixel-space matrix for an element of the given size.
    ///
    /// The origin is the element's top-left corner; the transform is anchored
    /// at `(width / 2, height / 2)`.
    #[must_use]
    pub fn to_matrix(&self, width: f32, height: f32) -> Affine2 {
        let (cx, cy) = (width / 2.0, height / 2.0);
        let pan = Affine2::translation(
            self.translate_x_percent / 100.0 * width,
            self.translate_y_percent / 100.0 * height,
        );

        Affine2::translation(cx, cy)
            .then_after(pan)
            .then_after(Affine2::scaling(self.scale))
            .then_after(Affine2::rotation(self.rotation_radians()))
            .then_after(Affine2::translation(-cx, -cy))
    }

    /// Formats the transform as a CSS `transform` value.
    ///
    /// Output is stable for a given input, which keeps rendered fixtures
    /// comparable across runs.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "translate({}%, {}%) scale({}) rotate({}deg)",
            self.translate_x_percent, self.translate_y_percent, self.scale, self.rotation_degrees
        )
    }
}

impl Default for TransformSpec {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Computes the preview transform for an attachment's crop.
///
/// `None` is treated as the neutral crop (`x=0, y=0, zoom=1, rotation=0`).
#[must_use]
pub fn compute_transform(crop: Option<&CropData>) -> TransformSpec {
    let crop = crop.copied().unwrap_or_default();
    TransformSpec {
        translate_x_percent: negate(crop.x),
        translate_y_percent: negate(crop.y),
        scale: crop.zoom,
        rotation_degrees: crop.rotation,
    }
}

/// Negation that never produces `-0.0`, so identity output formats cleanly.
fn negate(value: f32) -> f32 {
    if value == 0.0 {
        0.0
    } else {
        -value
    }
}
