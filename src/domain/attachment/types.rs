// SPDX-License-Identifier: MPL-2.0
//! Attachment value objects.
//!
//! Records arrive already materialized by the upstream persistence layer;
//! these types only carry them through the collection rules.

use std::fmt;

// =============================================================================
// Crop Defaults
// =============================================================================

/// Neutral crop values used when an attachment has no crop data.
pub mod crop_defaults {
    /// Horizontal pan in percent of the element box.
    pub const X: f32 = 0.0;
    /// Vertical pan in percent of the element box.
    pub const Y: f32 = 0.0;
    /// Zoom factor (1.0 = original size).
    pub const ZOOM: f32 = 1.0;
    /// Rotation in degrees.
    pub const ROTATION: f32 = 0.0;
}

// =============================================================================
// AttachmentId
// =============================================================================

/// Opaque attachment identifier, stable across reorders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttachmentId(String);

impl AttachmentId {
    /// Wraps an upstream identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AttachmentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AttachmentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// =============================================================================
// ImageSource
// =============================================================================

/// Reference to image bytes: a URL or a storage path.
///
/// The core never interprets the reference; it is handed to an
/// [`ImageResolver`](crate::application::port::ImageResolver) as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageSource(String);

impl ImageSource {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the reference looks like a remote URL.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        is_remote_location(&self.0)
    }
}

/// Returns true for `http://` and `https://` locations, in any case.
#[must_use]
pub fn is_remote_location(location: &str) -> bool {
    let scheme = location.split_once("://").map(|(scheme, _)| scheme);
    matches!(scheme, Some(s) if s.eq_ignore_ascii_case("http") || s.eq_ignore_ascii_case("https"))
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// CropData
// =============================================================================

/// Pan/zoom/rotation applied to an attachment's rendered preview.
///
/// `x` and `y` are percentages of the element box and are deliberately
/// unbounded so an image can be panned past its visible edges. `zoom` must be
/// strictly positive; the collection rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropData {
    pub x: f32,
    pub y: f32,
    pub zoom: f32,
    pub rotation: f32,
}

impl CropData {
    #[must_use]
    pub fn new(x: f32, y: f32, zoom: f32, rotation: f32) -> Self {
        Self {
            x,
            y,
            zoom,
            rotation,
        }
    }

    /// Returns whether the zoom factor is usable. NaN is not.
    #[must_use]
    pub fn has_valid_zoom(&self) -> bool {
        self.zoom > 0.0
    }

    /// Returns whether this crop is the neutral transform.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for CropData {
    fn default() -> Self {
        Self {
            x: crop_defaults::X,
            y: crop_defaults::Y,
            zoom: crop_defaults::ZOOM,
            rotation: crop_defaults::ROTATION,
        }
    }
}

// =============================================================================
// Attachment
// =============================================================================

/// One image record belonging to a shot.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub id: AttachmentId,
    pub source: ImageSource,
    pub is_primary: bool,
    pub order: u32,
    pub crop: Option<CropData>,
}

impl Attachment {
    /// Creates a non-primary attachment without crop data.
    ///
    /// `order` is assigned by the collection on insertion.
    pub fn new(id: impl Into<AttachmentId>, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: ImageSource::new(source),
            is_primary: false,
            order: 0,
            crop: None,
        }
    }

    #[must_use]
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn with_primary(mut self, is_primary: bool) -> Self {
        self.is_primary = is_primary;
        self
    }

    #[must_use]
    pub fn with_crop(mut self, crop: CropData) -> Self {
        self.crop = Some(crop);
        self
    }

    /// Returns the crop to render, falling back to the neutral crop.
    #[must_use]
    pub fn effective_crop(&self) -> CropData {
        self.crop.unwrap_or_default()
    }
}
