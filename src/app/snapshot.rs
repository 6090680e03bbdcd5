// SPDX-License-Identifier: MPL-2.0
//! Shot snapshot files.
//!
//! A snapshot is a TOML export of one shot as the planning backend sees it.
//! It is read-only input; edits made in the panel are never written back.
//!
//! ```toml
//! [shot]
//! title = "Look 07, front"
//!
//! [[attachments]]
//! id = "a1"
//! source = "look07/front.jpg"
//! order = 0
//! primary = true
//! crop = { x = 5.0, y = 0.0, zoom = 1.2, rotation = 0.0 }
//!
//! [[products]]
//! id = "p1"
//! family_name = "Oxford Shirt"
//! colour_name = "Navy"
//! size_scope = "specific"
//! size = "M"
//! available_sizes = ["S", "M", "L"]
//! ```

use crate::domain::attachment::{Attachment, AttachmentCollection, AttachmentId, CropData, ImageSource};
use crate::domain::product::{ProductAssociation, ProductId, SizeScope};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShotSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CropRecord {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default = "neutral_zoom")]
    pub zoom: f32,
    #[serde(default)]
    pub rotation: f32,
}

fn neutral_zoom() -> f32 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttachmentRecord {
    pub id: String,
    pub source: String,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub primary: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<CropRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub id: String,
    pub family_name: String,
    pub colour_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_number: Option<String>,
    /// Free-form upstream value; unknown strings mean "unresolved".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_sizes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colour_image_path: Option<String>,
}

/// On-disk layout of a snapshot file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShotSnapshot {
    #[serde(default)]
    pub shot: ShotSection,
    #[serde(default)]
    pub attachments: Vec<AttachmentRecord>,
    #[serde(default)]
    pub products: Vec<ProductRecord>,
}

/// A snapshot converted into domain types.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shot {
    pub title: Option<String>,
    pub attachments: AttachmentCollection,
    pub products: Vec<ProductAssociation>,
}

impl From<CropRecord> for CropData {
    fn from(record: CropRecord) -> Self {
        CropData::new(record.x, record.y, record.zoom, record.rotation)
    }
}

impl From<AttachmentRecord> for Attachment {
    fn from(record: AttachmentRecord) -> Self {
        Attachment {
            id: AttachmentId::new(record.id),
            source: ImageSource::new(record.source),
            is_primary: record.primary,
            order: record.order,
            crop: record.crop.map(CropData::from),
        }
    }
}

impl From<ProductRecord> for ProductAssociation {
    fn from(record: ProductRecord) -> Self {
        ProductAssociation {
            id: ProductId::new(record.id),
            family_name: record.family_name,
            colour_name: record.colour_name,
            style_number: record.style_number,
            size_scope: record.size_scope.as_deref().and_then(SizeScope::parse),
            size: record.size,
            available_sizes: record.available_sizes,
            images: record.images.into_iter().map(ImageSource::new).collect(),
            colour_image_path: record.colour_image_path.map(ImageSource::new),
        }
    }
}

impl ShotSnapshot {
    /// Parses snapshot TOML.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| Error::Snapshot(err.to_string()))
    }

    /// Normalizes the records into a consistent shot.
    ///
    /// Gapped or duplicate orders and missing or repeated primary flags are
    /// repaired; duplicate ids and non-positive zooms are errors.
    pub fn into_shot(self) -> Result<Shot> {
        let records = self.attachments.into_iter().map(Attachment::from).collect();
        let attachments = AttachmentCollection::from_records(records)?;
        Ok(Shot {
            title: self.shot.title.filter(|title| !title.trim().is_empty()),
            attachments,
            products: self.products.into_iter().map(ProductAssociation::from).collect(),
        })
    }
}

/// Reads and converts a snapshot file.
pub fn load_from_path(path: &Path) -> Result<Shot> {
    let content = fs::read_to_string(path)?;
    let shot = ShotSnapshot::parse(&content)?.into_shot()?;
    tracing::info!(
        path = %path.display(),
        attachments = shot.attachments.len(),
        products = shot.products.len(),
        "shot snapshot loaded"
    );
    Ok(shot)
}
