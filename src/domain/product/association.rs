// SPDX-License-Identifier: MPL-2.0
//! Product-to-shot association records.

use crate::domain::attachment::ImageSource;
use crate::domain::error::ProductError;
use std::fmt;

/// Identifier of a product association within a shot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Whether an association covers every size or a single one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeScope {
    All,
    Specific,
}

impl SizeScope {
    /// Parses an upstream scope string.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Unrecognized values yield `None`, which the resolver treats as
    /// unresolved.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" => Some(SizeScope::All),
            "specific" => Some(SizeScope::Specific),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SizeScope::All => "all",
            SizeScope::Specific => "specific",
        }
    }
}

/// Derived resolution state of an association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssociationStatus {
    /// The size scope has not been chosen yet.
    PendingSize,
    Resolved,
}

impl AssociationStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AssociationStatus::PendingSize => "pending-size",
            AssociationStatus::Resolved => "resolved",
        }
    }
}

impl fmt::Display for AssociationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size choice made by the user when resolving an association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeSelection {
    All,
    Specific(String),
}

/// Link between a product variant and a shot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductAssociation {
    pub id: ProductId,
    pub family_name: String,
    pub colour_name: String,
    pub style_number: Option<String>,
    /// `None` until the user picks a scope.
    pub size_scope: Option<SizeScope>,
    /// Only meaningful when `size_scope` is [`SizeScope::Specific`].
    pub size: Option<String>,
    /// Sizes offered by the product family; empty means unrestricted.
    pub available_sizes: Vec<String>,
    /// Variant images; the first one represents the product on its tile.
    pub images: Vec<ImageSource>,
    /// Colourway swatch, used when the variant has no images.
    pub colour_image_path: Option<ImageSource>,
}

impl ProductAssociation {
    /// Creates an unresolved association.
    pub fn new(
        id: impl Into<ProductId>,
        family_name: impl Into<String>,
        colour_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            family_name: family_name.into(),
            colour_name: colour_name.into(),
            ..Self::default()
        }
    }

    /// Returns the derived status; never stored.
    #[must_use]
    pub fn status(&self) -> AssociationStatus {
        match self.size_scope {
            None => AssociationStatus::PendingSize,
            Some(_) => AssociationStatus::Resolved,
        }
    }

    /// Returns the size that applies, ignoring any stale value left on an
    /// all-sizes association.
    #[must_use]
    pub fn effective_size(&self) -> Option<&str> {
        match self.size_scope {
            Some(SizeScope::Specific) => self
                .size
                .as_deref()
                .map(str::trim)
                .filter(|size| !size.is_empty()),
            _ => None,
        }
    }

    /// Returns the image representing this product on its tile.
    #[must_use]
    pub fn tile_image(&self) -> Option<&ImageSource> {
        self.images.first().or(self.colour_image_path.as_ref())
    }

    /// Applies a size choice and returns the resolved association.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::EmptySize`] for a blank specific size and
    /// [`ProductError::UnavailableSize`] when the family restricts its sizes
    /// and the choice is not among them.
    pub fn choose_size(&self, selection: SizeSelection) -> Result<Self, ProductError> {
        let mut next = self.clone();
        match selection {
            SizeSelection::All => {
                next.size_scope = Some(SizeScope::All);
                next.size = None;
            }
            SizeSelection::Specific(size) => {
                let size = size.trim();
                if size.is_empty() {
                    return Err(ProductError::EmptySize);
                }
                if !self.available_sizes.is_empty()
                    && !self.available_sizes.iter().any(|offered| offered == size)
                {
                    return Err(ProductError::UnavailableSize(size.to_string()));
                }
                next.size_scope = Some(SizeScope::Specific);
                next.size = Some(size.to_string());
            }
        }
        Ok(next)
    }
}
