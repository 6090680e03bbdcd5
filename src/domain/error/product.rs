// SPDX-License-Identifier: MPL-2.0
//! Product association transition errors.

use std::fmt;

/// Errors returned when choosing a size for a product association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// A specific size was chosen but the value is blank.
    EmptySize,

    /// The size is not offered by the product family.
    UnavailableSize(String),
}

impl ProductError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ProductError::EmptySize => "error-product-empty-size",
            ProductError::UnavailableSize(_) => "error-product-unavailable-size",
        }
    }
}

impl fmt::Display for ProductError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductError::EmptySize => write!(f, "Size must not be empty"),
            ProductError::UnavailableSize(size) => {
                write!(f, "Size is not available for this product: {size}")
            }
        }
    }
}

impl std::error::Error for ProductError {}
