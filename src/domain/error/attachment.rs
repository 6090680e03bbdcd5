// SPDX-License-Identifier: MPL-2.0
//! Attachment collection errors.
//!
//! Both kinds are local and recoverable: the caller keeps its previous
//! collection and reports the failure to the user.

use crate::domain::attachment::AttachmentId;
use std::fmt;

/// Crop data rejected by the collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// Zoom must be strictly positive (NaN included in the rejection).
    NonPositiveZoom(f32),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NonPositiveZoom(zoom) => {
                write!(f, "Crop zoom must be greater than zero (got {zoom})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors returned by [`AttachmentCollection`](crate::domain::attachment::AttachmentCollection)
/// operations.
#[derive(Debug, Clone, PartialEq)]
pub enum AttachmentError {
    /// The referenced id is not a member of the collection.
    NotFound(AttachmentId),

    /// The supplied crop data is invalid.
    Validation(ValidationError),

    /// An attachment with the same id is already a member.
    DuplicateId(AttachmentId),
}

impl AttachmentError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AttachmentError::NotFound(_) => "error-attachment-not-found",
            AttachmentError::Validation(ValidationError::NonPositiveZoom(_)) => {
                "error-attachment-invalid-zoom"
            }
            AttachmentError::DuplicateId(_) => "error-attachment-duplicate",
        }
    }

    /// Returns true for the not-found kind.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, AttachmentError::NotFound(_))
    }

    /// Returns true for the validation kind.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, AttachmentError::Validation(_))
    }
}

impl fmt::Display for AttachmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachmentError::NotFound(id) => write!(f, "Attachment not found: {id}"),
            AttachmentError::Validation(err) => write!(f, "Invalid crop: {err}"),
            AttachmentError::DuplicateId(id) => write!(f, "Duplicate attachment id: {id}"),
        }
    }
}

impl std::error::Error for AttachmentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AttachmentError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for AttachmentError {
    fn from(err: ValidationError) -> Self {
        AttachmentError::Validation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_id() {
        let err = AttachmentError::NotFound(AttachmentId::new("img-7"));
        assert_eq!(err.to_string(), "Attachment not found: img-7");
    }

    #[test]
    fn validation_converts_and_reports_source() {
        let err: AttachmentError = ValidationError::NonPositiveZoom(0.0).into();
        assert!(err.is_validation());
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.i18n_key(), "error-attachment-invalid-zoom");
    }

    #[test]
    fn i18n_keys_are_distinct() {
        let keys = [
            AttachmentError::NotFound(AttachmentId::new("a")).i18n_key(),
            AttachmentError::Validation(ValidationError::NonPositiveZoom(-1.0)).i18n_key(),
            AttachmentError::DuplicateId(AttachmentId::new("a")).i18n_key(),
        ];
        assert_ne!(keys[0], keys[1]);
        assert_ne!(keys[1], keys[2]);
        assert_ne!(keys[0], keys[2]);
    }
}
