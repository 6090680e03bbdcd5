// SPDX-License-Identifier: MPL-2.0
//! Product tile state derivation.
//!
//! The whole business rule is one decision table:
//!
//! | size scope  | status        | size label                     | action                |
//! |-------------|---------------|--------------------------------|-----------------------|
//! | unresolved  | `pending-size`| "Pending"                      | "Choose size" (resolve)|
//! | all         | `resolved`    | "All sizes"                    | "Edit" (edit)         |
//! | specific    | `resolved`    | size, or "All sizes" if empty  | "Edit" (edit)         |

use super::association::{AssociationStatus, ProductAssociation, SizeScope};
use std::fmt;

/// Label shown in the size slot of a product tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeLabel {
    Pending,
    AllSizes,
    Size(String),
}

impl SizeLabel {
    /// Returns the i18n key, or `None` for a literal size value.
    #[must_use]
    pub fn i18n_key(&self) -> Option<&'static str> {
        match self {
            SizeLabel::Pending => Some("product-size-pending"),
            SizeLabel::AllSizes => Some("product-size-all"),
            SizeLabel::Size(_) => None,
        }
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeLabel::Pending => f.write_str("Pending"),
            SizeLabel::AllSizes => f.write_str("All sizes"),
            SizeLabel::Size(size) => f.write_str(size),
        }
    }
}

/// Action offered by a product tile's primary button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    ResolveSize,
    Edit,
}

impl ActionKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::ResolveSize => "Choose size",
            ActionKind::Edit => "Edit",
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ActionKind::ResolveSize => "product-action-choose-size",
            ActionKind::Edit => "product-action-edit",
        }
    }
}

/// Display state of a product tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductTileState {
    pub display_status: AssociationStatus,
    pub size_label: SizeLabel,
    pub primary_action_label: &'static str,
    pub primary_action_kind: ActionKind,
}

impl ProductTileState {
    /// Returns the i18n key describing the status badge.
    #[must_use]
    pub fn status_i18n_key(&self) -> &'static str {
        match self.display_status {
            AssociationStatus::PendingSize => "product-status-pending-size",
            AssociationStatus::Resolved => "product-status-resolved",
        }
    }
}

/// Derives the tile state for an association. Total and side-effect free.
#[must_use]
pub fn resolve(association: &ProductAssociation) -> ProductTileState {
    let (size_label, kind) = match association.size_scope {
        None => (SizeLabel::Pending, ActionKind::ResolveSize),
        Some(SizeScope::All) => (SizeLabel::AllSizes, ActionKind::Edit),
        Some(SizeScope::Specific) => {
            let label = association
                .effective_size()
                .map_or(SizeLabel::AllSizes, |size| SizeLabel::Size(size.to_string()));
            (label, ActionKind::Edit)
        }
    };

    ProductTileState {
        display_status: association.status(),
        size_label,
        primary_action_label: kind.label(),
        primary_action_kind: kind,
    }
}
