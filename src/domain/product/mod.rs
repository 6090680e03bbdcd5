// SPDX-License-Identifier: MPL-2.0
//! Product association domain.
//!
//! - [`ProductAssociation`]: product-to-shot link and its size transition
//! - [`resolve`]: pure decision table producing a [`ProductTileState`]

mod association;
pub mod resolver;

pub use association::{
    AssociationStatus, ProductAssociation, ProductId, SizeScope, SizeSelection,
};
pub use resolver::{resolve, ActionKind, ProductTileState, SizeLabel};
