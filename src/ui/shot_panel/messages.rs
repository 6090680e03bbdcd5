// SPDX-License-Identifier: MPL-2.0
//! Messages and effects of the shot attachment panel.

use crate::application::port::ImageStatus;
use crate::domain::attachment::{Attachment, AttachmentCollection, AttachmentId, CropData, ImageSource};
use crate::domain::product::{ProductAssociation, ProductId, SizeSelection};
use crate::ui::notifications::Notification;

/// Revision number of a collection snapshot handed to the commit sink.
pub type Revision = u64;

/// Crop editor slider being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropField {
    PanX,
    PanY,
    Zoom,
    Rotation,
}

#[derive(Debug, Clone)]
pub enum Message {
    // ═══════════════════════════════════════════════════════════════════════
    // ATTACHMENT INTENTS
    // ═══════════════════════════════════════════════════════════════════════
    Delete(AttachmentId),
    SetPrimary(AttachmentId),
    /// Replace the crop of an attachment; `None` clears it.
    EditCrop(AttachmentId, Option<CropData>),
    /// Terminal "moved from A to B" event of the drag collaborator.
    Moved { from: usize, to: isize },
    AttachmentAdded(Attachment),

    // ═══════════════════════════════════════════════════════════════════════
    // CROP EDITOR
    // ═══════════════════════════════════════════════════════════════════════
    OpenCropEditor(AttachmentId),
    CropDraftChanged(CropField, f32),
    ApplyCropEditor,
    CancelCropEditor,
    ResetCropDraft,

    // ═══════════════════════════════════════════════════════════════════════
    // ASYNC RESULTS
    // ═══════════════════════════════════════════════════════════════════════
    ImageResolved(AttachmentId, ImageStatus),
    ProductImageResolved(ProductId, ImageStatus),
    Committed(Revision),
    CommitRejected(Revision),

    // ═══════════════════════════════════════════════════════════════════════
    // PRODUCT INTENTS
    // ═══════════════════════════════════════════════════════════════════════
    ResolveSize(ProductId),
    EditProduct(ProductId),
    SizeChosen(ProductId, SizeSelection),
    CloseSizePicker,
}

/// Work the panel asks its host to perform.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Persist this snapshot and answer with `Committed` or `CommitRejected`.
    Commit {
        revision: Revision,
        attachments: AttachmentCollection,
    },
    /// Resolve these sources and answer with `ImageResolved` per entry.
    ResolveImages(Vec<(AttachmentId, ImageSource)>),
    /// Resolve product tile images; answered with `ProductImageResolved`.
    ResolveProductImages(Vec<(ProductId, ImageSource)>),
    ProductUpdated(ProductAssociation),
    /// Open the host's product editor.
    EditProduct(ProductId),
    Notify(Notification),
    Batch(Vec<Effect>),
}

impl Effect {
    /// Combines effects, dropping `None` and unwrapping single entries.
    #[must_use]
    pub fn batch(effects: impl IntoIterator<Item = Effect>) -> Effect {
        let mut effects: Vec<Effect> = effects
            .into_iter()
            .filter(|effect| !matches!(effect, Effect::None))
            .collect();
        match effects.len() {
            0 => Effect::None,
            1 => effects.pop().unwrap_or(Effect::None),
            _ => Effect::Batch(effects),
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }

    /// Flattens nested batches into a list of leaf effects.
    #[must_use]
    pub fn into_vec(self) -> Vec<Effect> {
        match self {
            Effect::None => Vec::new(),
            Effect::Batch(effects) => effects.into_iter().flat_map(Effect::into_vec).collect(),
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_drops_none_and_unwraps_single() {
        assert!(Effect::batch([Effect::None, Effect::None]).is_none());
        let single = Effect::batch([Effect::None, Effect::EditProduct(ProductId::new("p1"))]);
        assert!(matches!(single, Effect::EditProduct(_)));
    }

    #[test]
    fn into_vec_flattens_nested_batches() {
        let nested = Effect::Batch(vec![
            Effect::EditProduct(ProductId::new("a")),
            Effect::Batch(vec![Effect::None, Effect::EditProduct(ProductId::new("b"))]),
        ]);
        assert_eq!(nested.into_vec().len(), 2);
    }
}
