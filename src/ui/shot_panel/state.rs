// SPDX-License-Identifier: MPL-2.0
//! Panel state and message handling.
//!
//! Two snapshots of the collection are kept: `committed` is the last revision
//! the host acknowledged, `working` is what the panel shows. They differ only
//! while a commit is in flight. Intents arriving during that window wait in a
//! FIFO queue and are replayed one at a time after the acknowledgement, each
//! against the then-current working copy.

use super::crop_editor::CropDraft;
use super::messages::{Effect, Message, Revision};
use crate::application::port::ImageStatus;
use crate::domain::attachment::{Attachment, AttachmentCollection, AttachmentId, CropData};
use crate::domain::error::AttachmentError;
use crate::domain::product::{ProductAssociation, ProductId, SizeSelection};
use crate::ui::notifications::Notification;
use std::collections::{HashMap, VecDeque};

/// Collection mutation requested by the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Delete(AttachmentId),
    SetPrimary(AttachmentId),
    EditCrop(AttachmentId, Option<CropData>),
    Moved { from: usize, to: isize },
    Add(Attachment),
}

impl Intent {
    fn apply(&self, collection: &AttachmentCollection) -> Result<AttachmentCollection, AttachmentError> {
        match self {
            Intent::Delete(id) => collection.remove(id),
            Intent::SetPrimary(id) => collection.set_primary(id),
            Intent::EditCrop(id, crop) => collection.set_crop(id, *crop),
            Intent::Moved { from, to } => Ok(collection.move_by_index(*from, *to)),
            Intent::Add(attachment) => collection.add(attachment.clone()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    committed: AttachmentCollection,
    working: AttachmentCollection,
    in_flight: Option<Revision>,
    last_revision: Revision,
    pending: VecDeque<Intent>,
    images: HashMap<AttachmentId, ImageStatus>,
    products: Vec<ProductAssociation>,
    product_images: HashMap<ProductId, ImageStatus>,
    crop_editor: Option<CropDraft>,
    size_picker: Option<ProductId>,
}

impl State {
    /// Creates a panel showing an already persisted collection.
    pub fn new(attachments: AttachmentCollection, products: Vec<ProductAssociation>) -> Self {
        Self {
            committed: attachments.clone(),
            working: attachments,
            products,
            ..Self::default()
        }
    }

    /// Requests resolution of every member and product tile image that has
    /// no status yet.
    #[must_use]
    pub fn image_requests(&self) -> Effect {
        let missing: Vec<_> = self
            .working
            .iter()
            .filter(|attachment| !self.images.contains_key(&attachment.id))
            .map(|attachment| (attachment.id.clone(), attachment.source.clone()))
            .collect();
        let attachments = if missing.is_empty() {
            Effect::None
        } else {
            Effect::ResolveImages(missing)
        };
        Effect::batch([attachments, self.product_image_requests()])
    }

    fn product_image_requests(&self) -> Effect {
        let missing: Vec<_> = self
            .products
            .iter()
            .filter(|product| !self.product_images.contains_key(&product.id))
            .filter_map(|product| Some((product.id.clone(), product.tile_image()?.clone())))
            .collect();
        if missing.is_empty() {
            Effect::None
        } else {
            Effect::ResolveProductImages(missing)
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // QUERIES
    // ═══════════════════════════════════════════════════════════════════════

    /// Collection as displayed, including the in-flight mutation.
    #[must_use]
    pub fn attachments(&self) -> &AttachmentCollection {
        &self.working
    }

    /// Last acknowledged collection.
    #[must_use]
    pub fn committed(&self) -> &AttachmentCollection {
        &self.committed
    }

    #[must_use]
    pub fn products(&self) -> &[ProductAssociation] {
        &self.products
    }

    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&ProductAssociation> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// Image status of a member; unresolved sources are `Loading`.
    #[must_use]
    pub fn image_status(&self, id: &AttachmentId) -> &ImageStatus {
        self.images.get(id).unwrap_or(&LOADING)
    }

    /// Tile image status of a product, `None` when it has no image to show.
    #[must_use]
    pub fn product_image_status(&self, id: &ProductId) -> Option<&ImageStatus> {
        self.product(id)?
            .tile_image()
            .map(|_| self.product_images.get(id).unwrap_or(&LOADING))
    }

    #[must_use]
    pub fn in_flight(&self) -> Option<Revision> {
        self.in_flight
    }

    #[must_use]
    pub fn is_committing(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn crop_editor(&self) -> Option<&CropDraft> {
        self.crop_editor.as_ref()
    }

    /// Product whose size picker is open.
    #[must_use]
    pub fn size_picker(&self) -> Option<&ProductAssociation> {
        self.size_picker.as_ref().and_then(|id| self.product(id))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // MESSAGE HANDLING
    // ═══════════════════════════════════════════════════════════════════════

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Delete(id) => self.submit(Intent::Delete(id)),
            Message::SetPrimary(id) => self.submit(Intent::SetPrimary(id)),
            Message::EditCrop(id, crop) => self.submit(Intent::EditCrop(id, crop)),
            Message::Moved { from, to } => self.submit(Intent::Moved { from, to }),
            Message::AttachmentAdded(attachment) => self.submit(Intent::Add(attachment)),

            Message::OpenCropEditor(id) => match self.working.get(&id) {
                Some(attachment) => {
                    self.crop_editor = Some(CropDraft::new(id, attachment.effective_crop()));
                    Effect::None
                }
                None => notify_error(&AttachmentError::NotFound(id)),
            },
            Message::CropDraftChanged(field, value) => {
                if let Some(editor) = &mut self.crop_editor {
                    editor.set(field, value);
                }
                Effect::None
            }
            Message::ResetCropDraft => {
                if let Some(editor) = &mut self.crop_editor {
                    editor.reset();
                }
                Effect::None
            }
            Message::CancelCropEditor => {
                self.crop_editor = None;
                Effect::None
            }
            Message::ApplyCropEditor => match self.crop_editor.take() {
                Some(editor) => {
                    let target = editor.target().clone();
                    self.submit(Intent::EditCrop(target, editor.result()))
                }
                None => Effect::None,
            },

            Message::ImageResolved(id, status) => {
                // Late answers for removed members are dropped
                if self.working.contains(&id) {
                    self.images.insert(id, status);
                }
                Effect::None
            }
            Message::ProductImageResolved(id, status) => {
                if self.product(&id).is_some() {
                    tracing::debug!(product = %id, ready = status.is_ready(), "product image resolved");
                    self.product_images.insert(id, status);
                }
                Effect::None
            }
            Message::Committed(revision) => self.on_committed(revision),
            Message::CommitRejected(revision) => self.on_rejected(revision),

            Message::ResolveSize(id) => {
                if self.product(&id).is_some() {
                    self.size_picker = Some(id);
                }
                Effect::None
            }
            Message::EditProduct(id) => Effect::EditProduct(id),
            Message::SizeChosen(id, selection) => self.choose_size(&id, selection),
            Message::CloseSizePicker => {
                self.size_picker = None;
                Effect::None
            }
        }
    }

    fn submit(&mut self, intent: Intent) -> Effect {
        if self.in_flight.is_some() {
            tracing::debug!(?intent, queued = self.pending.len() + 1, "commit in flight, intent queued");
            self.pending.push_back(intent);
            return Effect::None;
        }
        self.apply(intent)
    }

    /// Applies an intent to the working copy and starts its commit.
    fn apply(&mut self, intent: Intent) -> Effect {
        let next = match intent.apply(&self.working) {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(?intent, error = %err, "attachment intent rejected");
                return notify_error(&err);
            }
        };
        if next == self.working {
            return Effect::None;
        }

        let previous = std::mem::replace(&mut self.working, next);
        self.images.retain(|id, _| self.working.contains(id));
        let added: Vec<_> = self
            .working
            .iter()
            .filter(|attachment| !previous.contains(&attachment.id))
            .map(|attachment| (attachment.id.clone(), attachment.source.clone()))
            .collect();
        if let Some(editor) = &self.crop_editor {
            if !self.working.contains(editor.target()) {
                self.crop_editor = None;
            }
        }

        self.last_revision += 1;
        let revision = self.last_revision;
        self.in_flight = Some(revision);
        tracing::info!(revision, members = self.working.len(), before = previous.len(), "committing attachments");

        let commit = Effect::Commit {
            revision,
            attachments: self.working.clone(),
        };
        if added.is_empty() {
            commit
        } else {
            Effect::Batch(vec![commit, Effect::ResolveImages(added)])
        }
    }

    fn on_committed(&mut self, revision: Revision) -> Effect {
        if self.in_flight != Some(revision) {
            tracing::warn!(revision, in_flight = ?self.in_flight, "ignoring stale commit acknowledgement");
            return Effect::None;
        }
        self.in_flight = None;
        self.committed = self.working.clone();
        tracing::debug!(revision, pending = self.pending.len(), "commit acknowledged");

        let mut effects = Vec::new();
        while self.in_flight.is_none() {
            let Some(intent) = self.pending.pop_front() else {
                break;
            };
            effects.push(self.apply(intent));
        }
        Effect::batch(effects)
    }

    fn on_rejected(&mut self, revision: Revision) -> Effect {
        if self.in_flight != Some(revision) {
            tracing::warn!(revision, in_flight = ?self.in_flight, "ignoring stale commit rejection");
            return Effect::None;
        }
        let dropped = self.pending.len();
        tracing::warn!(revision, dropped, "commit rejected, restoring last committed attachments");

        self.in_flight = None;
        self.pending.clear();
        self.working = self.committed.clone();
        if let Some(editor) = &self.crop_editor {
            if !self.working.contains(editor.target()) {
                self.crop_editor = None;
            }
        }

        Effect::batch([
            Effect::Notify(Notification::error("notification-commit-rejected")),
            self.image_requests(),
        ])
    }

    fn choose_size(&mut self, id: &ProductId, selection: SizeSelection) -> Effect {
        let Some(index) = self.products.iter().position(|product| &product.id == id) else {
            tracing::warn!(product = %id, "size chosen for unknown product");
            return Effect::None;
        };
        match self.products[index].choose_size(selection) {
            Ok(updated) => {
                tracing::info!(product = %id, scope = ?updated.size_scope, size = ?updated.size, "product size resolved");
                self.products[index] = updated.clone();
                self.size_picker = None;
                let name = updated.family_name.clone();
                Effect::batch([
                    Effect::ProductUpdated(updated),
                    Effect::Notify(Notification::success("notification-product-updated").with_arg("product", name)),
                ])
            }
            Err(err) => {
                tracing::warn!(product = %id, error = %err, "size choice rejected");
                Effect::Notify(Notification::from(&err))
            }
        }
    }
}

static LOADING: ImageStatus = ImageStatus::Loading;

fn notify_error(err: &AttachmentError) -> Effect {
    Effect::Notify(Notification::from(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::attachment::ImageSource;
    use crate::domain::product::{AssociationStatus, SizeScope};
    use crate::ui::notifications::Severity;
    use crate::ui::shot_panel::messages::CropField;

    fn id(raw: &str) -> AttachmentId {
        AttachmentId::new(raw)
    }

    fn panel(ids: &[&str]) -> State {
        let records = ids
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                Attachment::new(*raw, format!("shots/{raw}.jpg"))
                    .with_order(u32::try_from(i).unwrap())
                    .with_primary(i == 0)
            })
            .collect();
        let collection = AttachmentCollection::from_records(records).unwrap();
        State::new(collection, vec![shirt()])
    }

    fn shirt() -> ProductAssociation {
        ProductAssociation {
            available_sizes: vec!["S".into(), "M".into()],
            ..ProductAssociation::new("p1", "Oxford Shirt", "Navy")
        }
    }

    fn ids_of(collection: &AttachmentCollection) -> Vec<String> {
        collection.iter().map(|a| a.id.to_string()).collect()
    }

    fn commit_revision(effect: &Effect) -> Option<Revision> {
        effect.clone().into_vec().into_iter().find_map(|e| match e {
            Effect::Commit { revision, .. } => Some(revision),
            _ => None,
        })
    }

    fn notification_key(effect: &Effect) -> Option<String> {
        effect.clone().into_vec().into_iter().find_map(|e| match e {
            Effect::Notify(n) => Some(n.message_key().to_string()),
            _ => None,
        })
    }

    #[test]
    fn new_panel_requests_all_images_and_reports_loading() {
        let state = panel(&["1", "2"]);
        match state.image_requests() {
            Effect::ResolveImages(requests) => {
                assert_eq!(requests.len(), 2);
                assert_eq!(requests[0], (id("1"), ImageSource::new("shots/1.jpg")));
            }
            other => panic!("expected ResolveImages, got {other:?}"),
        }
        assert_eq!(state.image_status(&id("1")), &ImageStatus::Loading);
    }

    #[test]
    fn product_tile_images_are_requested_and_tracked() {
        let with_image = ProductAssociation {
            images: vec![ImageSource::new("products/coat-front.jpg")],
            ..ProductAssociation::new("p2", "Wool Coat", "Camel")
        };
        let mut state = State::new(AttachmentCollection::new(), vec![shirt(), with_image]);
        let p2 = ProductId::new("p2");

        let requests = state.image_requests().into_vec();
        assert!(requests.iter().any(|e| matches!(
            e,
            Effect::ResolveProductImages(r) if r == &vec![(p2.clone(), ImageSource::new("products/coat-front.jpg"))]
        )));
        assert_eq!(state.product_image_status(&p2), Some(&ImageStatus::Loading));
        // No tile image, nothing to resolve
        assert_eq!(state.product_image_status(&ProductId::new("p1")), None);

        state.handle(Message::ProductImageResolved(p2.clone(), ImageStatus::Ready("/lib/coat.jpg".into())));
        assert_eq!(
            state.product_image_status(&p2),
            Some(&ImageStatus::Ready("/lib/coat.jpg".into()))
        );
        assert!(state.image_requests().is_none());

        state.handle(Message::ProductImageResolved(ProductId::new("ghost"), ImageStatus::Unavailable));
        assert_eq!(state.product_image_status(&ProductId::new("ghost")), None);
    }

    #[test]
    fn intent_applies_immediately_and_commits() {
        let mut state = panel(&["1", "2", "3"]);
        let effect = state.handle(Message::SetPrimary(id("3")));

        assert_eq!(commit_revision(&effect), Some(1));
        assert_eq!(state.attachments().primary().map(|a| a.id.as_str()), Some("3"));
        assert_eq!(state.committed().primary().map(|a| a.id.as_str()), Some("1"));
        assert!(state.is_committing());
    }

    #[test]
    fn intents_queue_while_commit_in_flight_and_replay_after_ack() {
        let mut state = panel(&["1", "2", "3"]);
        let first = state.handle(Message::Delete(id("2")));
        let revision = commit_revision(&first).unwrap();

        assert!(state.handle(Message::SetPrimary(id("3"))).is_none());
        assert!(state.handle(Message::Moved { from: 1, to: 0 }).is_none());
        assert_eq!(state.pending_count(), 2);
        assert_eq!(ids_of(state.attachments()), vec!["1", "3"]);

        let after_first_ack = state.handle(Message::Committed(revision));
        let second = commit_revision(&after_first_ack).unwrap();
        assert_eq!(second, revision + 1);
        assert_eq!(state.pending_count(), 1);
        assert_eq!(state.attachments().primary().map(|a| a.id.as_str()), Some("3"));

        let after_second_ack = state.handle(Message::Committed(second));
        assert!(commit_revision(&after_second_ack).is_some());
        assert_eq!(state.pending_count(), 0);
        assert_eq!(ids_of(state.attachments()), vec!["3", "1"]);
        assert!(state.attachments().is_consistent());
    }

    #[test]
    fn failing_queued_intent_is_reported_and_queue_keeps_draining() {
        let mut state = panel(&["1", "2"]);
        let revision = commit_revision(&state.handle(Message::Delete(id("2")))).unwrap();
        state.handle(Message::SetPrimary(id("2")));
        state.handle(Message::SetPrimary(id("1")));

        let effect = state.handle(Message::Committed(revision));

        assert_eq!(notification_key(&effect).as_deref(), Some("error-attachment-not-found"));
        // SetPrimary("1") is a no-op on ["1"], so nothing further is committed
        assert!(commit_revision(&effect).is_none());
        assert!(!state.is_committing());
        assert_eq!(state.pending_count(), 0);
    }

    #[test]
    fn rejection_restores_committed_state_and_drops_queue() {
        let mut state = panel(&["1", "2", "3"]);
        let revision = commit_revision(&state.handle(Message::Delete(id("1")))).unwrap();
        state.handle(Message::SetPrimary(id("3")));

        let effect = state.handle(Message::CommitRejected(revision));

        assert_eq!(ids_of(state.attachments()), vec!["1", "2", "3"]);
        assert_eq!(state.attachments(), state.committed());
        assert_eq!(state.pending_count(), 0);
        assert!(!state.is_committing());
        assert_eq!(notification_key(&effect).as_deref(), Some("notification-commit-rejected"));
        // The restored member lost its image status and is resolved again
        assert!(effect
            .into_vec()
            .iter()
            .any(|e| matches!(e, Effect::ResolveImages(r) if r.len() == 3)));
    }

    #[test]
    fn stale_acknowledgements_are_ignored() {
        let mut state = panel(&["1", "2"]);
        let revision = commit_revision(&state.handle(Message::Delete(id("2")))).unwrap();

        assert!(state.handle(Message::Committed(revision + 7)).is_none());
        assert!(state.handle(Message::CommitRejected(revision + 7)).is_none());
        assert_eq!(state.in_flight(), Some(revision));
    }

    #[test]
    fn domain_error_leaves_state_unchanged_and_notifies() {
        let mut state = panel(&["1", "2"]);
        let before = state.attachments().clone();

        let effect = state.handle(Message::EditCrop(id("1"), Some(CropData::new(0.0, 0.0, 0.0, 0.0))));

        assert_eq!(state.attachments(), &before);
        assert!(!state.is_committing());
        match effect {
            Effect::Notify(n) => {
                assert_eq!(n.severity(), Severity::Error);
                assert_eq!(n.message_key(), "error-attachment-invalid-zoom");
            }
            other => panic!("expected notification, got {other:?}"),
        }
    }

    #[test]
    fn no_op_reorder_does_not_commit() {
        let mut state = panel(&["1", "2"]);
        assert!(state.handle(Message::Moved { from: 0, to: -5 }).is_none());
        assert!(state.handle(Message::Moved { from: 9, to: 0 }).is_none());
        assert!(!state.is_committing());
    }

    #[test]
    fn added_attachment_is_resolved_and_deleted_one_forgets_status() {
        let mut state = panel(&["1"]);
        state.handle(Message::ImageResolved(id("1"), ImageStatus::Unavailable));

        let effect = state.handle(Message::AttachmentAdded(Attachment::new("2", "shots/2.jpg")));
        let revision = commit_revision(&effect).unwrap();
        assert!(effect
            .into_vec()
            .iter()
            .any(|e| matches!(e, Effect::ResolveImages(r) if r == &vec![(id("2"), ImageSource::new("shots/2.jpg"))])));
        state.handle(Message::Committed(revision));

        state.handle(Message::Delete(id("1")));
        assert_eq!(state.image_status(&id("1")), &ImageStatus::Loading);
        state.handle(Message::ImageResolved(id("1"), ImageStatus::Ready("x".into())));
        assert_eq!(state.image_status(&id("1")), &ImageStatus::Loading);
    }

    #[test]
    fn crop_editor_round_trip_commits_draft() {
        let mut state = panel(&["1"]);
        state.handle(Message::OpenCropEditor(id("1")));
        state.handle(Message::CropDraftChanged(CropField::Zoom, 2.0));
        state.handle(Message::CropDraftChanged(CropField::Rotation, 45.0));

        let effect = state.handle(Message::ApplyCropEditor);

        assert!(commit_revision(&effect).is_some());
        assert!(state.crop_editor().is_none());
        let crop = state.attachments().get(&id("1")).and_then(|a| a.crop);
        assert_eq!(crop, Some(CropData::new(0.0, 0.0, 2.0, 45.0)));
    }

    #[test]
    fn reset_and_apply_clears_crop() {
        let mut state = panel(&["1"]);
        let revision = commit_revision(
            &state.handle(Message::EditCrop(id("1"), Some(CropData::new(5.0, 0.0, 1.5, 0.0)))),
        )
        .unwrap();
        state.handle(Message::Committed(revision));

        state.handle(Message::OpenCropEditor(id("1")));
        assert_eq!(state.crop_editor().map(CropDraft::draft), Some(CropData::new(5.0, 0.0, 1.5, 0.0)));
        state.handle(Message::ResetCropDraft);
        state.handle(Message::ApplyCropEditor);

        assert_eq!(state.attachments().get(&id("1")).and_then(|a| a.crop), None);
    }

    #[test]
    fn cancel_discards_draft_and_unknown_target_notifies() {
        let mut state = panel(&["1"]);
        state.handle(Message::OpenCropEditor(id("1")));
        state.handle(Message::CropDraftChanged(CropField::PanX, 30.0));
        state.handle(Message::CancelCropEditor);
        assert!(state.crop_editor().is_none());
        assert!(!state.is_committing());

        let effect = state.handle(Message::OpenCropEditor(id("ghost")));
        assert_eq!(notification_key(&effect).as_deref(), Some("error-attachment-not-found"));
    }

    #[test]
    fn deleting_edited_attachment_closes_crop_editor() {
        let mut state = panel(&["1", "2"]);
        state.handle(Message::OpenCropEditor(id("2")));
        state.handle(Message::Delete(id("2")));
        assert!(state.crop_editor().is_none());
    }

    #[test]
    fn size_picker_resolves_product() {
        let mut state = panel(&[]);
        state.handle(Message::ResolveSize(ProductId::new("p1")));
        assert_eq!(state.size_picker().map(|p| p.id.as_str()), Some("p1"));

        let effect = state.handle(Message::SizeChosen(
            ProductId::new("p1"),
            SizeSelection::Specific("M".into()),
        ));

        assert!(state.size_picker().is_none());
        let product = state.product(&ProductId::new("p1")).unwrap();
        assert_eq!(product.status(), AssociationStatus::Resolved);
        assert_eq!(product.size_scope, Some(SizeScope::Specific));
        assert!(effect
            .into_vec()
            .iter()
            .any(|e| matches!(e, Effect::ProductUpdated(p) if p.size.as_deref() == Some("M"))));
    }

    #[test]
    fn unavailable_size_keeps_picker_open() {
        let mut state = panel(&[]);
        state.handle(Message::ResolveSize(ProductId::new("p1")));

        let effect = state.handle(Message::SizeChosen(
            ProductId::new("p1"),
            SizeSelection::Specific("XXL".into()),
        ));

        assert_eq!(notification_key(&effect).as_deref(), Some("error-product-unavailable-size"));
        assert!(state.size_picker().is_some());
        assert_eq!(state.product(&ProductId::new("p1")).unwrap().size_scope, None);
    }

    #[test]
    fn edit_product_is_forwarded_to_host() {
        let mut state = panel(&[]);
        let effect = state.handle(Message::EditProduct(ProductId::new("p1")));
        assert!(matches!(effect, Effect::EditProduct(p) if p.as_str() == "p1"));
        assert!(state.handle(Message::ResolveSize(ProductId::new("nope"))).is_none());
        assert!(state.size_picker().is_none());
    }
}
