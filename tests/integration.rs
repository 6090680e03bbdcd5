// SPDX-License-Identifier: MPL-2.0
use shotlist::application::port::ImageStatus;
use shotlist::config::{self, Config};
use shotlist::domain::attachment::{Attachment, AttachmentCollection, AttachmentId, CropData};
use shotlist::domain::editing::compute_transform;
use shotlist::domain::error::AttachmentError;
use shotlist::domain::product::{
    resolve, ActionKind, AssociationStatus, ProductAssociation, ProductId, SizeLabel, SizeScope,
    SizeSelection,
};
use shotlist::i18n::fluent::I18n;
use shotlist::ui::shot_panel::{Effect, Message, State};
use tempfile::tempdir;

fn shot(ids: &[&str]) -> AttachmentCollection {
    ids.iter().fold(AttachmentCollection::new(), |collection, id| {
        collection
            .add(Attachment::new(*id, format!("{id}.jpg")))
            .expect("unique ids")
    })
}

fn ids(collection: &AttachmentCollection) -> Vec<&str> {
    collection.iter().map(|a| a.id.as_str()).collect()
}

fn assert_consistent(collection: &AttachmentCollection) {
    assert!(collection.is_consistent());
    let orders: Vec<u32> = collection.iter().map(|a| a.order).collect();
    let expected: Vec<u32> = (0..collection.len() as u32).collect();
    assert_eq!(orders, expected);
    if !collection.is_empty() {
        assert_eq!(collection.iter().filter(|a| a.is_primary).count(), 1);
    }
}

#[test]
fn first_added_attachment_becomes_primary() {
    let collection = shot(&["1", "2", "3"]);

    assert_eq!(ids(&collection), vec!["1", "2", "3"]);
    assert_eq!(collection.primary().map(|a| a.id.as_str()), Some("1"));
    assert_consistent(&collection);
}

#[test]
fn reorder_to_front_and_clamped_past_end() {
    let collection = shot(&["1", "2", "3"]);

    let front = collection.reorder(&AttachmentId::new("3"), 0).unwrap();
    assert_eq!(ids(&front), vec!["3", "1", "2"]);
    assert_consistent(&front);
    // Order does not move the primary flag.
    assert_eq!(front.primary().map(|a| a.id.as_str()), Some("1"));

    let clamped = collection.reorder(&AttachmentId::new("1"), 99).unwrap();
    assert_eq!(ids(&clamped), vec!["2", "3", "1"]);

    let negative = collection.reorder(&AttachmentId::new("3"), -4).unwrap();
    assert_eq!(ids(&negative), vec!["3", "1", "2"]);
}

#[test]
fn removing_primary_promotes_first_remaining() {
    let collection = shot(&["1", "2", "3"])
        .set_primary(&AttachmentId::new("2"))
        .unwrap();

    let after = collection.remove(&AttachmentId::new("2")).unwrap();

    assert_eq!(ids(&after), vec!["1", "3"]);
    assert_eq!(after.primary().map(|a| a.id.as_str()), Some("1"));
    assert_consistent(&after);

    let emptied = shot(&["only"]).remove(&AttachmentId::new("only")).unwrap();
    assert!(emptied.is_empty());
    assert!(emptied.primary().is_none());
}

#[test]
fn mutations_leave_the_source_collection_untouched() {
    let collection = shot(&["1", "2"]);
    let before = collection.clone();

    let _ = collection.remove(&AttachmentId::new("1")).unwrap();
    let _ = collection.reorder(&AttachmentId::new("2"), 0).unwrap();
    let _ = collection.set_primary(&AttachmentId::new("2")).unwrap();

    assert_eq!(collection, before);
}

#[test]
fn unknown_ids_and_bad_crops_are_errors() {
    let collection = shot(&["1"]);
    let missing = AttachmentId::new("nope");

    assert!(matches!(
        collection.remove(&missing),
        Err(AttachmentError::NotFound(_))
    ));
    assert!(matches!(
        collection.set_primary(&missing),
        Err(AttachmentError::NotFound(_))
    ));
    assert!(matches!(
        collection.set_crop(&AttachmentId::new("1"), Some(CropData::new(0.0, 0.0, 0.0, 0.0))),
        Err(AttachmentError::Validation(_))
    ));
    assert!(matches!(
        collection.add(Attachment::new("1", "again.jpg")),
        Err(AttachmentError::DuplicateId(_))
    ));
}

#[test]
fn crop_flows_into_preview_transform() {
    let collection = shot(&["1"])
        .set_crop(&AttachmentId::new("1"), Some(CropData::new(10.0, -5.0, 1.5, 90.0)))
        .unwrap();
    let crop = collection.get(&AttachmentId::new("1")).and_then(|a| a.crop);

    let transform = compute_transform(crop.as_ref());
    assert_eq!(transform.css(), "translate(-10%, 5%) scale(1.5) rotate(90deg)");

    let cleared = collection.set_crop(&AttachmentId::new("1"), None).unwrap();
    let identity = compute_transform(cleared.get(&AttachmentId::new("1")).and_then(|a| a.crop.as_ref()));
    assert!(identity.is_identity());
    assert_eq!(identity.css(), "translate(0%, 0%) scale(1) rotate(0deg)");
}

#[test]
fn product_resolver_decision_table() {
    let base = ProductAssociation::new("p", "Trench", "Stone");

    let pending = resolve(&base);
    assert_eq!(pending.display_status, AssociationStatus::PendingSize);
    assert_eq!(pending.size_label, SizeLabel::Pending);
    assert_eq!(pending.primary_action_kind, ActionKind::ResolveSize);

    let all = resolve(&ProductAssociation {
        size_scope: Some(SizeScope::All),
        ..base.clone()
    });
    assert_eq!(all.display_status, AssociationStatus::Resolved);
    assert_eq!(all.size_label, SizeLabel::AllSizes);
    assert_eq!(all.primary_action_kind, ActionKind::Edit);

    let sized = resolve(&ProductAssociation {
        size_scope: Some(SizeScope::Specific),
        size: Some("M".into()),
        ..base
    });
    assert_eq!(sized.size_label, SizeLabel::Size("M".into()));
    assert_eq!(sized.primary_action_kind, ActionKind::Edit);
}

#[test]
fn panel_serializes_mutations_behind_commits() {
    let mut panel = State::new(shot(&["1", "2", "3"]), Vec::new());

    let first = panel.handle(Message::Moved { from: 2, to: 0 });
    let revision = first
        .into_vec()
        .into_iter()
        .find_map(|effect| match effect {
            Effect::Commit { revision, attachments } => {
                assert_eq!(ids(&attachments), vec!["3", "1", "2"]);
                Some(revision)
            }
            _ => None,
        })
        .expect("first mutation commits");

    // A second intent while the first is in flight waits its turn.
    let queued = panel.handle(Message::SetPrimary(AttachmentId::new("3")));
    assert!(queued.is_none());
    assert_eq!(panel.pending_count(), 1);
    assert_eq!(ids(panel.committed()), vec!["1", "2", "3"]);

    let drained = panel.handle(Message::Committed(revision));
    assert!(drained
        .into_vec()
        .iter()
        .any(|effect| matches!(effect, Effect::Commit { .. })));
    assert_eq!(ids(panel.committed()), vec!["3", "1", "2"]);
    assert_eq!(panel.attachments().primary().map(|a| a.id.as_str()), Some("3"));
}

#[test]
fn rejected_commit_restores_last_committed_collection() {
    let mut panel = State::new(shot(&["1", "2"]), Vec::new());

    let _ = panel.handle(Message::Delete(AttachmentId::new("1")));
    let revision = panel.in_flight().expect("delete commits");
    let _ = panel.handle(Message::SetPrimary(AttachmentId::new("2")));

    let effect = panel.handle(Message::CommitRejected(revision));

    assert_eq!(ids(panel.attachments()), vec!["1", "2"]);
    assert_eq!(panel.pending_count(), 0);
    assert!(!panel.is_committing());
    assert!(effect
        .into_vec()
        .iter()
        .any(|effect| matches!(effect, Effect::Notify(n) if n.message_key() == "notification-commit-rejected")));
}

#[test]
fn resolved_images_are_tracked_per_attachment() {
    let mut panel = State::new(shot(&["1", "2"]), Vec::new());
    let id = AttachmentId::new("1");

    assert_eq!(panel.image_status(&id), &ImageStatus::Loading);
    let _ = panel.handle(Message::ImageResolved(id.clone(), ImageStatus::Unavailable));
    assert_eq!(panel.image_status(&id), &ImageStatus::Unavailable);
}

#[test]
fn choosing_a_size_resolves_the_product() {
    let product = ProductAssociation {
        available_sizes: vec!["S".into(), "M".into()],
        ..ProductAssociation::new("p1", "Knit", "Ecru")
    };
    let mut panel = State::new(AttachmentCollection::new(), vec![product]);

    let _ = panel.handle(Message::ResolveSize(ProductId::new("p1")));
    let effect = panel.handle(Message::SizeChosen(
        ProductId::new("p1"),
        SizeSelection::Specific("S".into()),
    ));

    let updated = effect
        .into_vec()
        .into_iter()
        .find_map(|effect| match effect {
            Effect::ProductUpdated(product) => Some(product),
            _ => None,
        })
        .expect("product update effect");
    assert_eq!(updated.status(), AssociationStatus::Resolved);
    assert_eq!(updated.effective_size(), Some("S"));
    assert_eq!(
        panel.product(&ProductId::new("p1")).and_then(|p| p.effective_size()),
        Some("S")
    );
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.general.language = Some("en-US".to_string());
    config::save_to_path(&settings, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("product-action-edit"), "Edit");

    settings.general.language = Some("fr".to_string());
    config::save_to_path(&settings, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("product-action-edit"), "Modifier");
}

#[test]
fn cli_language_overrides_config() {
    let mut settings = Config::default();
    settings.general.language = Some("en-US".to_string());

    let i18n = I18n::new(Some("fr".to_string()), &settings);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}
