use littlelemon::profiles::{ProfileRecord, ProfileStateController};
use littlelemon::storage::{KeyValueStore, IMAGE_URI_KEY, PROFILE_KEY};

use crate::support::{QueuedPicker, RecordingAuth};
use crate::IntegrationHarness;

#[test]
fn saved_profile_reloads_in_a_new_controller() {
    let harness = IntegrationHarness::new();

    let saved = {
        let mut ctrl = ProfileStateController::new(
            harness.open_store(),
            QueuedPicker::new().choose("file:///photos/ana.jpg"),
            RecordingAuth::default(),
        );
        ctrl.load();
        ctrl.set_field("firstName", "Ana").unwrap();
        ctrl.set_field("lastName", "Silva").unwrap();
        ctrl.set_field("email", "ana@example.com").unwrap();
        ctrl.set_field("phoneNumber", "3125550199").unwrap();
        ctrl.set_field("passwordChanges", false).unwrap();
        ctrl.set_field("notificationNewsletter", false).unwrap();
        ctrl.pick_avatar();
        ctrl.save().unwrap();
        ctrl.current().clone()
    };

    let mut reopened = ProfileStateController::new(
        harness.open_store(),
        QueuedPicker::new(),
        RecordingAuth::default(),
    );
    let loaded = reopened.load().clone();
    assert_eq!(loaded, saved);
    assert_eq!(reopened.load(), &loaded);
    assert_eq!(loaded.phone_number, "(312) 555-0199");
    assert!(!loaded.password_changes && !loaded.newsletter);
    assert!(loaded.order_statuses && loaded.special_offers);
    assert_eq!(reopened.persisted_image_ref(), Some("file:///photos/ana.jpg"));
}

#[test]
fn stored_keys_keep_the_app_format() {
    let harness = IntegrationHarness::new();
    let mut ctrl = ProfileStateController::new(
        harness.open_store(),
        QueuedPicker::new().choose("content://media/42"),
        RecordingAuth::default(),
    );
    ctrl.set_field("firstName", "Ana").unwrap();
    ctrl.pick_avatar();
    ctrl.save().unwrap();

    let store = harness.open_store();
    let raw = store.get(PROFILE_KEY).unwrap().expect("profile key written");
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["firstName"], "Ana");
    assert_eq!(json["specialOffers"], true);
    assert!(json.get("avatarImageRef").is_none());
    assert_eq!(
        store.get(IMAGE_URI_KEY).unwrap().as_deref(),
        Some("content://media/42")
    );
}

#[test]
fn removed_avatar_is_gone_after_relaunch() {
    let harness = IntegrationHarness::new();
    {
        let mut ctrl = ProfileStateController::new(
            harness.open_store(),
            QueuedPicker::new().choose("file:///a.jpg"),
            RecordingAuth::default(),
        );
        ctrl.pick_avatar();
        ctrl.save().unwrap();
    }
    {
        let mut ctrl = ProfileStateController::new(
            harness.open_store(),
            QueuedPicker::new(),
            RecordingAuth::default(),
        );
        assert_eq!(ctrl.load().avatar_image_ref.as_deref(), Some("file:///a.jpg"));
        ctrl.remove_avatar();
        ctrl.save().unwrap();
    }

    let mut ctrl = ProfileStateController::new(
        harness.open_store(),
        QueuedPicker::new(),
        RecordingAuth::default(),
    );
    assert_eq!(ctrl.load().avatar_image_ref, None);
}

#[test]
fn fresh_workspace_loads_defaults() {
    let harness = IntegrationHarness::new();
    let mut ctrl = ProfileStateController::new(
        harness.open_store(),
        QueuedPicker::new(),
        RecordingAuth::default(),
    );
    assert_eq!(ctrl.load(), &ProfileRecord::default());
    assert!(!harness.store_path().exists());
}
