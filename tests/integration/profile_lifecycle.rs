use std::cell::RefCell;
use std::rc::Rc;

use littlelemon::profiles::{
    AvatarChange, InvalidFieldError, PickerOptions, ProfileEvent, ProfileStateController,
};
use littlelemon::storage::{MemoryStore, IMAGE_URI_KEY, PROFILE_KEY};

use crate::support::{QueuedPicker, RecordingAuth};
use crate::IntegrationHarness;

#[test]
fn discard_drops_edits_made_since_last_save() {
    let harness = IntegrationHarness::new();
    let mut ctrl = ProfileStateController::new(
        harness.open_store(),
        QueuedPicker::new().choose("file:///new.jpg"),
        RecordingAuth::default(),
    );
    ctrl.load();
    ctrl.set_field("firstName", "Ana").unwrap();
    ctrl.save().unwrap();

    ctrl.set_field("firstName", "Bob").unwrap();
    ctrl.set_field("orderStatuses", false).unwrap();
    assert_eq!(ctrl.pick_avatar(), AvatarChange::Replaced("file:///new.jpg".into()));
    ctrl.discard();

    let current = ctrl.current();
    assert_eq!(current.first_name, "Ana");
    assert!(current.order_statuses);
    assert_eq!(current.avatar_image_ref, None);
}

#[test]
fn cancelled_picker_leaves_avatar_and_asks_for_square_crop() {
    let mut store = MemoryStore::new().with_entry(IMAGE_URI_KEY, "file:///kept.jpg");
    let mut picker = QueuedPicker::new().cancel();
    {
        let mut ctrl = ProfileStateController::new(&mut store, &mut picker, RecordingAuth::default());
        ctrl.load();
        assert_eq!(ctrl.pick_avatar(), AvatarChange::Unchanged);
        assert_eq!(ctrl.current().avatar_image_ref.as_deref(), Some("file:///kept.jpg"));
    }
    assert_eq!(picker.requests, vec![PickerOptions::square_avatar()]);
}

#[test]
fn invalid_keys_do_not_reach_storage_or_listeners() {
    let mut store = MemoryStore::new();
    let events = Rc::new(RefCell::new(Vec::new()));
    {
        let mut ctrl =
            ProfileStateController::new(&mut store, QueuedPicker::new(), RecordingAuth::default());
        let sink = Rc::clone(&events);
        ctrl.subscribe(move |event, _| sink.borrow_mut().push(event.clone()));

        assert!(matches!(
            ctrl.set_field("favouriteDish", "Greek salad"),
            Err(InvalidFieldError::UnknownField(_))
        ));
        assert!(matches!(
            ctrl.set_field("email", true),
            Err(InvalidFieldError::WrongValueKind { .. })
        ));
    }
    assert!(events.borrow().is_empty());
    assert!(store.is_empty());
}

#[test]
fn failed_save_is_reported_distinctly() {
    let mut store = MemoryStore::new();
    store.fail_writes_for(PROFILE_KEY);
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut ctrl =
        ProfileStateController::new(&mut store, QueuedPicker::new(), RecordingAuth::default());
    let sink = Rc::clone(&events);
    ctrl.subscribe(move |event, _| sink.borrow_mut().push(event.clone()));

    ctrl.set_field("firstName", "Ana").unwrap();
    assert!(ctrl.save().is_err());

    let events = events.borrow();
    match events.last() {
        Some(ProfileEvent::SaveFailed { message }) => {
            assert!(message.starts_with("Changes could not be saved"))
        }
        other => panic!("expected SaveFailed, got {other:?}"),
    }
    assert!(!events
        .iter()
        .any(|event| matches!(event, ProfileEvent::Saved { .. })));
}

#[test]
fn logout_delegates_and_keeps_profile() {
    let harness = IntegrationHarness::new();
    let mut auth = RecordingAuth::default();
    {
        let mut ctrl =
            ProfileStateController::new(harness.open_store(), QueuedPicker::new(), &mut auth);
        ctrl.set_field("lastName", "Silva").unwrap();
        ctrl.save().unwrap();
        ctrl.logout();
    }
    assert_eq!(auth.logouts, 1);

    let mut ctrl =
        ProfileStateController::new(harness.open_store(), QueuedPicker::new(), RecordingAuth::default());
    assert_eq!(ctrl.load().last_name, "Silva");
}
