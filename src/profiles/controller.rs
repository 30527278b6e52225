//! Edit/save/discard lifecycle behind the Profile screen.
//!
//! The controller holds one in-memory [`ProfileRecord`] and talks to three
//! collaborators handed to it at construction: a key-value store, the device
//! media picker and the auth session. Every mutating call notifies the
//! registered listeners so a renderer can redraw without knowing the
//! controller's internals.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::session::AuthSession;
use crate::storage::{KeyValueStore, StorageError, IMAGE_URI_KEY, PROFILE_KEY};

use super::avatar::{AvatarChange, CancelledError, MediaPicker, PickerOptions};
use super::events::{ProfileEvent, Subscribers, SubscriptionId, SAVE_CONFIRMATION};
use super::model::{FieldValue, InvalidFieldError, ProfileField, ProfileRecord};

/// Confirmation returned by a successful save.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveReceipt {
    pub message: String,
    pub saved_at: DateTime<Utc>,
}

pub struct ProfileStateController<S, P, A> {
    store: S,
    picker: P,
    auth: A,
    picker_options: PickerOptions,
    current: ProfileRecord,
    persisted_image_ref: Option<String>,
    subscribers: Subscribers,
}

impl<S, P, A> ProfileStateController<S, P, A>
where
    S: KeyValueStore,
    P: MediaPicker,
    A: AuthSession,
{
    /// Starts from the default record. Call [`Self::load`] to pick up
    /// persisted data.
    pub fn new(store: S, picker: P, auth: A) -> Self {
        Self {
            store,
            picker,
            auth,
            picker_options: PickerOptions::square_avatar(),
            current: ProfileRecord::default(),
            persisted_image_ref: None,
            subscribers: Subscribers::new(),
        }
    }

    pub fn with_picker_options(mut self, options: PickerOptions) -> Self {
        self.picker_options = options;
        self
    }

    pub fn current(&self) -> &ProfileRecord {
        &self.current
    }

    pub fn persisted_image_ref(&self) -> Option<&str> {
        self.persisted_image_ref.as_deref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replaces the in-memory record with the persisted one, or with defaults
    /// when nothing readable is stored.
    pub fn load(&mut self) -> &ProfileRecord {
        self.reload();
        self.emit(ProfileEvent::Loaded);
        &self.current
    }

    /// Updates one field by its key. Unknown keys and mismatched values leave
    /// the record untouched.
    pub fn set_field(
        &mut self,
        key: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), InvalidFieldError> {
        let field: ProfileField = key.parse()?;
        self.update(field, value)
    }

    pub fn update(
        &mut self,
        field: ProfileField,
        value: impl Into<FieldValue>,
    ) -> Result<(), InvalidFieldError> {
        self.current.apply(field, value.into())?;
        self.emit(ProfileEvent::FieldChanged { field });
        Ok(())
    }

    /// Asks the picker for a square, user-cropped image. Closing the picker is
    /// a normal outcome and leaves the current avatar alone.
    pub fn pick_avatar(&mut self) -> AvatarChange {
        match self.picker.pick_image(&self.picker_options) {
            Ok(Some(uri)) if !uri.is_empty() => {
                debug!(uri = %uri, "avatar picked");
                self.current.avatar_image_ref = Some(uri.clone());
                self.emit(ProfileEvent::AvatarChanged);
                AvatarChange::Replaced(uri)
            }
            Ok(_) => {
                debug!("picker returned no asset");
                AvatarChange::Unchanged
            }
            Err(CancelledError) => {
                debug!("avatar pick cancelled");
                AvatarChange::Unchanged
            }
        }
    }

    /// Clears the avatar in memory; storage is untouched until [`Self::save`].
    pub fn remove_avatar(&mut self) {
        self.current.avatar_image_ref = None;
        self.emit(ProfileEvent::AvatarRemoved);
    }

    /// Writes the record and the avatar key. A failure on the avatar key after
    /// the record was written still fails the save; the record write is not
    /// rolled back.
    pub fn save(&mut self) -> Result<SaveReceipt, StorageError> {
        match self.write_persisted() {
            Ok(()) => {
                self.persisted_image_ref = self.current.avatar_image_ref.clone();
                info!(
                    has_avatar = self.persisted_image_ref.is_some(),
                    "profile saved"
                );
                let receipt = SaveReceipt {
                    message: SAVE_CONFIRMATION.to_string(),
                    saved_at: Utc::now(),
                };
                self.emit(ProfileEvent::Saved {
                    message: receipt.message.clone(),
                });
                Ok(receipt)
            }
            Err(err) => {
                warn!(error = %err, "profile save failed");
                self.emit(ProfileEvent::SaveFailed {
                    message: format!("Changes could not be saved: {err}"),
                });
                Err(err)
            }
        }
    }

    /// Drops every in-memory edit by reloading from storage.
    pub fn discard(&mut self) {
        self.reload();
        self.emit(ProfileEvent::Discarded);
    }

    /// Ends the auth session. The persisted profile is kept.
    pub fn logout(&mut self) {
        info!("logging out from profile screen");
        self.auth.logout();
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ProfileEvent, &ProfileRecord) + 'static,
    {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn reload(&mut self) {
        let record = self.read_record();
        let image = self.read_image_ref();
        debug!(has_avatar = image.is_some(), "profile loaded");
        self.current = record;
        self.current.avatar_image_ref = image.clone();
        self.persisted_image_ref = image;
    }

    // Unreadable and missing both mean "use defaults".
    fn read_record(&self) -> ProfileRecord {
        match self.store.get(PROFILE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(record) => record,
                Err(err) => {
                    warn!(error = %err, "stored profile is not valid JSON; using defaults");
                    ProfileRecord::default()
                }
            },
            Ok(None) => ProfileRecord::default(),
            Err(err) => {
                warn!(error = %err, "profile read failed; using defaults");
                ProfileRecord::default()
            }
        }
    }

    fn read_image_ref(&self) -> Option<String> {
        match self.store.get(IMAGE_URI_KEY) {
            Ok(uri) => uri.filter(|uri| !uri.is_empty()),
            Err(err) => {
                warn!(error = %err, "avatar reference read failed");
                None
            }
        }
    }

    fn write_persisted(&mut self) -> Result<(), StorageError> {
        let payload = serde_json::to_string(&self.current)?;
        self.store.set(PROFILE_KEY, &payload)?;
        match &self.current.avatar_image_ref {
            Some(uri) => self.store.set(IMAGE_URI_KEY, uri),
            None => self.store.remove(IMAGE_URI_KEY),
        }
    }

    fn emit(&mut self, event: ProfileEvent) {
        self.subscribers.notify(&event, &self.current);
    }
}

impl<S, P, A> std::fmt::Debug for ProfileStateController<S, P, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileStateController")
            .field("current", &self.current)
            .field("persisted_image_ref", &self.persisted_image_ref)
            .field("subscribers", &self.subscribers)
            .finish_non_exhaustive()
    }
}
