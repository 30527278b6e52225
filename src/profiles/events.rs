//! Change notifications for whatever renders the profile form.

use serde::Serialize;

use super::model::{ProfileField, ProfileRecord};

/// Text shown to the user after a successful save.
pub const SAVE_CONFIRMATION: &str = "Changes saved!";

/// Emitted after every operation that can change what the form shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfileEvent {
    Loaded,
    FieldChanged {
        #[serde(serialize_with = "serialize_field")]
        field: ProfileField,
    },
    AvatarChanged,
    AvatarRemoved,
    Saved { message: String },
    SaveFailed { message: String },
    Discarded,
}

fn serialize_field<S: serde::Serializer>(field: &ProfileField, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(field.key())
}

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ProfileEvent, &ProfileRecord)>;

/// Ordered listener registry.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ProfileEvent, &ProfileRecord) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Calls every listener in subscription order.
    pub fn notify(&mut self, event: &ProfileEvent, record: &ProfileRecord) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event, record);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
