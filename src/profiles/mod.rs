//! Profile screen state: the editable record, its phone mask, avatar picking,
//! change notifications and the controller tying them to storage.

pub mod avatar;
pub mod controller;
pub mod events;
pub mod model;
pub mod phone;

pub use avatar::{AvatarChange, CancelledError, MediaPicker, PickerOptions};
pub use controller::{ProfileStateController, SaveReceipt};
pub use events::{ProfileEvent, Subscribers, SubscriptionId, SAVE_CONFIRMATION};
pub use model::{FieldValue, InvalidFieldError, ProfileField, ProfileRecord, ValueKind};
pub use phone::{apply_phone_mask, is_complete_phone_number, PHONE_MASK};
