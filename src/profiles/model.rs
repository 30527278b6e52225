//! Profile record edited on the Profile screen.
//!
//! The JSON shape under the `profile` storage key keeps the camelCase keys the
//! app has always written. The avatar reference lives under its own key and is
//! never part of that JSON.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::phone::apply_phone_mask;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredProfile")]
pub struct ProfileRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub order_statuses: bool,
    pub password_changes: bool,
    pub special_offers: bool,
    pub newsletter: bool,
    /// Opaque URI owned by the device media library.
    #[serde(skip)]
    pub avatar_image_ref: Option<String>,
}

/// Shape read back from storage. Every key is optional and each toggle may
/// also appear under its `notification*` name; the plain key wins when both
/// are present.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StoredProfile {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    phone_number: Option<String>,
    order_statuses: Option<bool>,
    notification_order_statuses: Option<bool>,
    password_changes: Option<bool>,
    notification_password_changes: Option<bool>,
    special_offers: Option<bool>,
    notification_special_offers: Option<bool>,
    newsletter: Option<bool>,
    notification_newsletter: Option<bool>,
}

impl From<StoredProfile> for ProfileRecord {
    fn from(stored: StoredProfile) -> Self {
        let defaults = ProfileRecord::default();
        Self {
            first_name: stored.first_name.unwrap_or(defaults.first_name),
            last_name: stored.last_name.unwrap_or(defaults.last_name),
            email: stored.email.unwrap_or(defaults.email),
            phone_number: stored.phone_number.unwrap_or(defaults.phone_number),
            order_statuses: stored
                .order_statuses
                .or(stored.notification_order_statuses)
                .unwrap_or(defaults.order_statuses),
            password_changes: stored
                .password_changes
                .or(stored.notification_password_changes)
                .unwrap_or(defaults.password_changes),
            special_offers: stored
                .special_offers
                .or(stored.notification_special_offers)
                .unwrap_or(defaults.special_offers),
            newsletter: stored
                .newsletter
                .or(stored.notification_newsletter)
                .unwrap_or(defaults.newsletter),
            avatar_image_ref: None,
        }
    }
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            order_statuses: true,
            password_changes: true,
            special_offers: true,
            newsletter: true,
            avatar_image_ref: None,
        }
    }
}

impl ProfileRecord {
    /// Sets one field. The record is left untouched when the value kind does
    /// not match the field.
    pub fn apply(&mut self, field: ProfileField, value: FieldValue) -> Result<(), InvalidFieldError> {
        match (field, value) {
            (ProfileField::FirstName, FieldValue::Text(text)) => self.first_name = text,
            (ProfileField::LastName, FieldValue::Text(text)) => self.last_name = text,
            (ProfileField::Email, FieldValue::Text(text)) => self.email = text,
            (ProfileField::PhoneNumber, FieldValue::Text(text)) => {
                self.phone_number = apply_phone_mask(&text)
            }
            (ProfileField::AvatarImageRef, FieldValue::Text(text)) => {
                self.avatar_image_ref = if text.is_empty() { None } else { Some(text) }
            }
            (ProfileField::OrderStatuses, FieldValue::Flag(flag)) => self.order_statuses = flag,
            (ProfileField::PasswordChanges, FieldValue::Flag(flag)) => self.password_changes = flag,
            (ProfileField::SpecialOffers, FieldValue::Flag(flag)) => self.special_offers = flag,
            (ProfileField::Newsletter, FieldValue::Flag(flag)) => self.newsletter = flag,
            (field, value) => {
                return Err(InvalidFieldError::WrongValueKind {
                    field: field.key(),
                    expected: field.value_kind(),
                    actual: value.kind(),
                })
            }
        }
        Ok(())
    }

    pub fn value(&self, field: ProfileField) -> FieldValue {
        match field {
            ProfileField::FirstName => FieldValue::Text(self.first_name.clone()),
            ProfileField::LastName => FieldValue::Text(self.last_name.clone()),
            ProfileField::Email => FieldValue::Text(self.email.clone()),
            ProfileField::PhoneNumber => FieldValue::Text(self.phone_number.clone()),
            ProfileField::AvatarImageRef => {
                FieldValue::Text(self.avatar_image_ref.clone().unwrap_or_default())
            }
            ProfileField::OrderStatuses => FieldValue::Flag(self.order_statuses),
            ProfileField::PasswordChanges => FieldValue::Flag(self.password_changes),
            ProfileField::SpecialOffers => FieldValue::Flag(self.special_offers),
            ProfileField::Newsletter => FieldValue::Flag(self.newsletter),
        }
    }
}

/// Every editable field of [`ProfileRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    OrderStatuses,
    PasswordChanges,
    SpecialOffers,
    Newsletter,
    AvatarImageRef,
}

impl ProfileField {
    pub const ALL: [ProfileField; 9] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::Email,
        ProfileField::PhoneNumber,
        ProfileField::OrderStatuses,
        ProfileField::PasswordChanges,
        ProfileField::SpecialOffers,
        ProfileField::Newsletter,
        ProfileField::AvatarImageRef,
    ];

    /// Canonical camelCase key, as written in the stored JSON.
    pub fn key(self) -> &'static str {
        match self {
            ProfileField::FirstName => "firstName",
            ProfileField::LastName => "lastName",
            ProfileField::Email => "email",
            ProfileField::PhoneNumber => "phoneNumber",
            ProfileField::OrderStatuses => "orderStatuses",
            ProfileField::PasswordChanges => "passwordChanges",
            ProfileField::SpecialOffers => "specialOffers",
            ProfileField::Newsletter => "newsletter",
            ProfileField::AvatarImageRef => "avatarImageRef",
        }
    }

    pub fn value_kind(self) -> ValueKind {
        match self {
            ProfileField::OrderStatuses
            | ProfileField::PasswordChanges
            | ProfileField::SpecialOffers
            | ProfileField::Newsletter => ValueKind::Flag,
            _ => ValueKind::Text,
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProfileField {
    type Err = InvalidFieldError;

    /// Accepts the stored camelCase key, its snake_case form, and the
    /// `notification*` spelling of the four toggles. Matching is exact.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let field = match raw {
            "firstName" | "first_name" => ProfileField::FirstName,
            "lastName" | "last_name" => ProfileField::LastName,
            "email" => ProfileField::Email,
            "phoneNumber" | "phone_number" => ProfileField::PhoneNumber,
            "orderStatuses" | "order_statuses" | "notificationOrderStatuses" => {
                ProfileField::OrderStatuses
            }
            "passwordChanges" | "password_changes" | "notificationPasswordChanges" => {
                ProfileField::PasswordChanges
            }
            "specialOffers" | "special_offers" | "notificationSpecialOffers" => {
                ProfileField::SpecialOffers
            }
            "newsletter" | "notificationNewsletter" => ProfileField::Newsletter,
            "avatarImageRef" | "avatar_image_ref" => ProfileField::AvatarImageRef,
            _ => return Err(InvalidFieldError::UnknownField(raw.to_string())),
        };
        Ok(field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Flag,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Text => f.write_str("text"),
            ValueKind::Flag => f.write_str("flag"),
        }
    }
}

/// A value entered into a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Text(_) => ValueKind::Text,
            FieldValue::Flag(_) => ValueKind::Flag,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// Caller asked for a field the record does not have, or gave it the wrong
/// kind of value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidFieldError {
    #[error("unknown profile field '{0}'")]
    UnknownField(String),
    #[error("profile field '{field}' expects a {expected} value, got {actual}")]
    WrongValueKind {
        field: &'static str,
        expected: ValueKind,
        actual: ValueKind,
    },
}
