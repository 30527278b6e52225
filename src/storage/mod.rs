//! Local key-value persistence used by the profile screen.
//!
//! Values are plain strings; callers own the encoding. The profile record is
//! stored as JSON under [`PROFILE_KEY`] and the avatar reference is stored raw
//! under [`IMAGE_URI_KEY`].

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Key holding the JSON-encoded profile record.
pub const PROFILE_KEY: &str = "profile";
/// Key holding the raw avatar image reference.
pub const IMAGE_URI_KEY: &str = "imageUri";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed for {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    #[error("storage payload could not be encoded or decoded: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("storage unavailable for key '{key}': {reason}")]
    Unavailable { key: String, reason: String },
}

impl StorageError {
    pub fn unavailable(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// String-valued key-value store collaborator.
///
/// A missing key is `Ok(None)`, never an error.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
