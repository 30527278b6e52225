use std::collections::{BTreeMap, BTreeSet};

use super::{KeyValueStore, StorageError};

/// In-process store. Reads and individual key writes can be made to fail so
/// callers can exercise their degraded paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    fail_reads: bool,
    failing_writes: BTreeSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Makes every subsequent `get` fail until reset.
    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Makes `set`/`remove` on `key` fail until [`MemoryStore::clear_write_failures`].
    pub fn fail_writes_for(&mut self, key: impl Into<String>) {
        self.failing_writes.insert(key.into());
    }

    pub fn clear_write_failures(&mut self) {
        self.failing_writes.clear();
    }

    /// Raw view of a stored value, bypassing failure injection.
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_write(&self, key: &str) -> Result<(), StorageError> {
        if self.failing_writes.contains(key) {
            return Err(StorageError::unavailable(key, "write rejected"));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::unavailable(key, "read rejected"));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_write(key)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.check_write(key)?;
        self.entries.remove(key);
        Ok(())
    }
}
