use littlelemon::storage::FileStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct IntegrationHarness {
    workspace: TempDir,
}

impl IntegrationHarness {
    pub fn new() -> Self {
        let workspace = TempDir::new().expect("failed to create temp workspace");
        Self { workspace }
    }

    pub fn workspace_path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn store_path(&self) -> PathBuf {
        self.workspace.path().join("storage.json")
    }

    /// Opens a fresh handle on the same backing file, as a relaunched app would.
    pub fn open_store(&self) -> FileStore {
        FileStore::open(self.store_path()).expect("failed to open key-value store")
    }
}

mod catalog_selection;
mod profile_lifecycle;
mod profile_roundtrip;
pub mod support;
