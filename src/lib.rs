pub mod app;
pub mod catalog;
pub mod onboarding;
pub mod profiles;
pub mod session;
pub mod storage;

// Re-export commonly used types for convenience.
pub use app::AppConfig;
pub use profiles::{ProfileEvent, ProfileRecord, ProfileStateController};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
