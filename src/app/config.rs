//! Configuration primitives for the Little Lemon profile core.
//!
//! Stored in a machine-readable TOML file located at:
//!   %APPDATA%/LittleLemon/config/config.toml on Windows
//!   $XDG_DATA_HOME/LittleLemon/config/config.toml on Linux
//!   ~/Library/Application Support/LittleLemon/config/config.toml on macOS
//!
//! The config tracks where the local key-value store lives, how long the
//! splash screen stays up and which options are handed to the media picker.

use serde::{Deserialize, Serialize};

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    /// Local key-value store settings.
    #[serde(default)]
    pub storage: StorageSettings,
    /// Onboarding splash timing.
    #[serde(default)]
    pub splash: SplashSettings,
    /// Options forwarded to the device media picker.
    #[serde(default)]
    pub picker: PickerSettings,
}

/// Where the on-disk key-value store is written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageSettings {
    /// File name of the JSON store, relative to the workspace root.
    #[serde(default = "default_storage_file_name")]
    pub file_name: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            file_name: default_storage_file_name(),
        }
    }
}

fn default_storage_file_name() -> String {
    "storage.json".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SplashSettings {
    /// Milliseconds before the splash screen reports ready.
    #[serde(default = "default_ready_delay_ms")]
    pub ready_delay_ms: u64,
}

impl Default for SplashSettings {
    fn default() -> Self {
        Self {
            ready_delay_ms: default_ready_delay_ms(),
        }
    }
}

const fn default_ready_delay_ms() -> u64 {
    1_500
}

/// Media picker knobs. The aspect ratio is fixed to square avatars.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PickerSettings {
    /// Whether the user is offered a crop step after choosing an image.
    #[serde(default = "default_allows_editing")]
    pub allows_editing: bool,
    /// Compression quality between 0.0 and 1.0.
    #[serde(default = "default_quality")]
    pub quality: f32,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            allows_editing: default_allows_editing(),
            quality: default_quality(),
        }
    }
}

const fn default_allows_editing() -> bool {
    true
}

const fn default_quality() -> f32 {
    1.0
}

/// Standard relative path to the config file (resolved per OS at runtime).
pub const CONFIG_FILE_NAME: &str = "config.toml";

use anyhow::{Context, Result};
use directories::BaseDirs;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Returns the root directory where Little Lemon stores data.
///
/// Order of precedence:
/// 1. `LITTLELEMON_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var("LITTLELEMON_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("LittleLemon"))
}

pub fn config_dir() -> Result<PathBuf> {
    let root = workspace_root()?;
    Ok(root.join("config"))
}

/// Path to the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    let path = config_file_path()?;
    if path.exists() {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: AppConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(cfg)
    } else {
        Ok(AppConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save(config: &AppConfig) -> Result<()> {
    let dir = config_dir()?;
    fs::create_dir_all(&dir)?;
    let path = config_file_path()?;
    let data = toml::to_string_pretty(config)?;
    fs::write(&path, data)?;
    Ok(())
}

/// Ensures the workspace root and config directory exist.
pub fn ensure_workspace_structure() -> Result<WorkspacePaths> {
    let root = workspace_root()?;
    let config_dir = root.join("config");
    fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create workspace at {:?}", root))?;
    Ok(WorkspacePaths { root, config_dir })
}

/// Convenience struct exposing important workspace paths.
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    pub root: PathBuf,
    pub config_dir: PathBuf,
}

impl WorkspacePaths {
    /// Location of the JSON key-value store for the given settings.
    pub fn storage_file(&self, settings: &StorageSettings) -> PathBuf {
        self.root.join(&settings.file_name)
    }
}
