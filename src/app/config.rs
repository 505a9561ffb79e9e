// src/app/config.rs
//
// Application configuration. Every field has a default, so an empty
// JSON object is a valid config file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::dto::DEFAULT_PLACEHOLDER_SIZE;
use crate::db::default_database_path;
use crate::error::AppResult;
use crate::repositories::DEFAULT_STORAGE_KEY;

/// Browsers cap local storage around 5 MiB per origin
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Where the collection is persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageBackend {
    /// SQLite file; `None` means `{data_dir}/mangashelf/mangashelf.db`
    Sqlite {
        #[serde(default)]
        path: Option<PathBuf>,
    },
    /// Lost when the process exits
    Memory,
}

impl Default for StorageBackend {
    fn default() -> Self {
        StorageBackend::Sqlite { path: None }
    }
}

impl StorageBackend {
    pub fn resolved_path(&self) -> AppResult<Option<PathBuf>> {
        match self {
            StorageBackend::Sqlite { path: Some(path) } => Ok(Some(path.clone())),
            StorageBackend::Sqlite { path: None } => default_database_path().map(Some),
            StorageBackend::Memory => Ok(None),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageBackend,
    pub storage_key: String,
    /// `None` disables the write quota
    pub quota_bytes: Option<usize>,
    pub placeholder_size: u32,
    /// env_logger filter string, e.g. "info" or "mangashelf=debug"
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageBackend::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            quota_bytes: Some(DEFAULT_QUOTA_BYTES),
            placeholder_size: DEFAULT_PLACEHOLDER_SIZE,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults with in-memory storage
    pub fn in_memory() -> Self {
        Self {
            storage: StorageBackend::Memory,
            ..Self::default()
        }
    }

    pub fn from_json_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
