//! Durable key-value storage for session data
//!
//! Holds the bearer tokens and profiles that must survive a restart. The
//! user site and the admin back-office keep their sessions under distinct
//! keys so both can be logged in at once.
//!
//! `FileStorage` keeps every key in one JSON object on disk and rewrites the
//! file on every mutation. There is no cross-process synchronisation: two
//! processes sharing a file see each other's writes only after reopening.

use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// User site bearer token
pub const USER_TOKEN_KEY: &str = "token";
/// User site profile (JSON)
pub const USER_INFO_KEY: &str = "userInfo";
/// Admin back-office bearer token
pub const ADMIN_TOKEN_KEY: &str = "adminToken";
/// Admin back-office profile (JSON)
pub const ADMIN_INFO_KEY: &str = "adminInfo";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// String key-value store with interior mutability
pub trait KeyValueStorage: Send + Sync + std::fmt::Debug {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// JSON helpers on top of any [`KeyValueStorage`]
pub trait StorageExt: KeyValueStorage {
    /// Read and decode a JSON value. Missing keys and undecodable values
    /// both read as `None`.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Discarding undecodable stored value");
                None
            }
        }
    }

    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }

    /// Non-empty string value
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty())
    }
}

impl<S: KeyValueStorage + ?Sized> StorageExt for S {}

/// In-memory storage, lost when dropped
#[derive(Debug, Default)]
pub struct MemoryStorage {
    data: RwLock<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.data.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.data.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.data.write().remove(key);
        Ok(())
    }
}

/// File-backed storage: a single JSON object `{ key: value }`
#[derive(Debug)]
pub struct FileStorage {
    file_path: PathBuf,
    data: RwLock<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Open the storage file, starting empty when it does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let file_path = path.into();

        let data = if file_path.exists() {
            let content = std::fs::read_to_string(&file_path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %file_path.display(), keys = data.len(), "Storage opened");

        Ok(Self {
            file_path,
            data: RwLock::new(data),
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn save(&self, data: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(data)?;
        std::fs::write(&self.file_path, content)?;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.data.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut data = self.data.write();
        let previous = data.insert(key.to_string(), value.to_string());
        if let Err(e) = self.save(&data) {
            // Memory never runs ahead of the file
            match previous {
                Some(previous) => data.insert(key.to_string(), previous),
                None => data.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut data = self.data.write();
        if let Some(previous) = data.remove(key)
            && let Err(e) = self.save(&data)
        {
            data.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }
}
