//! Key-value stores holding serialized snapshots
//!
//! The persistence slot only needs string get/set by key. Two backends:
//! one file per key under a data directory, and an in-memory map.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::error::{FinanceError, FinanceResult};

use super::file_io::{read_string, write_string_atomic};

/// Minimal string key-value interface
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> FinanceResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> FinanceResult<()>;

    /// Remove `key`; returns whether anything was removed
    fn remove(&self, key: &str) -> FinanceResult<bool>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> FinanceResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> FinanceResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> FinanceResult<bool> {
        (**self).remove(key)
    }
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Path backing `key`, rejecting keys that would escape the directory
    pub fn path_for(&self, key: &str) -> FinanceResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
            && !key.starts_with('.');
        if !valid {
            return Err(FinanceError::Storage(format!("Invalid storage key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> FinanceResult<Option<String>> {
        read_string(self.path_for(key)?)
    }

    fn set(&self, key: &str, value: &str) -> FinanceResult<()> {
        write_string_atomic(self.path_for(key)?, value)
    }

    fn remove(&self, key: &str) -> FinanceResult<bool> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&path).map_err(|e| {
            FinanceError::Storage(format!("Failed to remove {}: {}", path.display(), e))
        })?;
        Ok(true)
    }
}

/// Process-local store, used for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> FinanceResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> FinanceResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> FinanceResult<bool> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        Ok(entries.remove(key).is_some())
    }
}
