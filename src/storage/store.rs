//! Key-value storage boundary.
//!
//! The task list persists through a deliberately small contract: read a
//! string for a key, or write one. `FileStore` keeps one JSON file per key
//! in the platform application data directory; `MemoryStore` backs the same
//! contract with a map, for embedders and tests.

use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use std::collections::HashMap;
use std::fs;

/// Synchronous key-value storage used by the task list.
///
/// `read` returns `None` for a key that was never written. `write` durably
/// associates `value` with `key`, overwriting any previous value, and is
/// expected to either succeed completely or fail with an error; there is no
/// retry policy at this layer.
pub trait KvStore {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store: each key maps to `<key>.json` in the data directory.
pub struct FileStore {
    storage: DataStorage,
}

impl FileStore {
    pub fn new() -> Self {
        FileStore { storage: DataStorage::new() }
    }

    fn file_name(key: &str) -> String {
        format!("{}.json", key)
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KvStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.storage.get_path(&Self::file_name(key))?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.storage.get_path(&Self::file_name(key))?;
        fs::write(path, value)?;
        Ok(())
    }
}

/// In-memory store for tests and embedders that manage persistence themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with a single key-value pair.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    /// Returns the currently stored value for a key, if any.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KvStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
