//! Reference `ListenStore` implementations
//!
//! `MemoryListenStore` backs tests and ephemeral hosts; `JsonFileListenStore`
//! models per-profile local storage with a fixed well-known key.

use crate::error::{FableError, Result};
use crate::traits::ListenStore;
use serde_json::{Map, Value};
use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

/// Well-known storage key for the listen counter
pub const LISTEN_COUNT_KEY: &str = "listen_count";

/// In-memory listen store
///
/// Does not survive a reload; useful for tests and hosts without durable
/// storage.
#[derive(Debug, Default)]
pub struct MemoryListenStore {
    count: Cell<u64>,
}

impl MemoryListenStore {
    /// Create an empty store (counter reads as 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an existing count
    pub fn with_count(count: u64) -> Self {
        Self {
            count: Cell::new(count),
        }
    }
}

impl ListenStore for MemoryListenStore {
    fn get(&self) -> Result<u64> {
        Ok(self.count.get())
    }

    fn set(&self, count: u64) -> Result<()> {
        self.count.set(count);
        Ok(())
    }
}

/// File-backed listen store
///
/// Persists the counter as a JSON object with a single fixed key, e.g.
/// `{"listen_count": 7}`. A missing file reads as zero; the whole file is
/// rewritten on every set.
#[derive(Debug, Clone)]
pub struct JsonFileListenStore {
    path: PathBuf,
}

impl JsonFileListenStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ListenStore for JsonFileListenStore {
    fn get(&self) -> Result<u64> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "listen store file absent, counter reads 0");
            return Ok(0);
        }

        let contents = fs::read_to_string(&self.path)?;
        let value: Value = serde_json::from_str(&contents)?;

        value
            .get(LISTEN_COUNT_KEY)
            .and_then(Value::as_u64)
            .ok_or_else(|| {
                FableError::storage(format!(
                    "missing or non-integer {LISTEN_COUNT_KEY} in {}",
                    self.path.display()
                ))
            })
    }

    fn set(&self, count: u64) -> Result<()> {
        let mut object = Map::new();
        object.insert(LISTEN_COUNT_KEY.to_string(), Value::from(count));

        fs::write(&self.path, serde_json::to_string(&Value::Object(object))?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_defaults_to_zero() {
        let store = MemoryListenStore::new();
        assert_eq!(store.get().unwrap(), 0);
    }

    #[test]
    fn memory_store_set_get() {
        let store = MemoryListenStore::with_count(5);
        assert_eq!(store.get().unwrap(), 5);

        store.set(6).unwrap();
        assert_eq!(store.get().unwrap(), 6);
    }

    #[test]
    fn file_store_missing_file_reads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileListenStore::new(dir.path().join("listens.json"));
        assert_eq!(store.get().unwrap(), 0);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listens.json");

        let store = JsonFileListenStore::new(&path);
        store.set(12).unwrap();

        // Simulated reload: new store over the same file
        let reopened = JsonFileListenStore::new(&path);
        assert_eq!(reopened.get().unwrap(), 12);
    }

    #[test]
    fn file_store_rejects_malformed_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listens.json");
        fs::write(&path, "{\"listen_count\": \"seven\"}").unwrap();

        let store = JsonFileListenStore::new(&path);
        assert!(store.get().is_err());
    }
}
