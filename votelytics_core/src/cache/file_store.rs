//! File-backed cache store
//!
//! Persists the whole key-value map as a single JSON file under the cache
//! directory. Loads are tolerant: a missing or unreadable file starts the
//! store empty rather than failing construction, since the cache above is
//! only ever an optimization.

use crate::cache::store::{CacheStore, StoreResult};
use crate::error::StoreError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

const STORE_FILE: &str = "cache.json";

/// Cache store persisted as one JSON file on disk
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open (or create) the store under `cache_dir`.
    ///
    /// Existing contents are loaded eagerly; corrupt contents are logged
    /// and discarded.
    pub fn new(cache_dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let cache_dir = cache_dir.into();
        if !cache_dir.exists() {
            std::fs::create_dir_all(&cache_dir)?;
        }

        let path = cache_dir.join(STORE_FILE);
        let entries = Self::load(&path);

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn load(path: &Path) -> HashMap<String, String> {
        if !path.exists() {
            return HashMap::new();
        }

        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    log::warn!(
                        "discarding unreadable cache file {}: {e}",
                        path.display()
                    );
                    HashMap::new()
                }
            },
            Err(e) => {
                log::warn!("failed to read cache file {}: {e}", path.display());
                HashMap::new()
            }
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) -> StoreResult<()> {
        let raw = serde_json::to_string(entries)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }
}

impl CacheStore for FileStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.lock()?;
        let prior = entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist(&entries) {
            // Keep memory matching the file.
            match prior {
                Some(prior) => entries.insert(key.to_string(), prior),
                None => entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.lock()?;
        let Some(prior) = entries.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.persist(&entries) {
            entries.insert(key.to_string(), prior);
            return Err(e);
        }
        Ok(())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.lock()?.keys().cloned().collect())
    }
}
