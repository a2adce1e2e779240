//! Cache store trait and the in-memory implementations
//!
//! The trait is the minimal key-value surface the versioned cache needs:
//! read, write, delete, enumerate. Operations are synchronous; the cache
//! never suspends, only the surrounding network fetch does.

use crate::error::StoreError;
use std::collections::HashMap;
use std::sync::Mutex;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Minimal key-value surface backing a [`super::VersionedCache`]
///
/// Implementations store opaque strings. They may fail; the cache layer
/// above swallows every failure and degrades to a miss, so implementations
/// should report errors honestly rather than papering over them.
pub trait CacheStore: Send + Sync {
    /// Read the raw value at `key`, if any
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write `value` at `key`, overwriting any prior value
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete `key`; absent keys are not an error
    fn remove_item(&self, key: &str) -> StoreResult<()>;

    /// Enumerate every key currently in the store
    fn keys(&self) -> StoreResult<Vec<String>>;
}

/// Ephemeral store backed by a `HashMap`
///
/// The default for tests and for runs where persistence is not wanted.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }
}

impl CacheStore for MemoryStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.lock()?.keys().cloned().collect())
    }
}

/// A store that keeps nothing
///
/// Every read misses and every write is discarded, which disables caching
/// without touching the code paths around it.
pub struct NoopStore;

impl NoopStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoopStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStore for NoopStore {
    fn get_item(&self, _key: &str) -> StoreResult<Option<String>> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Ok(())
    }

    fn remove_item(&self, _key: &str) -> StoreResult<()> {
        Ok(())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(Vec::new())
    }
}
