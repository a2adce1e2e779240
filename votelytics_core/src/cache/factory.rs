//! Cache store factory
//!
//! Builds the store backing the versioned cache from configuration: a
//! persistent JSON file store (default), an ephemeral in-memory store, or
//! nothing at all when caching is disabled.

use crate::cache::file_store::FileStore;
use crate::cache::store::{CacheStore, MemoryStore, NoopStore, StoreResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Which store backs the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// JSON file under the cache directory; survives restarts
    File,
    /// Process-local map; useful for tests and one-shot runs
    Memory,
    /// No caching; every read goes to the network
    Disabled,
}

impl Default for CacheBackend {
    fn default() -> Self {
        Self::File
    }
}

/// Factory for cache store implementations
pub struct CacheFactory;

impl CacheFactory {
    /// Build the store for `backend`. `dir` overrides the platform cache
    /// directory for the file backend and is ignored otherwise.
    pub fn create(
        backend: CacheBackend,
        dir: Option<PathBuf>,
    ) -> StoreResult<Arc<dyn CacheStore>> {
        match backend {
            CacheBackend::File => {
                let dir = dir.unwrap_or_else(default_cache_dir);
                Ok(Arc::new(FileStore::new(dir)?))
            }
            CacheBackend::Memory => Ok(Arc::new(MemoryStore::new())),
            CacheBackend::Disabled => Ok(Arc::new(NoopStore::new())),
        }
    }

    /// Ephemeral store, mostly for tests
    pub fn memory() -> Arc<dyn CacheStore> {
        Arc::new(MemoryStore::new())
    }
}

/// Platform cache directory for Votelytics
///
/// `~/.cache/votelytics` on Linux, the platform equivalent elsewhere, with
/// a relative fallback when no home directory can be determined.
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|d| d.join("votelytics"))
        .unwrap_or_else(|| PathBuf::from(".votelytics/cache"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_backend_is_file() {
        assert_eq!(CacheBackend::default(), CacheBackend::File);
    }

    #[test]
    fn backend_names_are_lowercase_in_config() {
        assert_eq!(
            serde_json::to_value(CacheBackend::Disabled).unwrap(),
            serde_json::json!("disabled")
        );
    }

    #[test]
    fn memory_and_disabled_backends_need_no_directory() {
        assert!(CacheFactory::create(CacheBackend::Memory, None).is_ok());
        assert!(CacheFactory::create(CacheBackend::Disabled, None).is_ok());
    }
}
