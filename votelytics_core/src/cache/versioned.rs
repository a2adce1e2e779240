//! The versioned TTL cache
//!
//! Validity contract: a record is served iff it was written under the
//! current schema version and `now - timestamp <= ttl`. Reads that find a
//! record failing either check delete it on the spot (lazy eviction); no
//! background sweep exists. Every storage failure is logged and reported as
//! a miss, so callers never handle cache errors.

use crate::cache::CacheEntry;
use crate::cache::keys;
use crate::cache::store::CacheStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// TTL applied when the caller does not pick one (one hour)
pub const DEFAULT_TTL: Duration = Duration::from_millis(3_600_000);

/// Time source seam, so expiry checks are deterministic under test
pub trait Clock: Send + Sync {
    /// Current time as milliseconds since the Unix epoch
    fn now_ms(&self) -> u64;
}

/// Wall-clock time
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Read-through cache with per-entry TTLs and a global schema version
///
/// The schema version is fixed at construction. Bumping it (a new process
/// with a higher number) invalidates every record written under the old
/// one; the records are deleted lazily as reads touch them.
pub struct VersionedCache {
    store: Arc<dyn CacheStore>,
    clock: Arc<dyn Clock>,
    schema_version: u32,
}

impl VersionedCache {
    pub fn new(store: Arc<dyn CacheStore>, schema_version: u32) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
            schema_version,
        }
    }

    /// Replace the wall clock, for tests that simulate the passage of time
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }

    /// Look up `key`, returning the payload only if the record is valid.
    ///
    /// Misses on: absent key, storage failure, malformed record, schema
    /// version mismatch, TTL expiry. Version-mismatched and expired records
    /// are deleted as a side effect; malformed ones are left in place.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("cache read failed for {key}: {e}");
                return None;
            }
        };

        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("malformed cache record at {key}: {e}");
                return None;
            }
        };

        if entry.version != self.schema_version {
            log::debug!(
                "invalidating {key}: written under schema v{}, current is v{}",
                entry.version,
                self.schema_version
            );
            self.delete_quietly(key);
            return None;
        }

        // Inclusive boundary: a record read at exactly timestamp + ttl is
        // still a hit.
        let now = self.clock.now_ms();
        if now.saturating_sub(entry.timestamp) > entry.ttl {
            self.delete_quietly(key);
            return None;
        }

        match serde_json::from_value(entry.data) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("cache payload at {key} does not match requested type: {e}");
                None
            }
        }
    }

    /// Store `data` at `key` with the default one-hour TTL.
    pub fn set<T: Serialize>(&self, key: &str, data: &T) {
        self.set_with_ttl(key, data, DEFAULT_TTL);
    }

    /// Store `data` at `key`, fully replacing any prior record.
    ///
    /// Failures (serialization, storage quota, storage unavailable) are
    /// logged and swallowed; the call is then a no-op and later reads just
    /// miss.
    pub fn set_with_ttl<T: Serialize>(&self, key: &str, data: &T, ttl: Duration) {
        let data = match serde_json::to_value(data) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("cache write failed for {key}: unserializable payload: {e}");
                return;
            }
        };

        let entry = CacheEntry {
            data,
            timestamp: self.clock.now_ms(),
            ttl: ttl.as_millis() as u64,
            version: self.schema_version,
        };

        let raw = match serde_json::to_string(&entry) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("cache write failed for {key}: {e}");
                return;
            }
        };

        if let Err(e) = self.store.set_item(key, &raw) {
            log::warn!("cache write failed for {key}: {e}");
        }
    }

    /// Delete `key` if present. Absent keys and storage failures are both
    /// fine.
    pub fn remove(&self, key: &str) {
        self.delete_quietly(key);
    }

    /// Delete every record whose key starts with `prefix`.
    pub fn clear_by_prefix(&self, prefix: &str) {
        let all_keys = match self.store.keys() {
            Ok(all_keys) => all_keys,
            Err(e) => {
                log::warn!("cache clear for prefix {prefix} failed: {e}");
                return;
            }
        };

        for key in all_keys.iter().filter(|k| k.starts_with(prefix)) {
            self.delete_quietly(key);
        }
    }

    /// Approximate bytes held by the backing store, counting every key in
    /// it (not only `votelytics:` ones). Diagnostic only.
    pub fn size_bytes(&self) -> u64 {
        let all_keys = match self.store.keys() {
            Ok(all_keys) => all_keys,
            Err(e) => {
                log::warn!("cache size calculation failed: {e}");
                return 0;
            }
        };

        let mut size = 0u64;
        for key in &all_keys {
            if let Ok(Some(value)) = self.store.get_item(key) {
                size += (key.len() + value.len()) as u64;
            }
        }
        size
    }

    /// Drop every record in the Votelytics namespace.
    ///
    /// Exported so hosts can wire it to a console command or admin hook and
    /// nuke a stale deployment's cache without a code change.
    pub fn clear_all(&self) {
        self.clear_by_prefix(keys::NAMESPACE);
        log::info!("all Votelytics cache entries cleared");
    }

    fn delete_quietly(&self, key: &str) {
        if let Err(e) = self.store.remove_item(key) {
            log::warn!("cache delete failed for {key}: {e}");
        }
    }
}
