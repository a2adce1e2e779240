//! Versioned TTL caching for Votelytics API responses
//!
//! The cache is a read-through layer keyed by opaque strings under the
//! `votelytics:` namespace. Each record carries the time it was written, a
//! time-to-live, and the schema version in effect at write time; a record
//! is served only while all three checks pass, and stale records are
//! deleted lazily on the read that discovers them. There is no background
//! sweep.
//!
//! Storage sits behind the [`CacheStore`] trait so tests run against an
//! in-memory map while production persists to a JSON file in the platform
//! cache directory.

pub mod factory;
pub mod file_store;
pub mod store;
pub mod versioned;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// One cached record, exactly as serialized into the backing store
///
/// Field names are part of the persisted format and must not change without
/// bumping the schema version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub data: Value,
    /// Epoch milliseconds at write time
    pub timestamp: u64,
    /// Milliseconds after which the record is stale
    pub ttl: u64,
    /// Schema version in effect when the record was written
    pub version: u32,
}

/// Cache key construction
///
/// Keys are opaque to the cache itself; the prefixes here exist so
/// [`versioned::VersionedCache::clear_by_prefix`] can invalidate one
/// resource family without touching the others.
pub mod keys {
    /// Top-level namespace shared by every Votelytics cache key
    pub const NAMESPACE: &str = "votelytics:";

    pub const CONSTITUENCIES: &str = "votelytics:constituencies";
    pub const ELECTIONS: &str = "votelytics:elections";
    pub const CONSTITUENCY_PREFIX: &str = "votelytics:constituency:";
    pub const HISTORY_PREFIX: &str = "votelytics:history:";
    pub const WINNERS_PREFIX: &str = "votelytics:winners:";
    pub const PARTY_RESULTS_PREFIX: &str = "votelytics:party:results:";
    pub const PREDICTIONS_PREFIX: &str = "votelytics:predictions:";

    pub fn constituency(id: i64) -> String {
        format!("{CONSTITUENCY_PREFIX}{id}")
    }

    pub fn constituency_by_code(code: &str) -> String {
        format!("{CONSTITUENCY_PREFIX}code:{code}")
    }

    pub fn history(constituency_id: i64) -> String {
        format!("{HISTORY_PREFIX}{constituency_id}")
    }

    pub fn winners(year: i32) -> String {
        format!("{WINNERS_PREFIX}{year}")
    }

    pub fn party_results(party: &str, election_id: i64) -> String {
        format!("{PARTY_RESULTS_PREFIX}{party}:{election_id}")
    }

    pub fn predictions_summary(year: i32) -> String {
        format!("{PREDICTIONS_PREFIX}summary:{year}")
    }
}

/// TTL presets used by the API access layer
pub mod ttl {
    use super::Duration;

    pub const ONE_HOUR: Duration = Duration::from_millis(3_600_000);
    pub const SIX_HOURS: Duration = Duration::from_millis(21_600_000);
    pub const ONE_DAY: Duration = Duration::from_millis(86_400_000);
    pub const ONE_WEEK: Duration = Duration::from_millis(604_800_000);
}

// Re-export commonly used types
pub use factory::{CacheBackend, CacheFactory};
pub use file_store::FileStore;
pub use store::{CacheStore, MemoryStore, NoopStore};
pub use versioned::{Clock, DEFAULT_TTL, SystemClock, VersionedCache};
