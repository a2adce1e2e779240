//! Mock cache stores

use votelytics_core::cache::CacheStore;
use votelytics_core::cache::store::StoreResult;
use votelytics_core::error::StoreError;

/// A store where every operation fails, simulating an unavailable or
/// quota-exhausted persistence layer
///
/// The cache contract says none of these failures may reach the caller:
/// writes become no-ops and reads become misses.
pub struct FailingStore;

impl FailingStore {
    fn outage<T>() -> StoreResult<T> {
        Err(StoreError::Unavailable("simulated storage outage".to_string()))
    }
}

impl CacheStore for FailingStore {
    fn get_item(&self, _key: &str) -> StoreResult<Option<String>> {
        Self::outage()
    }

    fn set_item(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Self::outage()
    }

    fn remove_item(&self, _key: &str) -> StoreResult<()> {
        Self::outage()
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        Self::outage()
    }
}
