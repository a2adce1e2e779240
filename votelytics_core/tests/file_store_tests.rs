//! Integration tests for the file-backed cache store
//!
//! These exercise the on-disk format: records written by one store instance
//! must be visible to a fresh instance opened over the same directory, and
//! corrupt contents must degrade to an empty store rather than an error.

use std::sync::Arc;
use tempfile::TempDir;
use votelytics_core::cache::{CacheStore, FileStore, VersionedCache, keys, ttl};

#[test]
fn records_survive_reopening_the_store() {
    let dir = TempDir::new().unwrap();

    {
        let store = FileStore::new(dir.path()).unwrap();
        store.set_item(keys::CONSTITUENCIES, "payload").unwrap();
    }

    let reopened = FileStore::new(dir.path()).unwrap();
    assert_eq!(
        reopened.get_item(keys::CONSTITUENCIES).unwrap().as_deref(),
        Some("payload")
    );
}

#[test]
fn corrupt_store_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("cache.json"), "{definitely not json").unwrap();

    let store = FileStore::new(dir.path()).unwrap();
    assert!(store.keys().unwrap().is_empty());

    // And it is usable again after the reset.
    store.set_item("votelytics:test", "1").unwrap();
    assert_eq!(
        store.get_item("votelytics:test").unwrap().as_deref(),
        Some("1")
    );
}

#[test]
fn missing_cache_directory_is_created() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("deep").join("cache");

    let store = FileStore::new(&nested).unwrap();
    store.set_item("votelytics:test", "1").unwrap();
    assert!(nested.join("cache.json").exists());
}

#[test]
fn failed_disk_write_rolls_back_the_memory_entry() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path()).unwrap();
    store.set_item("votelytics:kept", "1").unwrap();

    // Deleting the directory makes every later persist fail.
    std::fs::remove_dir_all(dir.path()).unwrap();

    assert!(store.set_item("votelytics:new", "2").is_err());
    assert_eq!(store.get_item("votelytics:new").unwrap(), None);

    assert!(store.set_item("votelytics:kept", "changed").is_err());
    assert_eq!(
        store.get_item("votelytics:kept").unwrap().as_deref(),
        Some("1")
    );

    assert!(store.remove_item("votelytics:kept").is_err());
    assert_eq!(
        store.get_item("votelytics:kept").unwrap().as_deref(),
        Some("1")
    );
}

#[test]
fn versioned_cache_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();

    {
        let store = Arc::new(FileStore::new(dir.path()).unwrap());
        let cache = VersionedCache::new(store, 2);
        cache.set_with_ttl(&keys::history(7), &vec![2011, 2016, 2021], ttl::ONE_WEEK);
    }

    let store = Arc::new(FileStore::new(dir.path()).unwrap());
    let cache = VersionedCache::new(store, 2);
    assert_eq!(
        cache.get::<Vec<i32>>(&keys::history(7)),
        Some(vec![2011, 2016, 2021])
    );
}

#[test]
fn version_bump_invalidates_persisted_records() {
    let dir = TempDir::new().unwrap();

    {
        let store = Arc::new(FileStore::new(dir.path()).unwrap());
        let cache = VersionedCache::new(store, 1);
        cache.set_with_ttl(keys::ELECTIONS, &vec![2021], ttl::ONE_WEEK);
    }

    // Same data directory, bumped schema version.
    let store = Arc::new(FileStore::new(dir.path()).unwrap());
    let cache = VersionedCache::new(store.clone(), 2);
    assert_eq!(cache.get::<Vec<i32>>(keys::ELECTIONS), None);
    assert_eq!(store.get_item(keys::ELECTIONS).unwrap(), None);
}
