//! Integration tests for the cached API access layer
//!
//! These verify the read-through contract between the client and the
//! versioned cache: hits skip the network, misses fetch and store,
//! parameterized reads always go live, and prefix clears invalidate one
//! resource family at a time.

use std::sync::Arc;
use votelytics_core::api::{ConstituencyFilter, PredictionFilter, ResultFilter};
use votelytics_core::cache::{CacheFactory, MemoryStore, VersionedCache, keys};
use votelytics_core::{Transport, VotelyticsClient};
use votelytics_test_utils::builders::{
    constituency_list_json, elections_json, predictions_list_json,
};
use votelytics_test_utils::{FailingStore, FailingTransport, ManualClock, MockTransport, TestDataBuilder};

fn client_with(transport: Arc<MockTransport>) -> VotelyticsClient {
    let cache = VersionedCache::new(CacheFactory::memory(), 2);
    VotelyticsClient::new(transport, cache)
}

#[tokio::test]
async fn repeat_reads_are_served_from_cache() {
    let transport = Arc::new(
        MockTransport::new().with_response("/constituencies/", constituency_list_json(3)),
    );
    let client = client_with(transport.clone());

    let first = client.constituencies().await.unwrap();
    let second = client.constituencies().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.total, 3);
    assert_eq!(transport.calls_to("/constituencies/"), 1);
}

#[tokio::test]
async fn filtered_reads_always_hit_the_network() {
    let transport = Arc::new(
        MockTransport::new().with_response("/constituencies/", constituency_list_json(2)),
    );
    let client = client_with(transport.clone());

    let filter = ConstituencyFilter {
        district: Some("Chennai".to_string()),
        ..Default::default()
    };
    client.constituencies_filtered(&filter).await.unwrap();
    client.constituencies_filtered(&filter).await.unwrap();

    assert_eq!(transport.calls_to("/constituencies/"), 2);
}

#[tokio::test]
async fn parameterized_results_bypass_the_cache() {
    let results = serde_json::json!([
        TestDataBuilder::new().with_party("DMK").build_json()
    ]);
    let transport =
        Arc::new(MockTransport::new().with_response("/elections/3/results", results));
    let client = client_with(transport.clone());

    let filter = ResultFilter {
        winner_only: Some(true),
        ..Default::default()
    };
    client.election_results(3, &filter).await.unwrap();
    client.election_results(3, &filter).await.unwrap();

    assert_eq!(transport.calls_to("/elections/3/results"), 2);
}

#[tokio::test]
async fn warm_cache_survives_a_backend_outage() {
    let store = Arc::new(MemoryStore::new());
    let transport = Arc::new(
        MockTransport::new().with_response("/elections/", elections_json()),
    );
    let warm = VotelyticsClient::new(
        transport,
        VersionedCache::new(store.clone(), 2),
    );
    let elections = warm.elections().await.unwrap();
    assert_eq!(elections.len(), 3);

    // Same store, dead backend: the cached listing still answers.
    let cold = VotelyticsClient::new(
        Arc::new(FailingTransport),
        VersionedCache::new(store, 2),
    );
    assert_eq!(cold.elections().await.unwrap(), elections);
}

#[tokio::test]
async fn expired_entries_trigger_a_refetch() {
    let clock = Arc::new(ManualClock::new(0));
    let transport = Arc::new(
        MockTransport::new().with_response("/elections/", elections_json()),
    );
    let cache = VersionedCache::new(CacheFactory::memory(), 2).with_clock(clock.clone());
    let client = VotelyticsClient::new(transport.clone(), cache);

    client.elections().await.unwrap();
    client.elections().await.unwrap();
    assert_eq!(transport.calls_to("/elections/"), 1);

    // One day plus a millisecond: past the listing's TTL.
    clock.set(86_400_001);
    client.elections().await.unwrap();
    assert_eq!(transport.calls_to("/elections/"), 2);
}

#[tokio::test]
async fn prefix_clear_invalidates_one_resource_family() {
    let party_rows = serde_json::json!([
        TestDataBuilder::new().with_party("DMK").build_json()
    ]);
    let transport = Arc::new(
        MockTransport::new()
            .with_response("/elections/3/results", party_rows)
            .with_response("/elections/", elections_json()),
    );
    let client = client_with(transport.clone());

    client.party_results("DMK", 3).await.unwrap();
    client.elections().await.unwrap();

    // Clearing the party-results family forces a refetch there only.
    client.cache().clear_by_prefix(keys::PARTY_RESULTS_PREFIX);

    client.party_results("DMK", 3).await.unwrap();
    client.elections().await.unwrap();

    assert_eq!(transport.calls_to("/elections/3/results"), 2);
    assert_eq!(transport.calls_to("/elections/"), 1);
}

#[tokio::test]
async fn schema_version_bump_forces_refetch() {
    let store = Arc::new(MemoryStore::new());
    let transport = Arc::new(
        MockTransport::new().with_response("/constituencies/", constituency_list_json(1)),
    );

    let v1 = VotelyticsClient::new(transport.clone(), VersionedCache::new(store.clone(), 1));
    v1.constituencies().await.unwrap();
    assert_eq!(transport.calls_to("/constituencies/"), 1);

    // New deployment, bumped schema version, same persistent store.
    let v2 = VotelyticsClient::new(transport.clone(), VersionedCache::new(store, 2));
    v2.constituencies().await.unwrap();
    assert_eq!(transport.calls_to("/constituencies/"), 2);
}

#[tokio::test]
async fn broken_cache_storage_degrades_to_always_fetching() {
    let transport = Arc::new(
        MockTransport::new().with_response("/constituencies/", constituency_list_json(1)),
    );
    let client = VotelyticsClient::new(
        transport.clone(),
        VersionedCache::new(Arc::new(FailingStore), 2),
    );

    // Every call succeeds; the cache just never retains anything.
    client.constituencies().await.unwrap();
    client.constituencies().await.unwrap();
    assert_eq!(transport.calls_to("/constituencies/"), 2);
}

#[tokio::test]
async fn distinct_parties_cache_under_distinct_keys() {
    let dmk = serde_json::json!([TestDataBuilder::new().with_party("DMK").build_json()]);
    let transport =
        Arc::new(MockTransport::new().with_response("/elections/3/results", dmk));
    let client = client_with(transport.clone());

    client.party_results("DMK", 3).await.unwrap();
    client.party_results("AIADMK", 3).await.unwrap();

    // Different keys, so the second party was a miss despite same endpoint.
    assert_eq!(transport.calls_to("/elections/3/results"), 2);

    client.party_results("DMK", 3).await.unwrap();
    assert_eq!(transport.calls_to("/elections/3/results"), 2);
}

#[tokio::test]
async fn prediction_listings_always_hit_the_network() {
    let transport = Arc::new(
        MockTransport::new().with_response("/predictions/", predictions_list_json(2)),
    );
    let client = client_with(transport.clone());

    let filter = PredictionFilter {
        year: Some(2026),
        alliance: Some("SPA".to_string()),
        ..Default::default()
    };
    let list = client.predictions(&filter).await.unwrap();
    assert_eq!(list.total, 2);
    assert_eq!(list.predictions[0].predicted_winner_alliance, "SPA");

    client.predictions(&filter).await.unwrap();
    assert_eq!(transport.calls_to("/predictions/"), 2);
}

#[tokio::test]
async fn backend_errors_propagate_when_cache_is_cold() {
    let client = VotelyticsClient::new(
        Arc::new(FailingTransport),
        VersionedCache::new(CacheFactory::memory(), 2),
    );

    let err = client.constituencies().await.unwrap_err();
    assert!(err.to_string().contains("503"));
}
