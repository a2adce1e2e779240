//! API access layer
//!
//! `VotelyticsClient` wraps a [`Transport`] with read-through caching.
//! Parameter-stable reads (the full constituency list, one constituency's
//! history, a party's results in one election) are cached under fixed key
//! prefixes with operation-specific TTLs; reads taking arbitrary filter or
//! pagination parameters always go to the network, so the key space stays
//! bounded. That policy lives here, not in the cache.

pub mod transport;

use crate::cache::{VersionedCache, keys, ttl};
use crate::error::{ApiError, Result};
use crate::types::{
    Constituency, ConstituencyList, Election, ElectionResult, PartyPerformance,
    PredictionList, PredictionsSummary,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use transport::Transport;

/// Filters for parameterized result listings; these reads are always live
#[derive(Debug, Clone, Default)]
pub struct ResultFilter {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub party: Option<String>,
    pub winner_only: Option<bool>,
}

impl ResultFilter {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(skip) = self.skip {
            query.push(("skip".to_string(), skip.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(party) = &self.party {
            query.push(("party".to_string(), party.clone()));
        }
        if let Some(winner_only) = self.winner_only {
            query.push(("winner_only".to_string(), winner_only.to_string()));
        }
        query
    }
}

/// Filters for constituency listings
#[derive(Debug, Clone, Default)]
pub struct ConstituencyFilter {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub district: Option<String>,
    pub region: Option<String>,
}

impl ConstituencyFilter {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(skip) = self.skip {
            query.push(("skip".to_string(), skip.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(district) = &self.district {
            query.push(("district".to_string(), district.clone()));
        }
        if let Some(region) = &self.region {
            query.push(("region".to_string(), region.clone()));
        }
        query
    }
}

/// Filters for prediction listings
#[derive(Debug, Clone, Default)]
pub struct PredictionFilter {
    pub year: Option<i32>,
    pub alliance: Option<String>,
    pub confidence_level: Option<String>,
    pub region: Option<String>,
    pub district: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl PredictionFilter {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(year) = self.year {
            query.push(("year".to_string(), year.to_string()));
        }
        if let Some(alliance) = &self.alliance {
            query.push(("alliance".to_string(), alliance.clone()));
        }
        if let Some(level) = &self.confidence_level {
            query.push(("confidence_level".to_string(), level.clone()));
        }
        if let Some(region) = &self.region {
            query.push(("region".to_string(), region.clone()));
        }
        if let Some(district) = &self.district {
            query.push(("district".to_string(), district.clone()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            query.push(("offset".to_string(), offset.to_string()));
        }
        query
    }
}

/// Client for the Votelytics REST backend with transparent caching
pub struct VotelyticsClient {
    transport: Arc<dyn Transport>,
    cache: VersionedCache,
}

impl VotelyticsClient {
    pub fn new(transport: Arc<dyn Transport>, cache: VersionedCache) -> Self {
        Self { transport, cache }
    }

    /// The cache behind this client, for diagnostics (size, manual clears)
    pub fn cache(&self) -> &VersionedCache {
        &self.cache
    }

    /// All 234 constituencies. Cached for a day.
    pub async fn constituencies(&self) -> Result<ConstituencyList> {
        self.fetch_cached(keys::CONSTITUENCIES, "/constituencies/", &[], ttl::ONE_DAY)
            .await
    }

    /// Constituencies matching arbitrary filters. Always live.
    pub async fn constituencies_filtered(
        &self,
        filter: &ConstituencyFilter,
    ) -> Result<ConstituencyList> {
        self.fetch("/constituencies/", &filter.to_query()).await
    }

    /// One constituency by ID. Cached for six hours.
    pub async fn constituency(&self, id: i64) -> Result<Constituency> {
        self.fetch_cached(
            &keys::constituency(id),
            &format!("/constituencies/{id}"),
            &[],
            ttl::SIX_HOURS,
        )
        .await
    }

    /// One constituency by its code (e.g. `TN-014`). Cached for six hours.
    pub async fn constituency_by_code(&self, code: &str) -> Result<Constituency> {
        self.fetch_cached(
            &keys::constituency_by_code(code),
            &format!("/constituencies/code/{code}"),
            &[],
            ttl::SIX_HOURS,
        )
        .await
    }

    /// All constituencies in a district. Always live; district names are
    /// free-form input and would grow the key space unboundedly.
    pub async fn constituencies_by_district(&self, district: &str) -> Result<Vec<Constituency>> {
        self.fetch(&format!("/constituencies/district/{district}"), &[])
            .await
    }

    /// All elections. Cached for a day.
    pub async fn elections(&self) -> Result<Vec<Election>> {
        self.fetch_cached(keys::ELECTIONS, "/elections/", &[], ttl::ONE_DAY)
            .await
    }

    /// One election by ID. Always live.
    pub async fn election(&self, id: i64) -> Result<Election> {
        self.fetch(&format!("/elections/{id}"), &[]).await
    }

    /// Results for an election. Live when filtered; the unfiltered listing
    /// is too large to be worth caching, so it is live as well.
    pub async fn election_results(
        &self,
        election_id: i64,
        filter: &ResultFilter,
    ) -> Result<Vec<ElectionResult>> {
        self.fetch(
            &format!("/elections/{election_id}/results"),
            &filter.to_query(),
        )
        .await
    }

    /// Every historical result for one constituency. Cached for a week:
    /// past elections never change.
    pub async fn constituency_history(&self, constituency_id: i64) -> Result<Vec<ElectionResult>> {
        self.fetch_cached(
            &keys::history(constituency_id),
            &format!("/elections/constituency/{constituency_id}/history"),
            &[],
            ttl::ONE_WEEK,
        )
        .await
    }

    /// Winning results for one election year, for map coloring. Cached for
    /// a day.
    pub async fn winners_by_year(&self, year: i32) -> Result<Vec<ElectionResult>> {
        self.fetch_cached(
            &keys::winners(year),
            &format!("/elections/year/{year}/results"),
            &[],
            ttl::ONE_DAY,
        )
        .await
    }

    /// One party's results in one election. Cached for six hours under the
    /// party-results prefix so the whole family can be invalidated at once
    /// (e.g. after a party-name standardization on the backend).
    pub async fn party_results(
        &self,
        party: &str,
        election_id: i64,
    ) -> Result<Vec<ElectionResult>> {
        self.fetch_cached(
            &keys::party_results(party, election_id),
            &format!("/elections/{election_id}/results"),
            &[("party".to_string(), party.to_string())],
            ttl::SIX_HOURS,
        )
        .await
    }

    /// A party's aggregate performance in one election, computed from its
    /// cached per-constituency results.
    pub async fn party_performance(
        &self,
        party: &str,
        election_id: i64,
        year: i32,
    ) -> Result<PartyPerformance> {
        let results = self.party_results(party, election_id).await?;
        Ok(PartyPerformance::from_results(party, year, &results))
    }

    /// Per-constituency predictions matching arbitrary filters. Always
    /// live; the filter combinations would grow the key space unboundedly.
    pub async fn predictions(&self, filter: &PredictionFilter) -> Result<PredictionList> {
        self.fetch("/predictions/", &filter.to_query()).await
    }

    /// Statewide prediction rollup. Cached for an hour; predictions are
    /// regenerated far more often than results change.
    pub async fn predictions_summary(&self, year: i32) -> Result<PredictionsSummary> {
        self.fetch_cached(
            &keys::predictions_summary(year),
            "/predictions/summary",
            &[("year".to_string(), year.to_string())],
            ttl::ONE_HOUR,
        )
        .await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        let value = self.transport.get(path, query).await?;
        serde_json::from_value(value).map_err(|e| {
            ApiError::Decode {
                path: path.to_string(),
                source: e,
            }
            .into()
        })
    }

    /// Read-through fetch: a cache hit skips the network entirely; a miss
    /// fetches, stores with `ttl`, and returns the fresh value.
    async fn fetch_cached<T>(
        &self,
        key: &str,
        path: &str,
        query: &[(String, String)],
        ttl: Duration,
    ) -> Result<T>
    where
        T: DeserializeOwned + Serialize,
    {
        if let Some(hit) = self.cache.get::<T>(key) {
            log::debug!("cache hit for {key}");
            return Ok(hit);
        }

        let fresh: T = self.fetch(path, query).await?;
        self.cache.set_with_ttl(key, &fresh, ttl);
        Ok(fresh)
    }
}
