//! Client configuration
//!
//! Plain serde structs with defaults; the CLI layers a TOML file and
//! environment variables on top of these via figment.

use crate::api::VotelyticsClient;
use crate::api::transport::HttpTransport;
use crate::cache::{CacheBackend, CacheFactory, VersionedCache};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Schema version stamped onto every cache record.
///
/// Bump this whenever the shape or semantics of cached payloads changes
/// incompatibly; every record written under an older version is then
/// invalidated lazily on its next read. Version 2 follows the
/// ADMK → AIADMK party-name standardization.
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root of the backend API, e.g. `http://localhost:8000/api`
    pub api_base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
    /// Cache schema version; overridable so tests can exercise version
    /// bumps deterministically
    pub schema_version: u32,
    #[serde(default)]
    pub cache: CacheSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    pub backend: CacheBackend,
    /// Overrides the platform cache directory for the file backend
    pub dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".to_string(),
            timeout_seconds: 30,
            schema_version: CURRENT_SCHEMA_VERSION,
            cache: CacheSettings::default(),
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            dir: None,
        }
    }
}

impl ClientConfig {
    /// Configuration for tests: in-memory cache, local backend.
    pub fn test() -> Self {
        Self {
            cache: CacheSettings {
                backend: CacheBackend::Memory,
                dir: None,
            },
            ..Self::default()
        }
    }
}

impl VotelyticsClient {
    /// Assemble a client from configuration: HTTP transport plus the
    /// configured cache backend.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(
            config.api_base_url.clone(),
            Duration::from_secs(config.timeout_seconds),
        )?;
        let store = CacheFactory::create(config.cache.backend, config.cache.dir.clone())?;
        let cache = VersionedCache::new(store, config.schema_version);

        Ok(Self::new(Arc::new(transport), cache))
    }
}
