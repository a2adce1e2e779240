//! Error types for the Votelytics core library
//!
//! Errors are categorized by where they originate: the HTTP API, the cache's
//! backing store, or configuration. Store errors are internal to the cache
//! layer; `VersionedCache` swallows them and degrades to a miss, so callers
//! of the API access layer only ever see `Api` and `Config` errors.

use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Votelytics core library
#[derive(Error, Debug)]
pub enum Error {
    /// Errors talking to the Votelytics backend
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Errors from the cache's backing store
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised by the HTTP transport and response decoding
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a usable response
    #[error("request to {path} failed: {source}")]
    Request {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status
    #[error("backend returned {status} for {path}: {detail}")]
    Status {
        status: u16,
        path: String,
        detail: String,
    },

    /// The response body did not match the expected shape
    #[error("failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from a cache backing store
///
/// These never propagate past the cache: every store failure is logged and
/// reported to the caller as a plain miss.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize store contents: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Configuration validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
