//! Core library for the Votelytics election data client
//!
//! Votelytics visualizes Tamil Nadu assembly election results (2011, 2016,
//! 2021) and generated 2026 predictions. This crate is the client side of
//! that system: typed models for the backend's REST resources, an API access
//! layer that fetches them, and a versioned TTL cache that sits between the
//! two so repeat reads stay off the network.
//!
//! The cache is a performance optimization, never a correctness dependency.
//! Every cache failure degrades to a miss, so callers only ever handle
//! network errors. See [`cache::VersionedCache`] for the validity contract
//! and [`api::VotelyticsClient`] for the read-through operations.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use api::VotelyticsClient;
pub use api::transport::{HttpTransport, Transport};
pub use cache::VersionedCache;
pub use config::ClientConfig;
pub use error::{Error, Result};
