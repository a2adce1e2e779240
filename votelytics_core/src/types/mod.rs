//! Typed models for the Votelytics backend's REST resources
//!
//! Field names and nullability mirror the backend's JSON exactly so these
//! structs can be fed straight to `serde_json::from_value`. Every type also
//! derives `Serialize` because cached payloads round-trip through the
//! versioned cache's JSON entry format.

mod constituency;
mod election;
mod party;
mod prediction;

pub use constituency::{Constituency, ConstituencyList};
pub use election::{Election, ElectionResult};
pub use party::PartyPerformance;
pub use prediction::{
    AllianceDistribution, ConfidenceLevel, Prediction, PredictionList, PredictionsSummary,
};
