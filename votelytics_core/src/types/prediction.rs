use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How confident the prediction model is about a seat call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Safe,
    Likely,
    Lean,
    #[serde(rename = "Toss-up")]
    TossUp,
}

impl ConfidenceLevel {
    /// The backend's string form, also used for display
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::Likely => "Likely",
            Self::Lean => "Lean",
            Self::TossUp => "Toss-up",
        }
    }
}

/// Predicted 2026 outcome for one constituency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub id: i64,
    pub constituency_id: i64,
    pub constituency_name: String,
    pub ac_number: i32,
    pub district: String,
    pub region: String,
    pub predicted_winner_alliance: String,
    pub predicted_winner_party: String,
    pub confidence_level: ConfidenceLevel,
    pub win_probability: f64,
    pub predicted_vote_share: f64,
    pub predicted_margin_pct: f64,
    pub key_factors: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Paged prediction listing as returned by `/predictions/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionList {
    pub predictions: Vec<Prediction>,
    pub total: i64,
}

/// Seat counts for one alliance, split by confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllianceDistribution {
    pub total: u32,
    pub safe: u32,
    pub likely: u32,
    pub lean: u32,
}

/// Statewide prediction rollup from `/predictions/summary`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionsSummary {
    pub total_seats: u32,
    pub majority_mark: u32,
    pub predictions_complete: u32,
    pub predictions_pending: u32,
    pub generated_date: String,
    /// Keyed by alliance name; BTreeMap keeps render order stable
    pub seat_distribution: BTreeMap<String, AllianceDistribution>,
    pub toss_up: u32,
    pub winner: String,
    pub winning_margin: u32,
}
