use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A state assembly election (2011, 2016, 2021 or the 2026 prediction round)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Election {
    pub id: i64,
    pub year: i32,
    pub name: String,
    pub election_type: String,
    pub state: String,
    pub election_date: Option<String>,
    pub total_seats: Option<i32>,
    pub total_voters: Option<i64>,
    pub voter_turnout_pct: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One candidate's result in one constituency of one election
///
/// The backend denormalizes the election year and constituency identity into
/// every row so result listings are self-describing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectionResult {
    pub id: i64,
    pub election_id: i64,
    pub constituency_id: i64,
    pub candidate_id: Option<i64>,

    pub year: i32,
    pub ac_number: i32,
    pub ac_name: String,
    pub total_electors: Option<i64>,

    pub candidate_name: String,
    pub sex: Option<String>,
    pub age: Option<i32>,
    pub category: Option<String>,

    pub party: String,
    pub symbol: Option<String>,
    pub alliance: Option<String>,

    pub general_votes: i64,
    pub postal_votes: i64,
    pub total_votes: i64,
    pub vote_share_pct: Option<f64>,

    pub rank: Option<i32>,
    /// 1 when this candidate won the seat, 0 otherwise
    pub is_winner: i32,
    pub margin: Option<i64>,
    pub margin_pct: Option<f64>,

    #[serde(default)]
    pub extra_data: Option<Value>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ElectionResult {
    pub fn won(&self) -> bool {
        self.is_winner == 1
    }
}
