//! Test data builders for election scenarios

use serde_json::{Value, json};
use votelytics_core::types::{ConfidenceLevel, Constituency, ElectionResult, Prediction};

/// Builder for per-constituency election results
///
/// Defaults describe a plausible 2021 row; override what the test cares
/// about.
pub struct TestDataBuilder {
    year: i32,
    election_id: i64,
    constituency_id: i64,
    ac_number: i32,
    ac_name: String,
    party: String,
    candidate_name: String,
    total_votes: i64,
    vote_share_pct: f64,
    is_winner: bool,
    margin: Option<i64>,
}

impl TestDataBuilder {
    pub fn new() -> Self {
        Self {
            year: 2021,
            election_id: 3,
            constituency_id: 14,
            ac_number: 14,
            ac_name: "Chepauk-Thiruvallikeni".to_string(),
            party: "DMK".to_string(),
            candidate_name: "Test Candidate".to_string(),
            total_votes: 87_200,
            vote_share_pct: 61.4,
            is_winner: true,
            margin: Some(41_000),
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_election_id(mut self, id: i64) -> Self {
        self.election_id = id;
        self
    }

    pub fn with_constituency(mut self, id: i64, ac_number: i32, name: &str) -> Self {
        self.constituency_id = id;
        self.ac_number = ac_number;
        self.ac_name = name.to_string();
        self
    }

    pub fn with_party(mut self, party: &str) -> Self {
        self.party = party.to_string();
        self
    }

    pub fn with_votes(mut self, total_votes: i64, vote_share_pct: f64) -> Self {
        self.total_votes = total_votes;
        self.vote_share_pct = vote_share_pct;
        self
    }

    pub fn as_loser(mut self) -> Self {
        self.is_winner = false;
        self.margin = None;
        self
    }

    pub fn build(self) -> ElectionResult {
        ElectionResult {
            id: self.constituency_id * 100 + i64::from(self.ac_number),
            election_id: self.election_id,
            constituency_id: self.constituency_id,
            candidate_id: None,
            year: self.year,
            ac_number: self.ac_number,
            ac_name: self.ac_name,
            total_electors: Some(210_000),
            candidate_name: self.candidate_name,
            sex: None,
            age: None,
            category: None,
            party: self.party,
            symbol: None,
            alliance: None,
            general_votes: self.total_votes,
            postal_votes: 0,
            total_votes: self.total_votes,
            vote_share_pct: Some(self.vote_share_pct),
            rank: Some(if self.is_winner { 1 } else { 2 }),
            is_winner: i32::from(self.is_winner),
            margin: self.margin,
            margin_pct: None,
            extra_data: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// The built row as the JSON the backend would send
    pub fn build_json(self) -> Value {
        serde_json::to_value(self.build()).unwrap()
    }
}

impl Default for TestDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A constituency with the given identity and sensible defaults elsewhere
pub fn sample_constituency(id: i64, ac_number: i32, name: &str, district: &str) -> Constituency {
    Constituency {
        id,
        ac_number,
        name: name.to_string(),
        code: format!("TN-{ac_number:03}"),
        district: Some(district.to_string()),
        region: Some("North".to_string()),
        population: Some(245_000),
        urban_population_pct: Some(72.5),
        literacy_rate: Some(84.1),
        extra_data: None,
        geojson: None,
        created_at: None,
        updated_at: None,
    }
}

/// A `/constituencies/` response body with `count` generated seats
pub fn constituency_list_json(count: usize) -> Value {
    let constituencies: Vec<Value> = (0..count)
        .map(|i| {
            let id = i as i64 + 1;
            serde_json::to_value(sample_constituency(
                id,
                id as i32,
                &format!("Constituency {id}"),
                "Chennai",
            ))
            .unwrap()
        })
        .collect();

    json!({
        "constituencies": constituencies,
        "total": count
    })
}

/// A 2026 seat prediction with the given identity and confidence
pub fn sample_prediction(
    constituency_id: i64,
    ac_number: i32,
    name: &str,
    confidence: ConfidenceLevel,
) -> Prediction {
    Prediction {
        id: constituency_id,
        constituency_id,
        constituency_name: name.to_string(),
        ac_number,
        district: "Chennai".to_string(),
        region: "North".to_string(),
        predicted_winner_alliance: "SPA".to_string(),
        predicted_winner_party: "DMK".to_string(),
        confidence_level: confidence,
        win_probability: 0.84,
        predicted_vote_share: 52.3,
        predicted_margin_pct: 11.8,
        key_factors: vec!["incumbency".to_string()],
        created_at: None,
    }
}

/// A `/predictions/` response body with `count` generated seat calls
pub fn predictions_list_json(count: usize) -> Value {
    let predictions: Vec<Value> = (0..count)
        .map(|i| {
            let id = i as i64 + 1;
            serde_json::to_value(sample_prediction(
                id,
                id as i32,
                &format!("Constituency {id}"),
                ConfidenceLevel::Likely,
            ))
            .unwrap()
        })
        .collect();

    json!({
        "predictions": predictions,
        "total": count
    })
}

/// An `/elections/` response body covering the three result years
pub fn elections_json() -> Value {
    let election = |id: i64, year: i32| {
        json!({
            "id": id,
            "year": year,
            "name": format!("Tamil Nadu Assembly Election {year}"),
            "election_type": "assembly",
            "state": "Tamil Nadu",
            "election_date": format!("{year}-04-06"),
            "total_seats": 234,
            "total_voters": 62_000_000i64,
            "voter_turnout_pct": 72.8
        })
    };
    json!([election(1, 2011), election(2, 2016), election(3, 2021)])
}
