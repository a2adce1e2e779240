use crate::types::ElectionResult;
use serde::{Deserialize, Serialize};

/// A party's aggregate performance in one election, computed client-side
/// from its per-constituency results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyPerformance {
    pub party: String,
    pub year: i32,
    pub seats_won: u32,
    pub seats_contested: u32,
    pub total_votes: i64,
    pub average_vote_share: f64,
    pub win_percentage: f64,
    pub average_margin: f64,
}

impl PartyPerformance {
    /// Aggregate a party's result rows into a performance summary.
    ///
    /// `results` may contain rows for other parties; only rows matching
    /// `party` are counted.
    pub fn from_results(party: &str, year: i32, results: &[ElectionResult]) -> Self {
        let rows: Vec<&ElectionResult> =
            results.iter().filter(|r| r.party == party).collect();

        let seats_contested = rows.len() as u32;
        let seats_won = rows.iter().filter(|r| r.won()).count() as u32;
        let total_votes: i64 = rows.iter().map(|r| r.total_votes).sum();

        let shares: Vec<f64> = rows.iter().filter_map(|r| r.vote_share_pct).collect();
        let average_vote_share = mean(&shares);

        let margins: Vec<f64> = rows
            .iter()
            .filter(|r| r.won())
            .filter_map(|r| r.margin.map(|m| m as f64))
            .collect();
        let average_margin = mean(&margins);

        let win_percentage = if seats_contested == 0 {
            0.0
        } else {
            f64::from(seats_won) / f64::from(seats_contested) * 100.0
        };

        Self {
            party: party.to_string(),
            year,
            seats_won,
            seats_contested,
            total_votes,
            average_vote_share,
            win_percentage,
            average_margin,
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(party: &str, votes: i64, share: f64, won: bool, margin: Option<i64>) -> ElectionResult {
        ElectionResult {
            id: 0,
            election_id: 3,
            constituency_id: 0,
            candidate_id: None,
            year: 2021,
            ac_number: 0,
            ac_name: "Test".to_string(),
            total_electors: None,
            candidate_name: "Candidate".to_string(),
            sex: None,
            age: None,
            category: None,
            party: party.to_string(),
            symbol: None,
            alliance: None,
            general_votes: votes,
            postal_votes: 0,
            total_votes: votes,
            vote_share_pct: Some(share),
            rank: None,
            is_winner: i32::from(won),
            margin,
            margin_pct: None,
            extra_data: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn aggregates_party_rows() {
        let results = vec![
            row("DMK", 80_000, 60.0, true, Some(30_000)),
            row("DMK", 70_000, 50.0, true, Some(10_000)),
            row("DMK", 40_000, 40.0, false, None),
            row("AIADMK", 90_000, 55.0, true, Some(5_000)),
        ];

        let perf = PartyPerformance::from_results("DMK", 2021, &results);
        assert_eq!(perf.seats_contested, 3);
        assert_eq!(perf.seats_won, 2);
        assert_eq!(perf.total_votes, 190_000);
        assert!((perf.average_vote_share - 50.0).abs() < 1e-9);
        assert!((perf.win_percentage - 66.666).abs() < 0.01);
        assert!((perf.average_margin - 20_000.0).abs() < 1e-9);
    }

    #[test]
    fn empty_results_produce_zeroes() {
        let perf = PartyPerformance::from_results("PMK", 2016, &[]);
        assert_eq!(perf.seats_contested, 0);
        assert_eq!(perf.win_percentage, 0.0);
        assert_eq!(perf.average_vote_share, 0.0);
    }
}
