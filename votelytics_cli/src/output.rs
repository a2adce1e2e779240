//! Output formatting for CLI commands

use anyhow::Result;
use colored::*;
use serde::Serialize;
use votelytics_core::types::{
    Constituency, ConstituencyList, Election, ElectionResult, PartyPerformance,
    PredictionList, PredictionsSummary,
};

/// Human-readable text formatter
pub struct TextFormatter {
    use_color: bool,
}

impl TextFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn colorize(&self, text: &str, color: fn(&str) -> ColoredString) -> String {
        if self.use_color {
            color(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn constituency_list(&self, list: &ConstituencyList) -> String {
        let mut output = String::new();
        output.push_str(&format!("{} constituencies\n\n", list.total));

        for c in &list.constituencies {
            let name = self.colorize(&c.name, |s| s.cyan());
            let district = c.district.as_deref().unwrap_or("-");
            let region = c.region.as_deref().unwrap_or("-");
            output.push_str(&format!(
                "{:>4}  {:<32} {:<18} {}\n",
                c.ac_number, name, district, region
            ));
        }

        output
    }

    pub fn constituency(&self, c: &Constituency) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} ({})\n",
            self.colorize(&c.name, |s| s.cyan().bold()),
            c.code
        ));
        output.push_str(&format!("AC number: {}\n", c.ac_number));
        if let Some(district) = &c.district {
            output.push_str(&format!("District: {district}\n"));
        }
        if let Some(region) = &c.region {
            output.push_str(&format!("Region: {region}\n"));
        }
        if let Some(population) = c.population {
            output.push_str(&format!("Population: {population}\n"));
        }
        if let Some(pct) = c.urban_population_pct {
            output.push_str(&format!("Urban population: {pct:.1}%\n"));
        }
        if let Some(rate) = c.literacy_rate {
            output.push_str(&format!("Literacy rate: {rate:.1}%\n"));
        }
        output
    }

    pub fn elections(&self, elections: &[Election]) -> String {
        let mut output = String::new();
        for e in elections {
            let year = self.colorize(&e.year.to_string(), |s| s.yellow());
            output.push_str(&format!("{:>3}  {}  {}\n", e.id, year, e.name));
        }
        output
    }

    pub fn results(&self, results: &[ElectionResult]) -> String {
        let mut output = String::new();
        for r in results {
            let marker = if r.won() {
                self.colorize("W", |s| s.green().bold())
            } else {
                " ".to_string()
            };
            let share = r
                .vote_share_pct
                .map(|p| format!("{p:5.1}%"))
                .unwrap_or_else(|| "    - ".to_string());
            output.push_str(&format!(
                "{marker} {:>4}  {:<28} {:<24} {:<10} {:>9} {share}\n",
                r.ac_number,
                r.ac_name,
                r.candidate_name,
                self.colorize(&r.party, |s| s.yellow()),
                r.total_votes,
            ));
        }
        output
    }

    pub fn party_performance(&self, perf: &PartyPerformance) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} in {}\n",
            self.colorize(&perf.party, |s| s.yellow().bold()),
            perf.year
        ));
        output.push_str(&format!(
            "Seats: {} won / {} contested ({:.1}%)\n",
            perf.seats_won, perf.seats_contested, perf.win_percentage
        ));
        output.push_str(&format!("Total votes: {}\n", perf.total_votes));
        output.push_str(&format!(
            "Average vote share: {:.1}%\n",
            perf.average_vote_share
        ));
        output.push_str(&format!("Average winning margin: {:.0}\n", perf.average_margin));
        output
    }

    pub fn predictions(&self, list: &PredictionList) -> String {
        let mut output = String::new();
        output.push_str(&format!("{} predictions\n\n", list.total));

        for p in &list.predictions {
            let party = self.colorize(&p.predicted_winner_party, |s| s.yellow());
            output.push_str(&format!(
                "{:>4}  {:<28} {:<10} {:<6} {:<8} {:>5.0}%\n",
                p.ac_number,
                p.constituency_name,
                party,
                p.predicted_winner_alliance,
                p.confidence_level.as_str(),
                p.win_probability * 100.0,
            ));
        }

        output
    }

    pub fn predictions_summary(&self, summary: &PredictionsSummary) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Predicted winner: {} (margin {})\n",
            self.colorize(&summary.winner, |s| s.green().bold()),
            summary.winning_margin
        ));
        output.push_str(&format!(
            "Majority mark: {} of {}\n",
            summary.majority_mark, summary.total_seats
        ));
        output.push_str(&format!("Toss-up seats: {}\n\n", summary.toss_up));

        for (alliance, dist) in &summary.seat_distribution {
            output.push_str(&format!(
                "{:<8} {:>3} total ({} safe, {} likely, {} lean)\n",
                alliance, dist.total, dist.safe, dist.likely, dist.lean
            ));
        }
        output.push_str(&format!("\nGenerated: {}\n", summary.generated_date));
        output
    }

    pub fn cache_stats(&self, size_bytes: u64) -> String {
        format!("Approximate cache size: {}\n", format_bytes(size_bytes))
    }
}

/// Serialize any response type as pretty JSON
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Human-readable byte count
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut size = bytes as f64;
    let mut unit = 0;

    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_bytes_picks_sensible_units() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KiB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MiB");
    }

    #[test]
    fn predictions_table_shows_confidence_and_party() {
        use votelytics_core::types::ConfidenceLevel;
        use votelytics_test_utils::builders::sample_prediction;

        let formatter = TextFormatter::new(false);
        let list = PredictionList {
            predictions: vec![sample_prediction(
                14,
                14,
                "Chepauk-Thiruvallikeni",
                ConfidenceLevel::TossUp,
            )],
            total: 1,
        };

        let table = formatter.predictions(&list);
        assert!(table.starts_with("1 predictions"));
        assert!(table.contains("Toss-up"));
        assert!(table.contains("DMK"));
        assert!(table.contains("84%"));
    }

    #[test]
    fn results_table_marks_winners() {
        use votelytics_test_utils::TestDataBuilder;

        let formatter = TextFormatter::new(false);
        let results = vec![
            TestDataBuilder::new().with_party("DMK").build(),
            TestDataBuilder::new().with_party("AIADMK").as_loser().build(),
        ];

        let table = formatter.results(&results);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].starts_with('W'));
        assert!(lines[1].starts_with(' '));
        assert!(lines[1].contains("AIADMK"));
    }
}
