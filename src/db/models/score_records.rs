use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::data_ingestion::roster::ScoreEntry;
use crate::data_ingestion::roster::score_entry::iso_timestamp;

/// One row per (participant, run). Written once per run, never mutated by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PersistedScoreRecord {
    pub run_id: String,
    pub name: String,
    pub amount: Decimal,
    pub timestamp: NaiveDateTime,
    pub team_id: String,
}

impl PersistedScoreRecord {
    /// `<team_id>_<iso timestamp>`, e.g. `1234_2021-01-14T13:57:00`.
    pub fn run_id(team_id: &str, timestamp: &NaiveDateTime) -> String {
        format!("{}_{}", team_id, iso_timestamp(timestamp))
    }

    pub fn from_entry(entry: &ScoreEntry, team_id: &str, timestamp: NaiveDateTime) -> Self {
        Self {
            run_id: Self::run_id(team_id, &timestamp),
            name: entry.name.clone(),
            amount: entry.amount,
            timestamp,
            team_id: team_id.to_string(),
        }
    }

    pub fn for_run(scores: &[ScoreEntry], team_id: &str, timestamp: NaiveDateTime) -> Vec<Self> {
        scores
            .iter()
            .map(|entry| Self::from_entry(entry, team_id, timestamp))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::dec;

    #[test]
    fn records_share_the_run_id() {
        let ts = NaiveDate::from_ymd_opt(2021, 1, 14).unwrap().and_hms_opt(13, 57, 0).unwrap();
        let records = PersistedScoreRecord::for_run(
            &[
                ScoreEntry::new("First Person", dec!(127.50)),
                ScoreEntry::new("Second Person", dec!(56.25)),
            ],
            "1234",
            ts,
        );
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.run_id == "1234_2021-01-14T13:57:00"));
        assert!(records.iter().all(|r| r.team_id == "1234" && r.timestamp == ts));
        assert_eq!(records[0].amount.to_string(), "127.50");
        assert_eq!(records[1].name, "Second Person");
    }
}
