use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::standings::ranker;

/// One participant's raised amount at scrape time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub amount: Decimal,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, amount: Decimal) -> Self {
        Self { name: name.into(), amount }
    }
}

/// A single point-in-time scrape of a team roster.
///
/// `scores` is always ranked (descending by amount, page order on ties).
/// `total` comes from the page's own aggregate and is not reconciled with the
/// sum of `scores`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSnapshot {
    pub team_id: String,
    pub scores: Vec<ScoreEntry>,
    pub total: Decimal,
    pub timestamp: NaiveDateTime,
}

impl TeamSnapshot {
    pub fn new(team_id: impl Into<String>, entries: Vec<ScoreEntry>, total: Decimal, timestamp: NaiveDateTime) -> Self {
        Self {
            team_id: team_id.into(),
            scores: ranker::rank(entries),
            total,
            timestamp,
        }
    }

    /// Sum of the roster entries, for callers that want to inspect the gap to `total`.
    pub fn roster_sum(&self) -> Decimal {
        self.scores.iter().map(|s| s.amount).sum()
    }
}

/// ISO text form used in run ids and serialized events, e.g. `2021-01-14T13:57:00`.
pub fn iso_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use rust_decimal::dec;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 1, 14).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn snapshot_ranks_entries_on_construction() {
        let snapshot = TeamSnapshot::new(
            "1234",
            vec![
                ScoreEntry::new("First Person", dec!(127.50)),
                ScoreEntry::new("Second Person", dec!(56.25)),
                ScoreEntry::new("Third Person", dec!(5634.05)),
            ],
            dec!(5817.80),
            at(13, 57, 0),
        );
        let names: Vec<_> = snapshot.scores.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Third Person", "First Person", "Second Person"]);
        assert_eq!(snapshot.roster_sum(), dec!(5817.80));
    }

    #[test]
    fn total_is_kept_as_scraped() {
        let snapshot = TeamSnapshot::new("1", vec![ScoreEntry::new("A", dec!(10.00))], dec!(25.00), at(0, 0, 0));
        assert_eq!(snapshot.total, dec!(25.00));
        assert_ne!(snapshot.total, snapshot.roster_sum());
    }

    #[test]
    fn iso_timestamp_omits_zero_fraction() {
        assert_eq!(iso_timestamp(&at(13, 57, 0)), "2021-01-14T13:57:00");
        let with_millis = at(15, 30, 1).with_nanosecond(250_000_000).unwrap();
        assert_eq!(iso_timestamp(&with_millis), "2021-01-14T15:30:01.250");
    }
}
