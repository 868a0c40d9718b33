use rust_decimal::Decimal;
use tracing::instrument;

use crate::data_ingestion::roster::ScoreEntry;
use crate::error::{Result, StandingsError};

/// A participant's 1-based position within a ranked roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub place: usize,
    pub amount: Decimal,
}

/// Sort descending by amount. The sort is stable, so equal amounts keep page order.
pub fn rank(mut entries: Vec<ScoreEntry>) -> Vec<ScoreEntry> {
    entries.sort_by(|a, b| b.amount.cmp(&a.amount));
    entries
}

/// Exact, case-sensitive name lookup in an already ranked roster.
#[instrument(skip(ranked), fields(entries = ranked.len()))]
pub fn find_placement(ranked: &[ScoreEntry], name: &str) -> Result<Placement> {
    ranked
        .iter()
        .position(|entry| entry.name == name)
        .map(|i| Placement {
            place: i + 1,
            amount: ranked[i].amount,
        })
        .ok_or_else(|| StandingsError::NotFound(name.to_string()))
}
