use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use crate::constants::TOP_STANDINGS_LIMIT;
use crate::data_ingestion::roster::{ScoreEntry, TeamSnapshot};
use crate::error::Result;
use crate::standings::{find_placement, format_currency, ordinal, rank};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingRow {
    pub name: String,
    pub amount: String,
}

/// Display-ready data for one personalized message. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsView {
    pub place: String,
    pub amount: String,
    pub top_standings: Vec<StandingRow>,
    pub total_amount: String,
}

/// Build the view for `name`. Scores are re-ranked first, which leaves an
/// already ranked roster unchanged.
#[instrument(skip(scores, total), fields(entries = scores.len()))]
pub fn build_view(scores: &[ScoreEntry], total: Decimal, name: &str) -> Result<StandingsView> {
    let ranked = rank(scores.to_vec());
    let placement = find_placement(&ranked, name)?;

    let top_standings = ranked
        .iter()
        .take(TOP_STANDINGS_LIMIT)
        .map(|entry| StandingRow {
            name: entry.name.clone(),
            amount: format_currency(entry.amount),
        })
        .collect();

    Ok(StandingsView {
        place: ordinal(placement.place),
        amount: format_currency(placement.amount),
        top_standings,
        total_amount: format_currency(total),
    })
}

impl TeamSnapshot {
    /// Personalized view straight from a fresh scrape.
    pub fn standings_view(&self, name: &str) -> Result<StandingsView> {
        build_view(&self.scores, self.total, name)
    }
}
