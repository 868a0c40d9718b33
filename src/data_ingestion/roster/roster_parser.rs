use std::str::FromStr;
use rust_decimal::Decimal;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

use super::score_entry::ScoreEntry;
use crate::constants::{
    NAME_CELL_SELECTOR, RAISED_CELL_SELECTOR, TEAM_ROW_SELECTOR, TEAM_TABLE_SELECTOR,
    TEAM_TOTAL_AMOUNT_SELECTOR, TEAM_TOTAL_SELECTOR,
};
use crate::error::{Result, StandingsError};

/// Roster entries in page order plus the page's displayed team total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRoster {
    pub entries: Vec<ScoreEntry>,
    pub total: Decimal,
}

#[instrument(skip(html), fields(bytes = html.len()))]
pub fn parse_roster(html: &str) -> Result<ParsedRoster> {
    let document = Html::parse_document(html);

    let table = document
        .select(&selector(TEAM_TABLE_SELECTOR)?)
        .next()
        .ok_or(StandingsError::MissingElement(TEAM_TABLE_SELECTOR))?;

    let name_selector = selector(NAME_CELL_SELECTOR)?;
    let raised_selector = selector(RAISED_CELL_SELECTOR)?;
    let entries = table
        .select(&selector(TEAM_ROW_SELECTOR)?)
        .map(|row| {
            let name = cell_text(row, &name_selector, NAME_CELL_SELECTOR)?;
            let raised = cell_text(row, &raised_selector, RAISED_CELL_SELECTOR)?;
            Ok(ScoreEntry::new(name, parse_amount(&raised)?))
        })
        .collect::<Result<Vec<_>>>()?;

    let total_block = document
        .select(&selector(TEAM_TOTAL_SELECTOR)?)
        .next()
        .ok_or(StandingsError::MissingElement(TEAM_TOTAL_SELECTOR))?;
    let total_text = cell_text(total_block, &selector(TEAM_TOTAL_AMOUNT_SELECTOR)?, TEAM_TOTAL_AMOUNT_SELECTOR)?;
    let total = parse_amount(&total_text)?;

    debug!(entries = entries.len(), %total, "Parsed team roster");
    Ok(ParsedRoster { entries, total })
}

/// Parse display currency such as `$5,634.05`.
///
/// Requires the leading `$`, comma grouping every three digits and exactly two
/// decimal places. Surrounding whitespace is ignored.
pub fn parse_amount(text: &str) -> Result<Decimal> {
    let malformed = || StandingsError::MalformedAmount(text.to_string());

    let body = text.trim().strip_prefix('$').ok_or_else(malformed)?;
    let (whole, cents) = body.split_once('.').ok_or_else(malformed)?;
    if cents.len() != 2 || !all_digits(cents) {
        return Err(malformed());
    }

    let mut groups = whole.split(',');
    let leading = groups.next().unwrap_or_default();
    if leading.is_empty() || leading.len() > 3 || !all_digits(leading) {
        return Err(malformed());
    }
    let mut digits = leading.to_string();
    for group in groups {
        if group.len() != 3 || !all_digits(group) {
            return Err(malformed());
        }
        digits.push_str(group);
    }
    // Ungrouped four-plus digit amounts are missing their separators
    if !whole.contains(',') && digits.len() > 3 {
        return Err(malformed());
    }

    Decimal::from_str(&format!("{}.{}", digits, cents)).map_err(|_| malformed())
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| StandingsError::Configuration(format!("bad selector {css:?}: {e:?}")))
}

// Raw text; names are matched exactly and `parse_amount` trims on its own
fn cell_text(scope: ElementRef<'_>, sel: &Selector, css: &'static str) -> Result<String> {
    let cell = scope.select(sel).next().ok_or(StandingsError::MissingElement(css))?;
    Ok(cell.text().collect())
}
