// The three externally triggered operations: get, store, notify.
// Each takes one typed event and returns one typed result; unknown event fields ride along in `extra`.
use chrono::{NaiveDateTime, SubsecRound, Utc};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, instrument};

use crate::config::Config;
use crate::data_ingestion::roster::{parse_roster, PageFetcher, ScoreEntry, TeamSnapshot};
use crate::db::{PersistedScoreRecord, ScoreStore};
use crate::error::{Result, StandingsError};
use crate::notify::{display_timestamp, standings_subject, EmailMessage, Notifier};
use crate::summary::{build_view, TemplateRenderer};

/// Input of `get_standings_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetStandingsInput {
    pub team_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Output of `get_standings_data`: one ranked snapshot plus the caller's pass-through fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsData {
    pub team_id: String,
    pub scores: Vec<ScoreEntry>,
    pub total: Decimal,
    pub timestamp: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StandingsData {
    /// Caller-supplied `scores`, `total` or `timestamp` win over the scraped
    /// values and are lifted out of `extra`, so every key is emitted once.
    pub fn from_snapshot(snapshot: TeamSnapshot, input: GetStandingsInput) -> Result<Self> {
        let mut extra = input.extra;
        let scores = take_field(&mut extra, "scores")?.unwrap_or(snapshot.scores);
        let total = take_field(&mut extra, "total")?.unwrap_or(snapshot.total);
        let timestamp = take_field(&mut extra, "timestamp")?.unwrap_or(snapshot.timestamp);

        Ok(Self {
            team_id: snapshot.team_id,
            scores,
            total,
            timestamp,
            name: input.name,
            extra,
        })
    }
}

fn take_field<T: DeserializeOwned>(extra: &mut Map<String, Value>, key: &str) -> Result<Option<T>> {
    extra
        .remove(key)
        .map(|value| {
            serde_json::from_value(value)
                .map_err(|e| StandingsError::InvalidEvent(format!("field `{key}`: {e}")))
        })
        .transpose()
}

/// Input (and echoed output) of `store_standings_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreStandingsInput {
    pub team_id: String,
    pub scores: Vec<ScoreEntry>,
    pub timestamp: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<StandingsData> for StoreStandingsInput {
    fn from(data: StandingsData) -> Self {
        Self {
            team_id: data.team_id,
            scores: data.scores,
            timestamp: data.timestamp,
            total: Some(data.total),
            name: data.name,
            extra: data.extra,
        }
    }
}

/// Input (and echoed output) of `notify_standings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotifyStandingsInput {
    pub scores: Vec<ScoreEntry>,
    pub total: Decimal,
    pub timestamp: NaiveDateTime,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fetch and parse the team page, rank the roster and stamp the current UTC time.
#[instrument(skip(config, input), fields(team_id = %input.team_id, on_close = true))]
pub async fn get_standings_data(config: &Config, input: GetStandingsInput) -> Result<StandingsData> {
    let html = PageFetcher::new(config).fetch(&input.team_id).await?;
    let roster = parse_roster(&html)?;
    // Microsecond precision, matching the TIMESTAMP column
    let scraped_at = Utc::now().naive_utc().trunc_subsecs(6);
    let snapshot = TeamSnapshot::new(input.team_id.clone(), roster.entries, roster.total, scraped_at);

    info!(
        entries = snapshot.scores.len(),
        total = %snapshot.total,
        roster_sum = %snapshot.roster_sum(),
        "Team standings scraped"
    );
    StandingsData::from_snapshot(snapshot, input)
}

/// Write one record per score entry and echo the input.
#[instrument(skip(store, input), fields(team_id = %input.team_id, on_close = true))]
pub async fn store_standings_data<S: ScoreStore>(store: &S, input: StoreStandingsInput) -> Result<StoreStandingsInput> {
    let records = PersistedScoreRecord::for_run(&input.scores, &input.team_id, input.timestamp);
    store.put_records(&records).await?;

    info!(
        run_id = %PersistedScoreRecord::run_id(&input.team_id, &input.timestamp),
        records = records.len(),
        "Standings snapshot stored"
    );
    Ok(input)
}

/// Render the personalized standings message for `input.name`, send it and echo the input.
#[instrument(skip(config, notifier, input), fields(name = %input.name, on_close = true))]
pub async fn notify_standings<N: Notifier>(
    config: &Config,
    notifier: &N,
    input: NotifyStandingsInput,
) -> Result<NotifyStandingsInput> {
    let view = build_view(&input.scores, input.total, &input.name)?;
    let html_body = TemplateRenderer::from_config(config)?.render(&view)?;

    let local_time = display_timestamp(&input.timestamp, config.timezone()?)?;
    let message = EmailMessage {
        sender: config.email_sender()?.to_string(),
        recipient: config.email_recipient()?.to_string(),
        subject: standings_subject(&config.event_label, &input.name, &local_time),
        html_body,
    };
    notifier.send(&message).await?;

    info!(place = %view.place, amount = %view.amount, "Standings notification sent");
    Ok(input)
}
