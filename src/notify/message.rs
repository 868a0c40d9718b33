use chrono::{NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::Serialize;

use crate::constants::DISPLAY_TIME_FORMAT;
use crate::error::{Result, StandingsError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub html_body: String,
}

/// Convert a naive UTC timestamp into `timezone` and format it as `YYYY-MM-DD hh:mm AM/PM`.
pub fn display_timestamp(timestamp: &NaiveDateTime, timezone: &str) -> Result<String> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| StandingsError::Configuration(format!("unknown TIMEZONE {timezone:?}")))?;
    let local = tz.from_utc_datetime(timestamp);
    Ok(local.format(DISPLAY_TIME_FORMAT).to_string())
}

/// `<event label> Fundraising Update For <name> - <local time>`
pub fn standings_subject(event_label: &str, name: &str, local_time: &str) -> String {
    format!("{event_label} Fundraising Update For {name} - {local_time}")
}
