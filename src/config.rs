use dotenvy::dotenv;
use std::env;
use reqwest::Client;

use crate::constants::{DEFAULT_EVENT_LABEL, DEFAULT_TEAM_PAGE_BASE_URL};
use crate::error::{Result, StandingsError};

/// Environment-backed settings. Required options stay optional here and are
/// checked by their accessors, so a missing variable fails only the operation that needs it.
#[derive(Debug, Clone)]
pub struct Config {
    pub http_client: Client,
    pub team_page_base_url: String,
    pub event_label: String,
    pub score_table_name: Option<String>,
    pub database_url: Option<String>,
    pub template_path: Option<String>,
    pub email_sender: Option<String>,
    pub email_recipient: Option<String>,
    pub email_api_url: Option<String>,
    pub email_api_key: Option<String>,
    pub timezone: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            http_client: Client::new(),
            team_page_base_url: DEFAULT_TEAM_PAGE_BASE_URL.to_string(),
            event_label: DEFAULT_EVENT_LABEL.to_string(),
            score_table_name: None,
            database_url: None,
            template_path: None,
            email_sender: None,
            email_recipient: None,
            email_api_url: None,
            email_api_key: None,
            timezone: None,
        }
    }
}

impl Config {
    /// Load `.env` (if any) and read the process environment.
    pub fn load() -> Self {
        dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Self {
        let defaults = Config::default();
        Config {
            team_page_base_url: optional("TEAM_PAGE_BASE_URL").unwrap_or(defaults.team_page_base_url),
            event_label: optional("EVENT_LABEL").unwrap_or(defaults.event_label),
            score_table_name: optional("SCORE_TABLE_NAME"),
            database_url: optional("DATABASE_URL"),
            template_path: optional("TEMPLATE_PATH"),
            email_sender: optional("EMAIL_SENDER"),
            email_recipient: optional("EMAIL_RECIPIENT"),
            email_api_url: optional("EMAIL_API_URL"),
            email_api_key: optional("EMAIL_API_KEY"),
            timezone: optional("TIMEZONE"),
            ..defaults
        }
    }

    pub fn score_table_name(&self) -> Result<&str> {
        require(&self.score_table_name, "SCORE_TABLE_NAME")
    }

    pub fn database_url(&self) -> Result<&str> {
        require(&self.database_url, "DATABASE_URL")
    }

    pub fn template_path(&self) -> Result<&str> {
        require(&self.template_path, "TEMPLATE_PATH")
    }

    pub fn email_sender(&self) -> Result<&str> {
        require(&self.email_sender, "EMAIL_SENDER")
    }

    pub fn email_recipient(&self) -> Result<&str> {
        require(&self.email_recipient, "EMAIL_RECIPIENT")
    }

    pub fn email_api_url(&self) -> Result<&str> {
        require(&self.email_api_url, "EMAIL_API_URL")
    }

    pub fn timezone(&self) -> Result<&str> {
        require(&self.timezone, "TIMEZONE")
    }
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn require<'a>(value: &'a Option<String>, key: &str) -> Result<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| StandingsError::Configuration(format!("missing {key}")))
}
