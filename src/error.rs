use thiserror::Error;

/// Every failure an operation can surface. None of these are retried internally.
#[derive(Debug, Error)]
pub enum StandingsError {
    #[error("received unsuccessful response code {status} from {url}")]
    Fetch { url: String, status: u16 },

    #[error("request to team page failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("team page is missing expected element `{0}`")]
    MissingElement(&'static str),

    #[error("malformed amount text {0:?}")]
    MalformedAmount(String),

    #[error("could not find an entry for {0}")]
    NotFound(String),

    #[error("invalid event: {0}")]
    InvalidEvent(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("template render failed: {0}")]
    Template(#[from] minijinja::Error),

    #[error("score store write failed: {0}")]
    Store(String),

    #[error("notification delivery failed: {0}")]
    Notify(String),
}

impl StandingsError {
    /// True for the parse family (missing element or malformed amount).
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::MissingElement(_) | Self::MalformedAmount(_))
    }
}

impl From<sqlx::Error> for StandingsError {
    fn from(e: sqlx::Error) -> Self {
        Self::Store(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StandingsError>;
