use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::config::Config;
use crate::error::{Result, StandingsError};

/// Retrieves the roster page for a team. One GET per call, no retries.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    http_client: Client,
    base_url: String,
}

impl PageFetcher {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: config.http_client.clone(),
            base_url: config.team_page_base_url.clone(),
        }
    }

    /// `<base>/<team_id>`, with the team id escaped as a single path segment.
    pub fn team_url(&self, team_id: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            StandingsError::Configuration(format!("invalid team page base url {:?}: {}", self.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| StandingsError::Configuration(format!("team page base url {:?} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .push(team_id);
        Ok(url)
    }

    #[instrument(skip(self), fields(on_close = true))]
    pub async fn fetch(&self, team_id: &str) -> Result<String> {
        let url = self.team_url(team_id)?;
        info!(url = %url, "Fetching team roster page");

        let response = self.http_client.get(url.clone()).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            warn!(url = %url, status = status.as_u16(), "Team page returned unsuccessful status");
            return Err(StandingsError::Fetch {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "Team roster page received");
        Ok(body)
    }
}
