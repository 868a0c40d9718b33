use reqwest::Client;
use serde::Serialize;
use tracing::{info, instrument};

use super::{EmailMessage, Notifier};
use crate::config::Config;
use crate::error::{Result, StandingsError};

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

/// Sends email through an HTTP mail API (`EMAIL_API_URL`, optional bearer `EMAIL_API_KEY`).
#[derive(Debug, Clone)]
pub struct HttpMailNotifier {
    http_client: Client,
    api_url: String,
    api_key: Option<String>,
}

impl HttpMailNotifier {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            http_client: config.http_client.clone(),
            api_url: config.email_api_url()?.to_string(),
            api_key: config.email_api_key.clone(),
        })
    }
}

impl Notifier for HttpMailNotifier {
    #[instrument(skip(self, message), fields(recipient = %message.recipient, on_close = true))]
    async fn send(&self, message: &EmailMessage) -> Result<()> {
        let body = SendEmailRequest {
            from: &message.sender,
            to: [&message.recipient],
            subject: &message.subject,
            html: &message.html_body,
        };

        let mut request = self.http_client.post(&self.api_url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StandingsError::Notify(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(StandingsError::Notify(format!("mail API returned {}: {}", status, detail)));
        }

        info!(subject = %message.subject, "Standings email sent");
        Ok(())
    }
}
