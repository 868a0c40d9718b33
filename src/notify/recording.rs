use std::sync::Mutex;

use super::{EmailMessage, Notifier};
use crate::error::{Result, StandingsError};

/// Keeps sent messages in memory instead of delivering them.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<EmailMessage>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    async fn send(&self, message: &EmailMessage) -> Result<()> {
        self.sent
            .lock()
            .map_err(|_| StandingsError::Notify("recording notifier lock poisoned".to_string()))?
            .push(message.clone());
        Ok(())
    }
}
