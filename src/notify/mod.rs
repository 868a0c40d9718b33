pub mod message;
pub mod http_mail;
pub mod recording;

pub use message::{display_timestamp, standings_subject, EmailMessage};
pub use http_mail::HttpMailNotifier;
pub use recording::RecordingNotifier;

use std::future::Future;

use crate::error::Result;

/// Delivers a rendered message. Failures propagate to the caller untouched.
pub trait Notifier {
    fn send(&self, message: &EmailMessage) -> impl Future<Output = Result<()>> + Send;
}
