mod common;

use serde_json::json;

use fundraising_standings::StandingsError;
use fundraising_standings::config::Config;
use fundraising_standings::handlers::{notify_standings, NotifyStandingsInput};
use fundraising_standings::notify::RecordingNotifier;

fn event_with_scores() -> NotifyStandingsInput {
    serde_json::from_value(json!({
        "team_id": "1234",
        "timestamp": "2021-01-14T13:57:00",
        "total": "5817.80",
        "scores": [
            {"amount": "127.50", "name": "First Person"},
            {"amount": "56.25", "name": "Second Person"},
            {"amount": "5634.05", "name": "Third Person"}
        ],
        "name": "Third Person"
    }))
    .unwrap()
}

fn config() -> Config {
    common::test_config("http://127.0.0.1:9/unused")
}

#[tokio::test]
async fn sends_personalized_email_and_echoes_input() {
    let notifier = RecordingNotifier::new();
    let input = event_with_scores();

    let output = notify_standings(&config(), &notifier, input.clone()).await.unwrap();
    assert_eq!(output, input);

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    let message = &sent[0];
    assert_eq!(message.sender, "hi@example.com");
    assert_eq!(message.recipient, "bob@example.com");
    assert_eq!(message.subject, "AIDS Walk Fundraising Update For Third Person - 2021-01-14 07:57 AM");
    assert!(message.html_body.contains("<strong>1st</strong>"));
    assert!(message.html_body.contains("<strong>$5,634.05</strong>"));
    assert!(message.html_body.contains("<strong>$5,817.80</strong>"));

    let third = message.html_body.find("Third Person").unwrap();
    let first = message.html_body.find("First Person").unwrap();
    let second = message.html_body.find("Second Person").unwrap();
    assert!(third < first && first < second);
}

#[tokio::test]
async fn event_label_is_configurable() {
    let notifier = RecordingNotifier::new();
    let cfg = Config {
        event_label: "Charity Run".to_string(),
        ..config()
    };
    notify_standings(&cfg, &notifier, event_with_scores()).await.unwrap();
    assert!(notifier.sent()[0].subject.starts_with("Charity Run Fundraising Update For Third Person"));
}

#[tokio::test]
async fn unknown_participant_is_not_found() {
    let notifier = RecordingNotifier::new();
    let mut input = event_with_scores();
    input.name = "third person".to_string();

    let err = notify_standings(&config(), &notifier, input).await.unwrap_err();
    assert!(matches!(err, StandingsError::NotFound(ref n) if n == "third person"));
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn missing_options_are_configuration_errors() {
    let cases: Vec<(&str, Config)> = vec![
        ("TEMPLATE_PATH", Config { template_path: None, ..config() }),
        ("TIMEZONE", Config { timezone: None, ..config() }),
        ("EMAIL_SENDER", Config { email_sender: None, ..config() }),
        ("EMAIL_RECIPIENT", Config { email_recipient: None, ..config() }),
    ];
    for (key, cfg) in cases {
        let notifier = RecordingNotifier::new();
        let err = notify_standings(&cfg, &notifier, event_with_scores()).await.unwrap_err();
        assert!(matches!(err, StandingsError::Configuration(ref m) if m.contains(key)), "{key}");
        assert!(notifier.sent().is_empty());
    }
}

#[tokio::test]
async fn template_missing_from_directory_is_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config {
        template_path: Some(dir.path().to_string_lossy().into_owned()),
        ..config()
    };
    let notifier = RecordingNotifier::new();
    let err = notify_standings(&cfg, &notifier, event_with_scores()).await.unwrap_err();
    assert!(matches!(err, StandingsError::Configuration(_)));
    assert!(notifier.sent().is_empty());
}
