mod common;

use rust_decimal::dec;
use serde_json::json;

use fundraising_standings::db::{MemoryScoreStore, PersistedScoreRecord, ScoreStore};
use fundraising_standings::handlers::{
    get_standings_data, notify_standings, store_standings_data, GetStandingsInput, NotifyStandingsInput,
    StoreStandingsInput,
};
use fundraising_standings::notify::RecordingNotifier;

#[tokio::test]
async fn scrape_store_notify_chain() {
    let server = common::serve_page(200, common::FIXTURE_PAGE).await;
    let cfg = common::test_config(&server.base_url);
    let store = MemoryScoreStore::new();
    let notifier = RecordingNotifier::new();

    // get-standings-data
    let input: GetStandingsInput = serde_json::from_value(json!({"team_id": "1234", "name": "Third Person"})).unwrap();
    let data = get_standings_data(&cfg, input).await.unwrap();
    let names: Vec<_> = data.scores.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Third Person", "First Person", "Second Person"]);
    assert_eq!(data.total, dec!(5817.80));

    // store-standings-data, fed the previous output as JSON like the chained functions are
    let store_input: StoreStandingsInput = serde_json::from_value(serde_json::to_value(&data).unwrap()).unwrap();
    let stored = store_standings_data(&store, store_input.clone()).await.unwrap();
    assert_eq!(stored, store_input);

    let run_id = PersistedScoreRecord::run_id("1234", &data.timestamp);
    let records = store.records_for_run(&run_id).await.unwrap();
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.run_id == run_id));

    // notify-standings
    let notify_input: NotifyStandingsInput = serde_json::from_value(serde_json::to_value(&stored).unwrap()).unwrap();
    let echoed = notify_standings(&cfg, &notifier, notify_input.clone()).await.unwrap();
    assert_eq!(echoed, notify_input);

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].subject.starts_with("AIDS Walk Fundraising Update For Third Person - "));
    assert!(sent[0].html_body.contains("<strong>1st</strong>"));
    assert!(sent[0].html_body.contains("<strong>$5,634.05</strong>"));
}
