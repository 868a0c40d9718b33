use eyre::eyre;
use tracing::info;

use fundraising_standings::config;
use fundraising_standings::db::DbManager;
use fundraising_standings::event_io;
use fundraising_standings::handlers::{self, GetStandingsInput, NotifyStandingsInput};
use fundraising_standings::logging;
use fundraising_standings::notify::HttpMailNotifier;

/// Chains get -> store -> notify for a `{ "team_id": ..., "name": ... }` event.
#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    if let Err(e) = logging::init_logging(env!("CARGO_BIN_NAME").to_string()) {
        eprintln!("Failed to initialize logging: {}", e);
        return Err(e);
    }

    let cfg = config::Config::load();
    let input: GetStandingsInput = event_io::read_event()?;
    let name = input
        .name
        .clone()
        .ok_or_else(|| eyre!("pipeline event needs a `name` to notify"))?;
    info!(team_id = %input.team_id, %name, "Standings pipeline started");

    // Scrape
    let data = handlers::get_standings_data(&cfg, input).await?;

    // Store
    let db = DbManager::init(&cfg).await?;
    let stored = handlers::store_standings_data(&db, data.clone().into()).await?;
    info!(records = stored.scores.len(), "Snapshot stored");

    // Notify
    let notifier = HttpMailNotifier::new(&cfg)?;
    let notify_input = NotifyStandingsInput {
        scores: data.scores.clone(),
        total: data.total,
        timestamp: data.timestamp,
        name,
        team_id: Some(data.team_id.clone()),
        extra: data.extra.clone(),
    };
    handlers::notify_standings(&cfg, &notifier, notify_input).await?;

    info!("Standings pipeline finished");
    event_io::write_output(&data)
}
