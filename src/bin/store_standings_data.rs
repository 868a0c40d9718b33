use tracing::info;

use fundraising_standings::config;
use fundraising_standings::db::DbManager;
use fundraising_standings::event_io;
use fundraising_standings::handlers::{self, StoreStandingsInput};
use fundraising_standings::logging;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    if let Err(e) = logging::init_logging(env!("CARGO_BIN_NAME").to_string()) {
        eprintln!("Failed to initialize logging: {}", e);
        return Err(e);
    }

    let cfg = config::Config::load();
    let input: StoreStandingsInput = event_io::read_event()?;

    // Initialize db manager
    let db = DbManager::init(&cfg).await?;
    info!(table = %db.table_name(), "Database manager initialized");

    let output = handlers::store_standings_data(&db, input).await?;
    event_io::write_output(&output)
}
