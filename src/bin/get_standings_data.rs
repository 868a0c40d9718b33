use tracing::info;

use fundraising_standings::config;
use fundraising_standings::event_io;
use fundraising_standings::handlers::{self, GetStandingsInput};
use fundraising_standings::logging;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    if let Err(e) = logging::init_logging(env!("CARGO_BIN_NAME").to_string()) {
        eprintln!("Failed to initialize logging: {}", e);
        return Err(e);
    }

    let cfg = config::Config::load();
    let input: GetStandingsInput = event_io::read_event()?;
    info!(team_id = %input.team_id, "Getting team standings");

    let output = handlers::get_standings_data(&cfg, input).await?;
    event_io::write_output(&output)
}
