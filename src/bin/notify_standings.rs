use tracing::info;

use fundraising_standings::config;
use fundraising_standings::event_io;
use fundraising_standings::handlers::{self, NotifyStandingsInput};
use fundraising_standings::logging;
use fundraising_standings::notify::HttpMailNotifier;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    if let Err(e) = logging::init_logging(env!("CARGO_BIN_NAME").to_string()) {
        eprintln!("Failed to initialize logging: {}", e);
        return Err(e);
    }

    let cfg = config::Config::load();
    let input: NotifyStandingsInput = event_io::read_event()?;
    info!(name = %input.name, "Sending standings notification");

    let notifier = HttpMailNotifier::new(&cfg)?;
    let output = handlers::notify_standings(&cfg, &notifier, input).await?;
    event_io::write_output(&output)
}
