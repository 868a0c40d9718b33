use sqlx::ConnectOptions;
use sqlx::postgres::{
    PgConnectOptions,
    PgPool,
    PgPoolOptions,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::error::Result;

pub async fn create_pool(config: &Config) -> Result<PgPool> {
    let connect_options = PgConnectOptions::from_str(config.database_url()?)?
        .log_slow_statements(LevelFilter::Warn, Duration::from_secs(10));

    // One invocation writes one run; a small pool is plenty
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect_with(connect_options)
        .await?;
    Ok(pool)
}
