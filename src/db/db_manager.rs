use sqlx::PgPool;
use tracing::{debug, info, instrument};

use super::connection;
use super::schema;
use super::queries::score_records as score_records_queries;
use super::models::score_records::PersistedScoreRecord;
use super::score_store::ScoreStore;
use crate::config::Config;
use crate::error::{Result, StandingsError};

/// Postgres-backed score store. Table name comes from `SCORE_TABLE_NAME`.
pub struct DbManager {
    pub pool: PgPool,
    table_name: String,
}

impl DbManager {
    /// Connects and makes sure the score table exists
    #[instrument(skip(config), fields(on_close = true))]
    pub async fn init(config: &Config) -> Result<Self> {
        let table_name = validate_table_name(config.score_table_name()?)?.to_string();
        let pool = connection::create_pool(config).await?;

        schema::init_schema(&pool, &table_name).await?;
        info!(table = %table_name, "Score table ready");

        Ok(Self { pool, table_name })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

impl ScoreStore for DbManager {
    #[instrument(skip(self, records), fields(table = %self.table_name, count = records.len(), on_close = true))]
    async fn put_records(&self, records: &[PersistedScoreRecord]) -> Result<()> {
        // Item by item, no transaction: a failure leaves earlier rows in place
        for record in records {
            score_records_queries::upsert_score_record(&self.pool, &self.table_name, record).await?;
            debug!(run_id = %record.run_id, name = %record.name, "Score record written");
        }
        Ok(())
    }

    async fn records_for_run(&self, run_id: &str) -> Result<Vec<PersistedScoreRecord>> {
        Ok(score_records_queries::get_score_records_for_run(&self.pool, &self.table_name, run_id).await?)
    }
}

/// Table names are spliced into SQL, so only plain identifiers are accepted.
pub fn validate_table_name(name: &str) -> Result<&str> {
    let mut chars = name.chars();
    let valid = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && name.len() <= 48;
    if valid {
        Ok(name)
    } else {
        Err(StandingsError::Configuration(format!("invalid SCORE_TABLE_NAME {name:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_identifiers_are_accepted() {
        for name in ["scores", "team_scores_2021", "_history"] {
            assert_eq!(validate_table_name(name).unwrap(), name);
        }
    }

    #[test]
    fn unsafe_identifiers_are_rejected() {
        for name in ["", "1scores", "scores;drop table x", "team-scores", "\"scores\""] {
            assert!(matches!(validate_table_name(name), Err(StandingsError::Configuration(_))));
        }
    }

    #[tokio::test]
    async fn missing_table_name_fails_before_connecting() {
        let err = DbManager::init(&Config::default()).await.err().unwrap();
        assert!(matches!(err, StandingsError::Configuration(ref m) if m.contains("SCORE_TABLE_NAME")));
    }
}
