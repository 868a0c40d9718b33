use sqlx::postgres::PgPool;

/// Create the score table for `table` (already validated) if it does not exist.
/// `(run_id, name)` is the primary key, so rewriting a run overwrites instead of duplicating.
pub async fn init_schema(pool: &PgPool, table: &str) -> Result<(), sqlx::Error> {
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table} (
            run_id     TEXT      NOT NULL,
            name       TEXT      NOT NULL,
            amount     NUMERIC   NOT NULL,
            timestamp  TIMESTAMP NOT NULL,
            team_id    TEXT      NOT NULL,
            PRIMARY KEY (run_id, name)
        );
        "#
    ))
    .execute(pool)
    .await?;

    // Team history lookups go by team and time
    sqlx::query(&format!(
        r#"
        CREATE INDEX IF NOT EXISTS idx_{table}_team_timestamp
        ON {table}(team_id, timestamp);
        "#
    ))
    .execute(pool)
    .await?;

    Ok(())
}
