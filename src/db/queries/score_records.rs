use sqlx::PgPool;

use crate::db::models::score_records::PersistedScoreRecord;

/// Insert one score record, overwriting an existing row with the same `(run_id, name)`
pub async fn upsert_score_record(
    pool: &PgPool,
    table: &str,
    record: &PersistedScoreRecord,
) -> Result<(), sqlx::Error> {
    sqlx::query(&format!(
        r#"
        INSERT INTO {table} (run_id, name, amount, timestamp, team_id)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (run_id, name) DO UPDATE
        SET amount = EXCLUDED.amount,
            timestamp = EXCLUDED.timestamp,
            team_id = EXCLUDED.team_id
        "#
    ))
    .bind(&record.run_id)
    .bind(&record.name)
    .bind(record.amount)
    .bind(record.timestamp)
    .bind(&record.team_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Fetch every record written by one run, highest amount first
pub async fn get_score_records_for_run(
    pool: &PgPool,
    table: &str,
    run_id: &str,
) -> Result<Vec<PersistedScoreRecord>, sqlx::Error> {
    sqlx::query_as::<_, PersistedScoreRecord>(&format!(
        r#"
        SELECT run_id, name, amount, timestamp, team_id
        FROM {table}
        WHERE run_id = $1
        ORDER BY amount DESC, name ASC
        "#
    ))
    .bind(run_id)
    .fetch_all(pool)
    .await
}
