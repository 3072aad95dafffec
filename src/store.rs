//! Postgres sink: the `logs_runs` runs log and the `sources` enumeration.
//!
//! Queries are runtime-bound; the schema is owned elsewhere.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::scrape::types::ScrapeStats;

/// One row of the `sources` table: an endpoint this pipeline should fetch.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SourceRow {
    pub id: i32,
    pub channel_id: String,
    pub platform: String,
    pub channel_name: String,
}

/// Connectivity probe; logs the server version on success.
pub async fn test_connection(pool: &PgPool) -> Result<()> {
    let version: String = sqlx::query_scalar("SELECT version()")
        .fetch_one(pool)
        .await
        .context("probing database connection")?;
    tracing::info!(%version, "database connection successful");
    Ok(())
}

/// Batch-insert run statistics into `logs_runs`, one transaction for the
/// whole batch. Empty input is a no-op.
pub async fn insert_run_logs_batch(pool: &PgPool, logs: &[ScrapeStats]) -> Result<()> {
    if logs.is_empty() {
        return Ok(());
    }

    let mut tx = pool.begin().await.context("opening logs_runs transaction")?;
    for log in logs {
        sqlx::query(
            "INSERT INTO logs_runs (channel_id, pulled, kept, platform) VALUES ($1, $2, $3, $4)",
        )
        .bind(&log.channel_id)
        .bind(log.pulled as i64)
        .bind(log.kept as i64)
        .bind(&log.platform)
        .execute(&mut *tx)
        .await
        .context("inserting into logs_runs")?;
    }
    tx.commit().await.context("committing logs_runs batch")?;

    tracing::info!(count = logs.len(), "run stats saved to logs_runs");
    Ok(())
}

/// Enumerate every configured source, all platforms included; callers
/// filter to the platform they scrape.
pub async fn fetch_sources(pool: &PgPool) -> Result<Vec<SourceRow>> {
    let rows = sqlx::query_as::<_, SourceRow>(
        "SELECT id, channel_id, platform, channel_name FROM sources",
    )
    .fetch_all(pool)
    .await
    .context("fetching sources table")?;
    Ok(rows)
}
