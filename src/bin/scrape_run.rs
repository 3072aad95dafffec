//! One bounded ingestion cycle: enumerate Elfa sources from the database,
//! fetch each endpoint, persist run stats, export the record batch to
//! Telegram. Runs to completion and exits; scheduling lives outside.

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::PgPool;

use elfa_scraper::logging::init_tracing;
use elfa_scraper::normalize::clean_text;
use elfa_scraper::{store, AlertSink, ElfaScraper, ScraperConfig, TelegramNotifier, PLATFORM};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ScraperConfig::from_env()?;
    let telegram = Arc::new(TelegramNotifier::from_env());
    let scraper = ElfaScraper::new(config, telegram.clone());

    let dsn = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = PgPool::connect(&dsn).await.context("connecting to database")?;
    store::test_connection(&pool).await?;

    let sources = match store::fetch_sources(&pool).await {
        Ok(sources) => sources,
        Err(err) => {
            let _ = telegram
                .alert(&format!("failed to fetch sources: {err:#}"))
                .await;
            return Err(err);
        }
    };

    let mut records = Vec::new();
    let mut stats = Vec::new();
    for source in sources.iter().filter(|s| s.platform == PLATFORM) {
        let (mut batch, run) = scraper.fetch_endpoint(&source.channel_id).await;
        for record in &mut batch {
            record.text = clean_text(&record.text);
        }
        records.append(&mut batch);
        stats.push(run);
    }

    if let Err(err) = store::insert_run_logs_batch(&pool, &stats).await {
        let _ = telegram
            .alert(&format!("failed to insert run logs: {err:#}"))
            .await;
        return Err(err);
    }

    if !records.is_empty() {
        telegram
            .send_records_document(&records, "elfa_records")
            .await?;
    }

    tracing::info!(
        runs = stats.len(),
        records = records.len(),
        "scrape run finished"
    );
    Ok(())
}
