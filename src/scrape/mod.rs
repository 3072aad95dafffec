// src/scrape/mod.rs
//
// Fetch-validate-parse-report lifecycle for one Elfa endpoint call.

pub mod parse;
pub mod types;

use std::sync::Arc;
use std::time::{Duration, Instant};

use metrics::{counter, describe_counter, describe_histogram, histogram};
use once_cell::sync::OnceCell;
use reqwest::Client;
use serde_json::Value;

use crate::config::ScraperConfig;
use crate::endpoint::{self, EndpointKind};
use crate::error::ScrapeError;
use crate::notify::AlertSink;
use self::types::{NormalizedRecord, ScrapeStats};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
/// Upstream error bodies are cut to this many characters in stats/alerts.
const ERROR_BODY_LIMIT: usize = 200;

/// One-time metrics registration (so series show up on a recorder).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "scrape_pulled_total",
            "Raw items returned by the Elfa API before filtering."
        );
        describe_counter!("scrape_kept_total", "Items kept after normalization.");
        describe_counter!(
            "scrape_failures_total",
            "Fetch cycles that ended in a failure stats row."
        );
        describe_histogram!("scrape_fetch_ms", "Endpoint round-trip time in milliseconds.");
    });
}

/// Orchestrator for the Elfa analytics API.
///
/// Holds no state across calls; separate `fetch_endpoint` invocations are
/// independent and may run concurrently.
pub struct ElfaScraper {
    config: ScraperConfig,
    client: Client,
    alerts: Arc<dyn AlertSink>,
}

impl ElfaScraper {
    pub fn new(config: ScraperConfig, alerts: Arc<dyn AlertSink>) -> Self {
        Self {
            config,
            client: Client::new(),
            alerts,
        }
    }

    /// Fetch one endpoint and normalize its payload.
    ///
    /// Accepts only the path + query part, e.g.
    /// `"/trending-narratives?timeFrame=day&maxNarratives=20"`. Never fails:
    /// every error becomes empty records plus failed stats, after the
    /// message has gone to the alert sink and the log.
    pub async fn fetch_endpoint(&self, path: &str) -> (Vec<NormalizedRecord>, ScrapeStats) {
        ensure_metrics_described();

        // Invalid paths never reach the network. Stats keep the raw path as
        // the label; a derived name would be meaningless here.
        let kind = match endpoint::classify(path) {
            Ok(kind) => kind,
            Err(err) => return self.fail(path, err).await,
        };
        let name = endpoint::endpoint_name(path);

        let t0 = Instant::now();
        let outcome = self.fetch_and_parse(kind, path).await;
        histogram!("scrape_fetch_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);

        match outcome {
            Ok((records, pulled)) => {
                let kept = records.len() as u64;
                counter!("scrape_pulled_total").increment(pulled);
                counter!("scrape_kept_total").increment(kept);
                tracing::info!(endpoint = %name, pulled, kept, "elfa fetch complete");
                (records, ScrapeStats::ok(name, pulled, kept))
            }
            Err(err) => self.fail(&name, err).await,
        }
    }

    async fn fetch_and_parse(
        &self,
        kind: EndpointKind,
        path: &str,
    ) -> Result<(Vec<NormalizedRecord>, u64), ScrapeError> {
        let url = join_url(&self.config.base_url, path);

        let resp = self
            .client
            .get(&url)
            .timeout(FETCH_TIMEOUT)
            .header("Accept", "application/json")
            .header("x-elfa-api-key", &self.config.api_key)
            .send()
            .await
            .map_err(classify_reqwest_error)?;

        let status = resp.status();
        let body = resp.text().await.map_err(classify_reqwest_error)?;
        if status.as_u16() != 200 {
            return Err(ScrapeError::Transport(format!(
                "HTTP {}: {}",
                status.as_u16(),
                truncate(&body, ERROR_BODY_LIMIT)
            )));
        }

        let payload: Value =
            serde_json::from_str(&body).map_err(|e| ScrapeError::Decode(e.to_string()))?;

        parse::parse_records(kind, path, &payload)
    }

    /// Terminal failure path: alert + log, then empty records + failed stats.
    async fn fail(
        &self,
        channel_id: &str,
        err: ScrapeError,
    ) -> (Vec<NormalizedRecord>, ScrapeStats) {
        counter!("scrape_failures_total").increment(1);
        tracing::error!(channel = %channel_id, %err, "elfa fetch failed");

        let message = format!("Elfa {channel_id}: {err}");
        if let Err(alert_err) = self.alerts.alert(&message).await {
            tracing::warn!(error = ?alert_err, "alert delivery failed");
        }

        (Vec::new(), ScrapeStats::failed(channel_id, err.to_string()))
    }
}

/// Timeouts and any other network-level failure count as transport errors;
/// only client-side construction problems land in the catch-all.
fn classify_reqwest_error(err: reqwest::Error) -> ScrapeError {
    if err.is_builder() || err.is_redirect() {
        ScrapeError::Unexpected(err.to_string())
    } else {
        ScrapeError::Transport(err.to_string())
    }
}

/// `urljoin` equivalent: both sides sanitized of surrounding slashes, the
/// path appended as the relative suffix.
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn truncate(s: &str, limit: usize) -> String {
    s.chars().take(limit).collect()
}
