// src/scrape/types.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed tag identifying this source system.
pub const PLATFORM: &str = "elfa";

/// One ingested item, normalized to the shape shared by all scrapers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedRecord {
    /// Platform id (tweet id); unique within one fetch, not globally.
    pub id: u64,
    /// Trimmed free text; may be empty, never missing.
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Synthetic label, `elfa_{id}`.
    pub author: String,
    pub platform: String,
    /// Raw endpoint path that produced this record (provenance).
    pub channel_id: String,
    /// Non-empty trimmed link strings, possibly none.
    pub links: Vec<String>,
}

/// Outcome summary of one fetch cycle.
///
/// `success`/`error` are absent on a normal run; every failure path sets
/// `success = Some(false)` with a populated `error` and zeroed counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScrapeStats {
    pub channel_id: String,
    pub platform: String,
    /// Raw items returned by the upstream API before filtering.
    pub pulled: u64,
    /// Items that survived normalization; `kept <= pulled`.
    pub kept: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScrapeStats {
    pub fn ok(channel_id: impl Into<String>, pulled: u64, kept: u64) -> Self {
        Self {
            channel_id: channel_id.into(),
            platform: PLATFORM.to_string(),
            pulled,
            kept,
            success: None,
            error: None,
        }
    }

    pub fn failed(channel_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            platform: PLATFORM.to_string(),
            pulled: 0,
            kept: 0,
            success: Some(false),
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success.unwrap_or(true)
    }
}
