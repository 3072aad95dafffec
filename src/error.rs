//! Failure taxonomy for a single fetch cycle.
//!
//! Every variant is recovered inside [`crate::scrape::ElfaScraper`]: the
//! orchestrator converts it into failed [`crate::scrape::types::ScrapeStats`]
//! and an alert, and never lets it cross `fetch_endpoint`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The path does not name a supported endpoint; no HTTP call was made.
    #[error("invalid Elfa endpoint: {0}")]
    InvalidEndpoint(String),

    /// Non-200 status, timeout, or any other network-level failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// Response body is not valid JSON.
    #[error("JSON decode failed: {0}")]
    Decode(String),

    /// JSON decoded but the expected top-level container for the matched
    /// endpoint kind is missing.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// Defensive boundary for anything not anticipated above.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}
