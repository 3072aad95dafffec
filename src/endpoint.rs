//! Endpoint validation and naming.
//!
//! Paths are the path+query portion of an upstream URL, e.g.
//! `"/trending-narratives?timeFrame=day&maxNarratives=20"`. Exactly two
//! routes are supported; anything else is rejected before any network I/O.

use crate::error::ScrapeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    EventSummary,
    TrendingNarratives,
}

impl EndpointKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EndpointKind::EventSummary => "event-summary",
            EndpointKind::TrendingNarratives => "trending-narratives",
        }
    }
}

/// First path segment, leading slash optional, query/rest stripped.
fn path_segment(path: &str) -> &str {
    let trimmed = path.trim_start_matches('/');
    trimmed.split(['?', '/']).next().unwrap_or(trimmed)
}

/// Match the path against the closed set of supported endpoints.
/// Case-sensitive exact segment match.
pub fn classify(path: &str) -> Result<EndpointKind, ScrapeError> {
    match path_segment(path) {
        "event-summary" => Ok(EndpointKind::EventSummary),
        "trending-narratives" => Ok(EndpointKind::TrendingNarratives),
        _ => Err(ScrapeError::InvalidEndpoint(path.to_string())),
    }
}

/// Short display label for a path, used in stats and alert messages.
/// Best-effort: meaningful for recognized paths, never empty for others.
pub fn endpoint_name(path: &str) -> String {
    let seg = path_segment(path);
    if !seg.is_empty() {
        seg.to_string()
    } else if !path.is_empty() {
        path.to_string()
    } else {
        "unknown".to_string()
    }
}
