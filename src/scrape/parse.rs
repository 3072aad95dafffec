// src/scrape/parse.rs
//
// Per-endpoint response parsers. Strict about the top-level container,
// lenient about per-item shape: a malformed item is skipped or its fields
// default, it never fails the whole call.

use chrono::Utc;
use serde_json::Value;

use crate::endpoint::EndpointKind;
use crate::error::ScrapeError;
use crate::scrape::types::{NormalizedRecord, PLATFORM};
use crate::snowflake::tweet_id_to_timestamp;

/// Extract normalized records from a decoded payload.
///
/// Returns the records plus `pulled`, the raw upstream item count before
/// filtering.
pub fn parse_records(
    kind: EndpointKind,
    raw_path: &str,
    payload: &Value,
) -> Result<(Vec<NormalizedRecord>, u64), ScrapeError> {
    match kind {
        EndpointKind::EventSummary => parse_event_summary(raw_path, payload),
        EndpointKind::TrendingNarratives => parse_trending_narratives(raw_path, payload),
    }
}

fn parse_event_summary(
    raw_path: &str,
    payload: &Value,
) -> Result<(Vec<NormalizedRecord>, u64), ScrapeError> {
    let items = payload.get("data").and_then(Value::as_array).ok_or_else(|| {
        ScrapeError::MalformedPayload("missing 'data' field in event-summary response".into())
    })?;

    let mut records = Vec::with_capacity(items.len());
    for item in items {
        let Some(id) = first_id(item, "tweetIds") else {
            continue;
        };
        records.push(NormalizedRecord {
            id,
            text: text_field(item, "summary"),
            // event summaries carry no time-encodable id; stamp with fetch time
            timestamp: Utc::now(),
            author: format!("elfa_{id}"),
            platform: PLATFORM.to_string(),
            channel_id: raw_path.to_string(),
            links: link_list(item, "sourceLinks"),
        });
    }
    Ok((records, items.len() as u64))
}

fn parse_trending_narratives(
    raw_path: &str,
    payload: &Value,
) -> Result<(Vec<NormalizedRecord>, u64), ScrapeError> {
    let items = payload
        .get("data")
        .and_then(|data| data.get("trending_narratives"))
        .and_then(Value::as_array)
        .ok_or_else(|| {
            ScrapeError::MalformedPayload("missing 'trending_narratives' in response".into())
        })?;

    let mut records = Vec::with_capacity(items.len());
    for item in items {
        let Some(id) = first_id(item, "tweet_ids") else {
            continue;
        };
        records.push(NormalizedRecord {
            id,
            text: text_field(item, "narrative"),
            timestamp: tweet_id_to_timestamp(id),
            author: format!("elfa_{id}"),
            platform: PLATFORM.to_string(),
            channel_id: raw_path.to_string(),
            links: link_list(item, "source_links"),
        });
    }
    Ok((records, items.len() as u64))
}

/// First id wins; later ids in the same item are discarded. An item without
/// a usable first id is skipped by the caller (still counted in `pulled`).
fn first_id(item: &Value, field: &str) -> Option<u64> {
    item.get(field)?.as_array()?.first()?.as_u64()
}

fn text_field(item: &Value, field: &str) -> String {
    item.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn link_list(item: &Value, field: &str) -> Vec<String> {
    item.get(field)
        .and_then(Value::as_array)
        .map(|links| {
            links
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|link| !link.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
