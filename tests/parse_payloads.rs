// tests/parse_payloads.rs
//
// Parser contracts: strict top-level containers, lenient per-item shape,
// first-id-wins, kind-specific timestamp sources.

use chrono::Utc;
use elfa_scraper::scrape::parse::parse_records;
use elfa_scraper::{tweet_id_to_timestamp, EndpointKind, ScrapeError};
use serde_json::json;

const PATH: &str = "/event-summary?keywords=x";
const TRENDING_PATH: &str = "/trending-narratives?timeFrame=day";

#[test]
fn event_summary_without_data_is_malformed() {
    for payload in [json!({}), json!({ "items": [] }), json!({ "data": "nope" })] {
        let err = parse_records(EndpointKind::EventSummary, PATH, &payload).unwrap_err();
        match err {
            ScrapeError::MalformedPayload(msg) => assert!(msg.contains("'data'")),
            other => panic!("expected MalformedPayload, got {other:?}"),
        }
    }
}

#[test]
fn trending_without_nesting_is_malformed_not_empty() {
    for payload in [
        json!({}),
        json!({ "data": {} }),
        json!({ "data": { "trending_narratives": "nope" } }),
    ] {
        let err = parse_records(EndpointKind::TrendingNarratives, TRENDING_PATH, &payload)
            .unwrap_err();
        match err {
            ScrapeError::MalformedPayload(msg) => {
                assert!(msg.contains("trending_narratives"))
            }
            other => panic!("expected MalformedPayload, got {other:?}"),
        }
    }
}

#[test]
fn event_summary_normalizes_items() {
    let payload = json!({
        "data": [
            {
                "tweetIds": [5, 6, 7],
                "summary": "  spaced out  ",
                "sourceLinks": ["", "  ", " http://a ", 17]
            },
            { "tweetIds": [] },
            { "summary": "no ids at all" }
        ]
    });
    let (records, pulled) = parse_records(EndpointKind::EventSummary, PATH, &payload).unwrap();

    // itemless-of-ids entries count toward pulled but never toward kept
    assert_eq!(pulled, 3);
    assert_eq!(records.len(), 1);

    let r = &records[0];
    assert_eq!(r.id, 5, "first id wins, later ids discarded");
    assert_eq!(r.text, "spaced out");
    assert_eq!(r.links, vec!["http://a"]);
    assert_eq!(r.author, "elfa_5");
    assert_eq!(r.platform, "elfa");
    assert_eq!(r.channel_id, PATH);
}

#[test]
fn event_summary_timestamp_is_parse_time() {
    let payload = json!({ "data": [ { "tweetIds": [1514835910456246272u64] } ] });
    let before = Utc::now();
    let (records, _) = parse_records(EndpointKind::EventSummary, PATH, &payload).unwrap();
    let after = Utc::now();
    // this kind never consults the snowflake clock
    assert!(records[0].timestamp >= before && records[0].timestamp <= after);
}

#[test]
fn trending_timestamp_derives_from_the_id() {
    let id = 1514835910456246272u64;
    let payload = json!({
        "data": { "trending_narratives": [
            { "tweet_ids": [id], "narrative": "x", "source_links": ["http://a"] }
        ]}
    });
    let (records, pulled) =
        parse_records(EndpointKind::TrendingNarratives, TRENDING_PATH, &payload).unwrap();
    assert_eq!(pulled, 1);
    assert_eq!(records[0].timestamp, tweet_id_to_timestamp(id));
    assert_eq!(records[0].timestamp.timestamp_millis(), 1_650_000_000_000);
}

#[test]
fn empty_text_and_links_still_make_a_valid_record() {
    let payload = json!({
        "data": { "trending_narratives": [ { "tweet_ids": [9] } ] }
    });
    let (records, pulled) =
        parse_records(EndpointKind::TrendingNarratives, TRENDING_PATH, &payload).unwrap();
    assert_eq!((pulled, records.len() as u64), (1, 1));
    assert_eq!(records[0].text, "");
    assert!(records[0].links.is_empty());
}

#[test]
fn kept_never_exceeds_pulled() {
    let payload = json!({
        "data": { "trending_narratives": [
            { "tweet_ids": [1], "narrative": "a" },
            { "tweet_ids": [],  "narrative": "b" },
            { "tweet_ids": [2], "narrative": "c" },
            { "narrative": "d" }
        ]}
    });
    let (records, pulled) =
        parse_records(EndpointKind::TrendingNarratives, TRENDING_PATH, &payload).unwrap();
    assert_eq!(pulled, 4);
    assert_eq!(records.len(), 2);
    assert!((records.len() as u64) <= pulled);
}
