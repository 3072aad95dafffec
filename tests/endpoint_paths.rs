// tests/endpoint_paths.rs
use elfa_scraper::{classify, endpoint_name, EndpointKind, ScrapeError};

#[test]
fn leading_slash_is_optional() {
    assert_eq!(
        classify("/event-summary?keywords=btc&timeWindow=24h").unwrap(),
        EndpointKind::EventSummary
    );
    assert_eq!(
        classify("event-summary?keywords=btc").unwrap(),
        EndpointKind::EventSummary
    );
}

#[test]
fn every_unknown_prefix_is_rejected() {
    let paths = [
        "/unknown-endpoint",
        "/trending",
        "/trending-narrativesx",
        "/event_summary",
        "/EVENT-SUMMARY",
        "/",
        "",
    ];
    for p in paths {
        match classify(p) {
            Err(ScrapeError::InvalidEndpoint(offending)) => assert_eq!(offending, p),
            other => panic!("{p:?} should be rejected, got {other:?}"),
        }
    }
}

#[test]
fn name_matches_the_kind_for_valid_paths() {
    for p in [
        "/event-summary?keywords=x&timeWindow=24h",
        "/trending-narratives?timeFrame=day&maxNarratives=20",
    ] {
        let kind = classify(p).unwrap();
        assert_eq!(endpoint_name(p), kind.as_str());
    }
}

#[test]
fn name_is_best_effort_for_invalid_paths() {
    // only used for display; must not fail and must not be empty
    assert_eq!(endpoint_name("/not-a-route?x=1"), "not-a-route");
    assert!(!endpoint_name("/").is_empty());
    assert!(!endpoint_name("?").is_empty());
}
