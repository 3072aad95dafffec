//! Tweet-id timestamp extraction.
//!
//! Tweet ids are snowflakes: the high 42 bits carry milliseconds since the
//! platform epoch. Shift and offset below are bit-compatible with the
//! upstream encoding.

use chrono::{DateTime, TimeZone, Utc};

/// Platform epoch in milliseconds (2010-11-04T01:42:54.657Z).
const TWITTER_EPOCH_MS: u64 = 1_288_834_974_657;

/// Decode the creation time embedded in a tweet id.
///
/// Never fails: an id whose derived millisecond value does not map to a
/// valid calendar time degrades to the current time instead.
pub fn tweet_id_to_timestamp(id: u64) -> DateTime<Utc> {
    let ms = (id >> 22) + TWITTER_EPOCH_MS;
    i64::try_from(ms)
        .ok()
        .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
        .unwrap_or_else(Utc::now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_id() {
        // 1212092628029698048 >> 22 = 288985402114 ms past the epoch
        let ts = tweet_id_to_timestamp(1_212_092_628_029_698_048);
        assert_eq!(ts.timestamp_millis(), 1_577_820_376_771);
        assert_eq!(ts.to_rfc3339(), "2019-12-31T19:26:16.771+00:00");
    }

    #[test]
    fn is_idempotent() {
        let id = 1_514_835_910_456_246_272u64;
        let a = tweet_id_to_timestamp(id);
        let b = tweet_id_to_timestamp(id);
        assert_eq!(a, b);
        assert_eq!(a.timestamp_millis(), 1_650_000_000_000);
    }

    #[test]
    fn zero_id_decodes_to_platform_epoch() {
        let ts = tweet_id_to_timestamp(0);
        assert_eq!(ts.timestamp_millis() as u64, TWITTER_EPOCH_MS);
    }

    #[test]
    fn max_id_still_yields_a_valid_time() {
        // the highest 42-bit offset lands mid-22nd century, well inside
        // chrono's range, so no id can panic here
        let ts = tweet_id_to_timestamp(u64::MAX);
        assert!(ts.timestamp_millis() as u64 > TWITTER_EPOCH_MS);
    }
}
