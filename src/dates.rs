// src/dates.rs
//! Timestamp parsing and relative-age bucketing. Feeds disagree on date
//! formats, so parsing tries a fixed priority order; anything unparseable
//! fails open to the "Just now" bucket.

use once_cell::sync::OnceCell;
use time::format_description::well_known::{Rfc2822, Rfc3339};
use time::format_description::{self, FormatItem};
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Fail-open bucket used when a feed's timestamp cannot be parsed.
pub const UNPARSEABLE_BUCKET: &str = "Just now";

fn simple_format() -> &'static Vec<FormatItem<'static>> {
    static FMT: OnceCell<Vec<FormatItem<'static>>> = OnceCell::new();
    FMT.get_or_init(|| {
        format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]")
            .expect("simple datetime format")
    })
}

/// Parse a feed timestamp to unix seconds (UTC). Priority order:
/// RFC 2822 (RSS `pubDate`), RFC 3339 (`dc:date` and Atom-style dates),
/// then `YYYY-MM-DD HH:MM:SS` assumed UTC. First successful parse wins.
pub fn parse_timestamp(ts: &str) -> Option<i64> {
    let ts = ts.trim();
    if ts.is_empty() {
        return None;
    }
    if let Ok(dt) = OffsetDateTime::parse(ts, &Rfc2822) {
        return Some(dt.to_offset(UtcOffset::UTC).unix_timestamp());
    }
    if let Ok(dt) = OffsetDateTime::parse(ts, &Rfc3339) {
        return Some(dt.to_offset(UtcOffset::UTC).unix_timestamp());
    }
    if let Ok(dt) = PrimitiveDateTime::parse(ts, simple_format()) {
        return Some(dt.assume_utc().unix_timestamp());
    }
    None
}

/// Bucket an absolute unix timestamp into a relative-age label.
/// Future timestamps saturate to an age of zero.
pub fn relative_age(now_unix: i64, published_unix: i64) -> String {
    let mins = (now_unix - published_unix).max(0) / 60;
    if mins < 60 {
        format!("{mins} min ago")
    } else if mins < 24 * 60 {
        format!("{} hours ago", mins / 60)
    } else if mins < 48 * 60 {
        "Yesterday".to_string()
    } else {
        format!("{} days ago", mins / (24 * 60))
    }
}

/// Convenience: parse + bucket in one step, with the fail-open sentinel.
pub fn relative_age_of(now_unix: i64, ts: &str) -> String {
    match parse_timestamp(ts) {
        Some(published) => relative_age(now_unix, published),
        None => UNPARSEABLE_BUCKET.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn buckets_match_rule_table() {
        assert_eq!(relative_age(NOW, NOW - 30 * 60), "30 min ago");
        assert_eq!(relative_age(NOW, NOW - 25 * 3600), "Yesterday");
        assert_eq!(relative_age(NOW, NOW - 50 * 3600), "2 days ago");
        assert_eq!(relative_age(NOW, NOW - 5 * 3600), "5 hours ago");
    }

    #[test]
    fn future_timestamps_saturate() {
        assert_eq!(relative_age(NOW, NOW + 600), "0 min ago");
    }

    #[test]
    fn rfc2822_parses_first() {
        let ts = "Tue, 14 Nov 2023 22:13:20 +0000";
        assert_eq!(parse_timestamp(ts), Some(NOW));
    }

    #[test]
    fn rfc3339_is_second_priority() {
        let ts = "2023-11-14T22:13:20Z";
        assert_eq!(parse_timestamp(ts), Some(NOW));
    }

    #[test]
    fn bare_datetime_assumed_utc() {
        let ts = "2023-11-14 22:13:20";
        assert_eq!(parse_timestamp(ts), Some(NOW));
    }

    #[test]
    fn unparseable_falls_open() {
        assert_eq!(relative_age_of(NOW, "yesterday-ish"), UNPARSEABLE_BUCKET);
        assert_eq!(relative_age_of(NOW, ""), UNPARSEABLE_BUCKET);
    }
}
