//! `dateAccessed` parsing and display
//!
//! Catalog timestamps are free-form strings. The accepted forms, tried in order:
//! - RFC 3339 (`2017-05-01T12:00:00Z`, `2017-05-01T12:00:00+02:00`)
//! - naive date-time (`2017-05-01T12:00:00`, `2017-05-01 12:00:00`, `2017-05-01T12:00`), read as UTC
//! - plain date (`2017-05-01`), read as midnight UTC

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a catalog timestamp into an absolute point in time
///
/// Returns `None` for anything that does not match one of the accepted forms.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Format a timestamp the way the detail view shows it (`Mon May 01 2017`)
#[must_use]
pub fn format_accessed_date(at: &DateTime<Utc>) -> String {
    at.format("%a %b %d %Y").to_string()
}
