//! ISO 8601 parsing for version modification dates.
//!
//! The versioned store reports dates with millisecond precision and an
//! offset, but older imports omitted the offset entirely. Both are accepted;
//! a missing offset means UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{BugError, Result};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an ISO 8601 date string into a UTC instant.
pub fn parse_from_iso(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    // "+0200" instead of "+02:00"
    if let Ok(parsed) = DateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(BugError::InvalidDate(format!(
        "'{value}' is not an ISO 8601 date"
    )))
}

/// Whole Unix epoch seconds for an instant; sub-second precision is dropped.
#[must_use]
pub fn format_as_timestamp(instant: &DateTime<Utc>) -> i64 {
    instant.timestamp()
}
