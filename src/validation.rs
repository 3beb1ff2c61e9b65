//! Validation helper functions for the daily planner
//!
//! This module contains the ISO-8601 parsing used for due dates and stored
//! timestamps, and the soft title-length check.

use crate::error::ValidationError;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Shortest title accepted by [`is_title_length_valid`]
pub const TITLE_MIN_CHARS: usize = 2;

/// Longest title accepted by [`is_title_length_valid`]
pub const TITLE_MAX_CHARS: usize = 20;

/// Format used when writing timestamps (fraction only printed when non-zero)
pub const ISO_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

/// Get the current local wall-clock time
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse an ISO-8601 date or date/time string
///
/// Accepts a calendar date (`2025-03-15`, read as midnight), a date with
/// time (`2025-03-15T09`, `2025-03-15T09:30`, `2025-03-15 09:30:00.250`), or
/// a timestamp with an offset (`2025-03-15T09:30+02:00`), which is converted
/// to local time. Every date and time field must be zero-padded, so
/// `2025-5-3` and `25-05-13` are rejected.
///
/// # Arguments
/// * `input` - Date string to parse
///
/// # Returns
/// Result containing the parsed timestamp or `ValidationError::InvalidDate`
pub fn parse_iso_datetime(input: &str) -> Result<NaiveDateTime, ValidationError> {
    let invalid = || ValidationError::InvalidDate {
        input: input.to_string(),
    };

    if !has_iso_shape(input) {
        return Err(invalid());
    }

    let date = NaiveDate::parse_from_str(&input[..10], "%Y-%m-%d").map_err(|_| invalid())?;
    if input.len() == 10 {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    if input.len() == 13 {
        let hour: u32 = input[11..].parse().map_err(|_| invalid())?;
        return date.and_hms_opt(hour, 0, 0).ok_or_else(invalid);
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(datetime);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Local).naive_local());
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(input, format) {
            return Ok(dt.with_timezone(&Local).naive_local());
        }
    }

    Err(invalid())
}

/// Check the fixed-width layout `YYYY-MM-DD[(T| )HH[:MM[:SS...]]...]`
///
/// Only positions are checked here; field ranges are left to chrono.
fn has_iso_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    let digits = |range: std::ops::Range<usize>| {
        range.clone().all(|i| bytes.get(i).is_some_and(u8::is_ascii_digit))
    };
    let byte_is = |i: usize, expected: &[u8]| bytes.get(i).is_some_and(|b| expected.contains(b));

    if !(digits(0..4) && byte_is(4, b"-") && digits(5..7) && byte_is(7, b"-") && digits(8..10)) {
        return false;
    }
    if bytes.len() == 10 {
        return true;
    }
    if !(byte_is(10, b"T ") && digits(11..13)) {
        return false;
    }
    if byte_is(13, b":") && !digits(14..16) {
        return false;
    }
    if byte_is(16, b":") && !digits(17..19) {
        return false;
    }
    true
}

/// Render a timestamp in the ISO-8601 form used by the task file
pub fn format_iso_datetime(datetime: &NaiveDateTime) -> String {
    datetime.format(ISO_DATETIME_FORMAT).to_string()
}

/// Check that a title, once trimmed, is between 2 and 20 characters long
///
/// Length is counted in characters, not bytes. This is a soft check:
/// item construction only rejects empty titles.
pub fn is_title_length_valid(title: &str) -> bool {
    let len = title.trim().chars().count();
    (TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&len)
}
