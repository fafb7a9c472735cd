//! Joining date parsing and checks

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

pub const INVALID_DATE: &str = "Invalid date";

/// Parses a joining date.
///
/// Accepts a calendar date (`2020-01-01`, taken as UTC midnight) or an
/// RFC 3339 date-time (`2020-01-01T09:30:00+02:00`). The year must be
/// exactly four digits; signed or longer years are rejected.
pub fn parse_joining_date(value: &str) -> Option<DateTime<Utc>> {
    if !has_four_digit_year(value) {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| Utc.from_utc_datetime(&naive));
    }

    // an offset can still push the UTC instant out of the four-digit range
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
        .filter(|dt| (0..=9999).contains(&dt.year()))
}

fn has_four_digit_year(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() > 4 && bytes[..4].iter().all(u8::is_ascii_digit) && bytes[4] == b'-'
}

/// Fails with `message` if the date lies after `now`, with [`INVALID_DATE`] if it does not parse
pub fn validate_not_future(value: &str, now: DateTime<Utc>, message: &str) -> Result<(), String> {
    match parse_joining_date(value) {
        Some(date) if date <= now => Ok(()),
        Some(_) => Err(message.to_string()),
        None => Err(INVALID_DATE.to_string()),
    }
}
