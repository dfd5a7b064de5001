//! Timestamp helpers.
//!
//! The console carries timestamps as wire strings (`YYYY-MM-DDTHH:MM`, what
//! a datetime-local input produces) and parses them only where arithmetic
//! or ordering is needed. The backend echoes richer RFC 3339 values on
//! read, so parsing accepts those too.

use chrono::{DateTime, Duration, Local, NaiveDateTime};

pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parse a timestamp in any of the shapes seen on the wire.
/// Returns `None` for empty or unrecognized input.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, WIRE_FORMAT))
        .ok()
}

pub fn format_timestamp(value: NaiveDateTime) -> String {
    value.format(WIRE_FORMAT).to_string()
}

/// Current local time in wire form, minute precision.
pub fn now_local() -> String {
    format_timestamp(Local::now().naive_local())
}

/// Current local time plus `hours`, in wire form.
pub fn now_local_plus_hours(hours: i64) -> String {
    format_timestamp(Local::now().naive_local() + Duration::hours(hours))
}

/// `value` plus `hours`, in wire form. `None` if `value` does not parse.
pub fn plus_hours(value: &str, hours: i64) -> Option<String> {
    parse_timestamp(value).map(|dt| format_timestamp(dt + Duration::hours(hours)))
}
