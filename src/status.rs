//! Entity status lifecycle policy.
//!
//! Both meetings and visits share the same lifecycle rules: any status may
//! move to any other (the backend is the final authority), and moving to
//! Completed suggests an end timestamp when the record has none.

use chrono::{Duration, Local};

use crate::timefmt::{format_timestamp, parse_timestamp};

/// Whether a status transition is permitted.
///
/// The baseline is any-to-any, including backward moves. All call sites go
/// through here so the rule can be tightened (e.g. forbidding
/// Completed -> Pending) without touching the forms.
pub fn transition_allowed<S: Copy + Eq>(_from: S, _to: S) -> bool {
    true
}

/// End-timestamp suggestion for a transition to Completed.
///
/// Returns `Some(suggested_end)` only when the current end field is empty:
/// start + 1 hour, or now + 1 hour when the start is absent or unparseable.
/// An already-present end is left untouched (returns `None`). The value is
/// a pre-fill the user may still edit before saving, not a hard constraint.
pub fn end_time_on_complete(end: Option<&str>, start: Option<&str>) -> Option<String> {
    if end.map(str::trim).is_some_and(|e| !e.is_empty()) {
        return None;
    }
    let base = start
        .and_then(parse_timestamp)
        .unwrap_or_else(|| Local::now().naive_local());
    Some(format_timestamp(base + Duration::hours(1)))
}
