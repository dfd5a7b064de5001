//! Elapsed-time display for completed records.

use crate::timefmt::parse_timestamp;

/// Human-readable elapsed time between two wire timestamps.
///
/// Returns `None` when either input is absent or unparseable. A negative
/// difference (record edited out of order) clamps to zero rather than
/// rendering a nonsensical negative split.
pub fn duration(start: Option<&str>, end: Option<&str>) -> Option<String> {
    let start = parse_timestamp(start?)?;
    let end = parse_timestamp(end?)?;

    let total_minutes = (end - start).num_minutes().max(0);
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        Some(format!("{hours} hours {minutes} minutes"))
    } else {
        Some(format!("{minutes} minutes"))
    }
}
