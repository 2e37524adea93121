//! Human-readable duration helpers.

use std::time::Duration;

/// Whole hours and remaining whole minutes in `duration`.
///
/// Sub-minute remainders are dropped: 7500 seconds is (2, 5).
pub fn hours_and_minutes(duration: Duration) -> (u64, u64) {
    let total_minutes = duration.as_secs() / 60;
    (total_minutes / 60, total_minutes % 60)
}

/// Abbreviated duration string: `"2 hr 5 min"`, `"2 hr"`, `"5 min"`.
///
/// Zero-length durations render as `"0 min"` rather than an empty string.
pub fn format_duration(duration: Duration) -> String {
    match hours_and_minutes(duration) {
        (0, 0) => "0 min".to_string(),
        (0, minutes) => format!("{minutes} min"),
        (hours, 0) => format!("{hours} hr"),
        (hours, minutes) => format!("{hours} hr {minutes} min"),
    }
}
