// src/utils/format.rs
use chrono::{DateTime, Utc};

// Format the time elapsed since `time` for display
pub fn format_time_ago(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(time);

    let seconds = duration.num_seconds().max(0);

    if seconds < 60 {
        format!("{} seconds ago", seconds)
    } else if seconds < 3600 {
        format!("{} minutes ago", duration.num_minutes())
    } else if seconds < 86400 {
        format!("{} hours ago", duration.num_hours())
    } else {
        format!("{} days ago", duration.num_days())
    }
}

/// Five-cell bar, one filled cell per point.
pub fn meter_bar(score: u8, max: u8) -> String {
    let filled = usize::from(score.min(max));
    let empty = usize::from(max) - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
