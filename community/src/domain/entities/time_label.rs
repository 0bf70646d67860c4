//! Relative time labels
//!
//! Posts and comments are shown with a human label ("Just now",
//! "2 hours ago", "Yesterday") instead of a clock value.

use chrono::{DateTime, Duration, Utc};

/// Label describing how long ago `created_at` was, seen from `now`
pub fn relative_time_label(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);

    // Future timestamps (clock skew) read as fresh
    if elapsed < Duration::minutes(1) {
        return "Just now".to_string();
    }
    if elapsed < Duration::hours(1) {
        return plural(elapsed.num_minutes(), "minute");
    }
    if elapsed < Duration::days(1) {
        return plural(elapsed.num_hours(), "hour");
    }

    match elapsed.num_days() {
        1 => "Yesterday".to_string(),
        days @ 2..=6 => format!("{} days ago", days),
        _ => created_at.format("%b %-d, %Y").to_string(),
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}
