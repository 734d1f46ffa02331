//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use chrono::Local;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::Timestamp;

/// Format a modification time in local time
///
/// Returns an empty string when there is no timestamp or it cannot be read.
pub fn parse_to_date_string(timestamp: Option<&Timestamp>) -> String {
    timestamp
        .and_then(Timestamp::to_datetime)
        .map(|dt| {
            dt.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_default()
}

/// Truncate a name to fit `width` terminal columns
///
/// Wide characters count double. Truncated names end with `…`.
///
/// # Examples
/// ```
/// use project_browser::logic::formatting::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Bridge", 10), "Bridge");
/// assert_eq!(truncate_to_width("Suspension Bridge", 8), "Suspens…");
/// assert_eq!(truncate_to_width("橋梁設計", 5), "橋梁…");
/// ```
pub fn truncate_to_width(name: &str, width: usize) -> String {
    if name.width() <= width {
        return name.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in name.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
