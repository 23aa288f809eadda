// File: crates/chart-engine/src/format.rs
// Summary: Display formatting for numeric and temporal values.

use chrono::{Local, TimeZone};

/// Placeholder shown for values that cannot be formatted.
pub const PLACEHOLDER: &str = "\u{2014}";

/// Default decimal precision for tooltip values.
pub const TOOLTIP_PRECISION: usize = 2;

/// Fixed-point rendering with `precision` decimal places. Non-finite input
/// renders as the placeholder, never panics.
pub fn format_number(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{value:.precision$}")
}

/// Render epoch milliseconds as local time under a display pattern.
/// Supported patterns are `"HH:MM"` and `"MM/DD HH:MM"`; anything else
/// falls back to a long-form default rendering. Millis outside the
/// representable range render as the placeholder.
pub fn format_time(millis: f64, pattern: &str) -> String {
    if !millis.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let dt = match Local.timestamp_millis_opt(millis as i64).single() {
        Some(dt) => dt,
        None => return PLACEHOLDER.to_string(),
    };
    match pattern {
        "HH:MM" => dt.format("%H:%M").to_string(),
        "MM/DD HH:MM" => dt.format("%m/%d %H:%M").to_string(),
        _ => dt.format("%a %b %e %Y %H:%M:%S").to_string(),
    }
}
