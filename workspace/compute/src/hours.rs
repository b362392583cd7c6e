//! Hour-of-day parsing and the display labels derived from it.

use common::PENDING;

/// Hours reported as the morning peak window.
pub const MORNING_PEAK: std::ops::RangeInclusive<i64> = 6..=10;
/// Hours reported as the evening peak window.
pub const EVENING_PEAK: std::ops::RangeInclusive<i64> = 18..=22;

/// Reads the leading integer of an hour cell.
///
/// Leading whitespace and one sign character are accepted, then as many
/// digits as follow; anything after them is ignored, so `"06:00"` is 6.
/// Returns `None` when no digit is found.
pub fn parse_hour(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|hour| sign * hour)
}

/// Window label for an hour; hours inside a peak window report the whole window.
///
/// An hour with no successor (`i64::MAX`) reports `"Pending"`.
pub fn format_hour_range(hour: i64) -> String {
    if MORNING_PEAK.contains(&hour) {
        return window_label(&MORNING_PEAK);
    }
    if EVENING_PEAK.contains(&hour) {
        return window_label(&EVENING_PEAK);
    }
    match hour.checked_add(1) {
        Some(next) => format!("{:02}:00 - {:02}:00", hour, next),
        None => PENDING.to_string(),
    }
}

/// [`format_hour_range`] for a raw cell, `"Pending"` if it holds no hour.
pub fn format_time_range(value: &str) -> String {
    parse_hour(value)
        .map(format_hour_range)
        .unwrap_or_else(|| PENDING.to_string())
}

/// `"HH:00"` for a raw cell, `"Pending"` if it holds no hour.
pub fn format_hour_label(value: &str) -> String {
    parse_hour(value)
        .map(|hour| format!("{:02}:00", hour))
        .unwrap_or_else(|| PENDING.to_string())
}

fn window_label(window: &std::ops::RangeInclusive<i64>) -> String {
    format!("{:02}:00 - {:02}:00", window.start(), window.end())
}
