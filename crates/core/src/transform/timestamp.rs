use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimestampFormats {
    pub unix_seconds: i64,
    pub unix_millis: i64,
    pub iso8601: String,
    pub rfc2822: String,
    pub date: String,
    pub time: String,
    pub relative: String,
}

/// Interpret a value written with 10 digits as seconds and anything else as
/// milliseconds. `digits` is the length of the literal as typed, so
/// zero-padded input keeps its unit.
pub fn normalize_timestamp(value: i64, digits: usize) -> i64 {
    if digits == 10 {
        value.saturating_mul(1000)
    } else {
        value
    }
}

/// Parse an integer timestamp literal into milliseconds since the epoch.
pub fn parse_timestamp(input: &str) -> Option<i64> {
    let literal = input.trim();
    let digits = literal.strip_prefix('-').unwrap_or(literal);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let value = literal.parse::<i64>().ok()?;
    Some(normalize_timestamp(value, digits.len()))
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Human relative time between `millis` and `now`.
///
/// Anything after `now` is "in the future"; anything older than 30 days is
/// reported as a calendar date.
pub fn relative_time(millis: i64, now: DateTime<Utc>) -> String {
    let diff = now.timestamp_millis() - millis;
    if diff < 0 {
        return "in the future".to_string();
    }

    let seconds = diff / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if seconds < 60 {
        plural(seconds, "second")
    } else if minutes < 60 {
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days < 30 {
        plural(days, "day")
    } else {
        DateTime::<Utc>::from_timestamp_millis(millis)
            .map(|dt| dt.format("%-m/%-d/%Y").to_string())
            .unwrap_or_default()
    }
}

/// Render a timestamp (seconds or milliseconds) in every supported form.
///
/// Returns `None` when the input is not an integer literal or lies outside
/// chrono's representable range.
pub fn timestamp_to_formats(input: &str, now: DateTime<Utc>) -> Option<TimestampFormats> {
    let millis = parse_timestamp(input)?;
    let dt = DateTime::<Utc>::from_timestamp_millis(millis)?;

    Some(TimestampFormats {
        unix_seconds: millis.div_euclid(1000),
        unix_millis: millis,
        iso8601: dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        rfc2822: dt.to_rfc2822(),
        date: dt.format("%Y-%m-%d").to_string(),
        time: dt.format("%H:%M:%S").to_string(),
        relative: relative_time(millis, now),
    })
}
