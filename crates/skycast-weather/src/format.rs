//! Timestamp formatting shared by all presentation front-ends.
//!
//! OpenWeatherMap payloads carry UTC unix timestamps plus a per-location
//! `timezone_offset`; display always happens in the location's local time.

use chrono::{DateTime, Utc};

fn shifted(timestamp: i64, offset_secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(timestamp + offset_secs, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

/// Local clock time, e.g. "3:05 PM".
pub fn local_time(timestamp: i64, offset_secs: i64) -> String {
    shifted(timestamp, offset_secs).format("%-I:%M %p").to_string()
}

/// Abbreviated weekday, e.g. "Mon".
pub fn short_weekday(timestamp: i64, offset_secs: i64) -> String {
    shifted(timestamp, offset_secs).format("%a").to_string()
}

/// Full date for headers, e.g. "Monday, June 1".
pub fn long_date(timestamp: i64, offset_secs: i64) -> String {
    shifted(timestamp, offset_secs).format("%A, %B %-d").to_string()
}

/// Whether `now` falls between sunrise and sunset (all provider UTC
/// timestamps for the same location).
pub fn is_daytime(sunrise: i64, sunset: i64, now: i64) -> bool {
    now > sunrise && now < sunset
}
