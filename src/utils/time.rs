//! Time utilities: parsing HH:MM, minutes since midnight, 12-hour clock formatting.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn minutes_of_day(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

/// Parse `HH:MM` (24h) into minutes since midnight.
pub fn parse_minutes(t: &str) -> AppResult<i64> {
    parse_time(t)
        .map(minutes_of_day)
        .ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn parse_optional_minutes(input: Option<&String>) -> AppResult<Option<i64>> {
    input.map(|s| parse_minutes(s)).transpose()
}

/// Current local wall-clock time as minutes since midnight.
pub fn now_minutes() -> i64 {
    minutes_of_day(Local::now().time())
}

/// Format minutes since midnight as a 12-hour clock string (`8:30 PM`).
///
/// Hour 0 is shown as 12 and hours above 12 have 12 subtracted. Values are
/// not wrapped into a single day: 1500 renders as `13:00 PM`.
pub fn format_clock(mins: i64) -> String {
    let hours = mins.div_euclid(60);
    let minutes = mins.rem_euclid(60);

    let shown = if hours > 12 {
        hours - 12
    } else if hours == 0 {
        12
    } else {
        hours
    };
    let suffix = if hours >= 12 { "PM" } else { "AM" };

    format!("{}:{:02} {}", shown, minutes, suffix)
}

/// Format minutes as `HH:MM` (24h), used for the configured end time.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
