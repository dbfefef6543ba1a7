// --- File: crates/agendly_slots/src/time.rs ---
//! Time-of-day parsing and slot-start generation.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeOfDayError {
    #[error("time of day must look like HH:MM, got '{0}'")]
    Malformed(String),
    #[error("hour {0} out of range 0..=23")]
    HourOutOfRange(u32),
    #[error("minute {0} out of range 0..=59")]
    MinuteOutOfRange(u32),
}

/// How malformed "HH:MM" strings are treated.
///
/// Legacy configuration data contains empty and truncated time strings, so
/// `Lenient` (map anything unparseable to midnight) is the default. `Strict`
/// surfaces the parse error instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    #[default]
    Lenient,
    Strict,
}

/// Parse an "HH:MM" string into a time of day. Seconds are always zero.
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime, TimeOfDayError> {
    let (hour_str, minute_str) = s
        .split_once(':')
        .ok_or_else(|| TimeOfDayError::Malformed(s.to_string()))?;
    let hour: u32 = hour_str
        .trim()
        .parse()
        .map_err(|_| TimeOfDayError::Malformed(s.to_string()))?;
    let minute: u32 = minute_str
        .trim()
        .parse()
        .map_err(|_| TimeOfDayError::Malformed(s.to_string()))?;
    if hour > 23 {
        return Err(TimeOfDayError::HourOutOfRange(hour));
    }
    if minute > 59 {
        return Err(TimeOfDayError::MinuteOutOfRange(minute));
    }
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(TimeOfDayError::HourOutOfRange(hour))
}

/// Parse an "HH:MM" string, applying the lenient-midnight fallback when asked.
pub fn time_of_day(s: &str, mode: ParseMode) -> Result<NaiveTime, TimeOfDayError> {
    match parse_time_of_day(s) {
        Ok(t) => Ok(t),
        Err(_) if mode == ParseMode::Lenient => Ok(NaiveTime::MIN),
        Err(e) => Err(e),
    }
}

/// Combine a calendar date with an "HH:MM" time-of-day into an instant.
/// Seconds and nanoseconds are zero.
pub fn resolve_time_of_day(
    date: NaiveDate,
    s: &str,
    mode: ParseMode,
) -> Result<DateTime<Utc>, TimeOfDayError> {
    let time = time_of_day(s, mode)?;
    Ok(Utc.from_utc_datetime(&date.and_time(time)))
}

/// Midnight (00:00) of the given date as an instant.
pub fn day_start(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// Every `t = window_start + k * step` with `t + step <= window_end`.
///
/// Empty when `window_start >= window_end` or `step_minutes <= 0`. For a
/// non-degenerate window this yields exactly `floor((end - start) / step)`
/// starts, the first equal to `window_start`.
pub fn generate_slot_starts(
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    step_minutes: i64,
) -> Vec<DateTime<Utc>> {
    if step_minutes <= 0 {
        return Vec::new();
    }
    let step = Duration::minutes(step_minutes);
    let mut starts = Vec::new();
    let mut t = window_start;
    while t + step <= window_end {
        starts.push(t);
        t += step;
    }
    starts
}
