// --- File: crates/agendly_slots/src/rules.rs ---
//! Availability rules and per-date resolution.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

use crate::time::{time_of_day, ParseMode, TimeOfDayError};
use crate::weekday::parse_weekday;

/// A bookable window within a day, `[from, to)` in local times of day.
///
/// Invariant: a window with `from >= to` is legal but contributes zero slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub from: NaiveTime,
    pub to: NaiveTime,
}

impl TimeWindow {
    pub fn new(from: NaiveTime, to: NaiveTime) -> Self {
        Self { from, to }
    }

    /// Parse a window from "HH:MM" strings.
    pub fn parse(from: &str, to: &str, mode: ParseMode) -> Result<Self, TimeOfDayError> {
        Ok(Self {
            from: time_of_day(from, mode)?,
            to: time_of_day(to, mode)?,
        })
    }
}

/// One weekday's configured availability. Read-only input to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityRule {
    pub weekday: Weekday,
    pub windows: Vec<TimeWindow>,
    pub active: bool,
}

impl AvailabilityRule {
    pub fn new(weekday: Weekday, windows: Vec<TimeWindow>, active: bool) -> Self {
        Self {
            weekday,
            windows,
            active,
        }
    }

    /// Resolve a stored record into a rule.
    ///
    /// `Ok(None)` when the weekday name is not in the translation table; such
    /// records simply never match a date. Time strings go through the given
    /// parse mode, so legacy empty strings become a degenerate midnight
    /// window under `Lenient` (zero slots) rather than an error.
    pub fn resolve(
        day: &str,
        from: &str,
        to: &str,
        active: bool,
        mode: ParseMode,
    ) -> Result<Option<Self>, TimeOfDayError> {
        let Some(weekday) = parse_weekday(day) else {
            return Ok(None);
        };
        let window = TimeWindow::parse(from, to, mode)?;
        Ok(Some(Self {
            weekday,
            windows: vec![window],
            active,
        }))
    }
}

/// Every rule whose weekday equals the date's weekday, in input order.
///
/// Inactive rules are returned too; the engine filters them before slot
/// generation. No match means an empty list, never an error.
pub fn rules_for_date(date: NaiveDate, rules: &[AvailabilityRule]) -> Vec<&AvailabilityRule> {
    let weekday = date.weekday();
    rules.iter().filter(|rule| rule.weekday == weekday).collect()
}
