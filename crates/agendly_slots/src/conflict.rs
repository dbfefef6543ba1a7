// --- File: crates/agendly_slots/src/conflict.rs ---
//! Busy intervals and half-open overlap detection.

use chrono::{DateTime, NaiveDate, Utc};

use crate::time::day_start;

/// A time range occupied by an existing calendar event, half-open `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl BusyInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Build an interval from optional event bounds.
    ///
    /// Providers sometimes report events without a usable start or end;
    /// those contribute no busy time and are skipped by returning `None`.
    pub fn from_bounds(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Option<Self> {
        Some(Self {
            start: start?,
            end: end?,
        })
    }

    /// Interval spanning whole calendar days. `end_exclusive` follows the
    /// provider convention that an all-day event's end date is the first day
    /// *after* the event.
    pub fn all_day(first: NaiveDate, end_exclusive: NaiveDate) -> Self {
        Self {
            start: day_start(first),
            end: day_start(end_exclusive),
        }
    }
}

/// True iff `[slot_start, slot_end)` overlaps any busy interval.
///
/// Half-open semantics: a slot ending exactly when a busy interval starts, or
/// starting exactly when one ends, is not a conflict.
pub fn overlaps(
    slot_start: DateTime<Utc>,
    slot_end: DateTime<Utc>,
    busy: &[BusyInterval],
) -> bool {
    busy.iter()
        .any(|interval| slot_start < interval.end && slot_end > interval.start)
}
