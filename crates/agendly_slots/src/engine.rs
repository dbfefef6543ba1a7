// --- File: crates/agendly_slots/src/engine.rs ---
//! The free-slot engine: availability rules minus busy intervals.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use serde::Serialize;

use crate::conflict::{overlaps, BusyInterval};
use crate::rules::{rules_for_date, AvailabilityRule, TimeWindow};
use crate::time::generate_slot_starts;

/// A fixed-duration, not-yet-booked candidate meeting start time.
///
/// Ephemeral: generated fresh per query, never persisted. Equality is
/// (start, duration).
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub start: DateTime<Utc>,
    pub duration_minutes: i64,
}

impl Slot {
    pub fn new(start: DateTime<Utc>, duration_minutes: i64) -> Self {
        Self {
            start,
            duration_minutes,
        }
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.start + Duration::minutes(self.duration_minutes)
    }
}

/// Compute the bookable slots for one calendar day.
///
/// For each active rule matching the date's weekday, candidate starts are
/// generated across `window_override` when supplied, otherwise across the
/// rule's own windows. Candidates overlapping any busy interval are dropped.
/// The result is sorted ascending by start and holds no duplicate starts even
/// when several rules match the same weekday.
///
/// Pure: identical inputs give identical output. Degenerate inputs (no
/// matching rule, inverted windows, non-positive step) yield an empty list,
/// never an error.
pub fn compute_free_slots(
    date: NaiveDate,
    busy: &[BusyInterval],
    rules: &[AvailabilityRule],
    window_override: Option<&[TimeWindow]>,
    step_minutes: i64,
) -> Vec<Slot> {
    let mut slots: Vec<Slot> = Vec::new();
    for rule in rules_for_date(date, rules) {
        if !rule.active {
            continue;
        }
        let windows = window_override.unwrap_or(&rule.windows);
        for window in windows {
            let window_start = Utc.from_utc_datetime(&date.and_time(window.from));
            let window_end = Utc.from_utc_datetime(&date.and_time(window.to));
            for candidate in generate_slot_starts(window_start, window_end, step_minutes) {
                let candidate_end = candidate + Duration::minutes(step_minutes);
                if !overlaps(candidate, candidate_end, busy) {
                    slots.push(Slot::new(candidate, step_minutes));
                }
            }
        }
    }
    slots.sort_by_key(|slot| slot.start);
    slots.dedup_by_key(|slot| slot.start);
    slots
}
