// --- File: crates/agendly_slots/src/lib.rs ---
//! Pure free-slot computation: interval arithmetic, weekday-rule resolution,
//! conflict checking and booking-request shaping. No I/O lives here; callers
//! feed in the day's busy events and the availability records and get back
//! the bookable slots.

// Declare modules within this crate
pub mod booking;
pub mod conflict;
pub mod engine;
#[cfg(test)]
mod engine_proptest;
pub mod rules;
pub mod time;
pub mod weekday;

pub use booking::BookingRequest;
pub use conflict::{overlaps, BusyInterval};
pub use engine::{compute_free_slots, Slot};
pub use rules::{rules_for_date, AvailabilityRule, TimeWindow};
pub use time::{generate_slot_starts, resolve_time_of_day, ParseMode, TimeOfDayError};
pub use weekday::parse_weekday;
