// --- File: crates/agendly_slots/src/booking.rs ---
//! Booking-request shaping. Data only: the network call belongs to the
//! calendar collaborator.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::engine::Slot;

/// A structured event-creation request for one chosen slot.
///
/// The idempotency key is minted fresh per construction so a retried booking
/// cannot create duplicate conference links on the provider side.
#[derive(Debug, Clone, Serialize)]
pub struct BookingRequest {
    pub slot: Slot,
    pub candidate_name: String,
    pub candidate_email: Option<String>,
    pub idempotency_key: String,
}

impl BookingRequest {
    pub fn new(
        slot: Slot,
        candidate_name: impl Into<String>,
        candidate_email: Option<String>,
    ) -> Self {
        Self {
            slot,
            candidate_name: candidate_name.into(),
            candidate_email,
            idempotency_key: generate_request_id(),
        }
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.slot.end()
    }

    /// Human-readable event title.
    pub fn summary(&self) -> String {
        format!("Interview - {}", self.candidate_name)
    }

    /// Attendee emails; empty when the candidate gave none.
    pub fn attendees(&self) -> Vec<String> {
        self.candidate_email.iter().cloned().collect()
    }
}

/// A fresh random request identifier. v4 UUIDs carry 122 random bits, which
/// makes collisions across retries negligible.
fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}
