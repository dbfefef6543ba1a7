// File: crates/agendly_gcal/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::{
    BookSlotRequest, BookingResponse, FreeSlotsQuery, FreeSlotsResponse, SlotView,
};

#[utoipa::path(
    get,
    path = "/slots",
    params(
        ("date" = String, Query, description = "Date in YYYY-MM-DD format", example = "2025-05-06", format = "date")
    ),
    responses(
        (status = 200, description = "Bookable slots for the date", body = FreeSlotsResponse,
         example = json!({
             "slots": [
                 { "start_time": "2025-05-06T10:30:00+00:00", "end_time": "2025-05-06T11:00:00+00:00", "duration_minutes": 30 }
             ]
         })
        ),
        (status = 400, description = "Invalid date format", body = String),
        (status = 503, description = "Calendar capability disabled", body = String),
        (status = 500, description = "Internal error", body = String)
    )
)]
fn doc_get_free_slots_handler() {}

#[utoipa::path(
    post,
    path = "/book",
    request_body(content = BookSlotRequest, example = json!({
        "start_time": "2025-05-06T10:30:00+00:00",
        "candidate_name": "Ada Lovelace",
        "candidate_email": "ada@example.com",
        "notes": "Backend role, second round"
    })),
    responses(
        (status = 200, description = "Booking result", body = BookingResponse,
         example = json!({
             "success": true,
             "event_id": "abc123xyz456",
             "meet_link": "https://meet.google.com/abc-defg-hij",
             "message": "Interview booked successfully."
         })
        ),
        (status = 409, description = "Slot already booked",
         example = json!("Requested time slot is no longer available")
        ),
        (status = 500, description = "Booking failed",
         example = json!("Failed to book interview.")
        )
    )
)]
fn doc_book_slot_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_get_free_slots_handler, doc_book_slot_handler),
    components(
        schemas(
            FreeSlotsQuery,
            FreeSlotsResponse,
            SlotView,
            BookSlotRequest,
            BookingResponse
        )
    ),
    tags(
        (name = "scheduler", description = "Interview slot and booking API")
    ),
    servers(
        (url = "/api", description = "Main API prefix")
    )
)]
pub struct SchedulerApiDoc;
