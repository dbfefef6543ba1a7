// --- File: crates/agendly_gcal/src/routes.rs ---

use crate::handlers::{book_slot_handler, get_free_slots_handler, SchedulerState};
use agendly_common::services::{SharedAvailabilityStore, SharedCalendarService};
use agendly_config::AppConfig;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Creates a router containing all routes for the scheduling feature.
///
/// The calendar service and availability store are built once by the caller
/// and injected here; constructing them is the capability-ready step that
/// gates this surface.
pub fn routes(
    config: Arc<AppConfig>,
    calendar: SharedCalendarService,
    availability: SharedAvailabilityStore,
) -> Router {
    let state = Arc::new(SchedulerState {
        config,
        calendar,
        availability,
    });

    Router::new()
        .route("/slots", get(get_free_slots_handler))
        .route("/book", post(book_slot_handler))
        .with_state(state)
}
