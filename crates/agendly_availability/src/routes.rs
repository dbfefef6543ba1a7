// --- File: crates/agendly_availability/src/routes.rs ---

use crate::handlers::{get_availability_handler, save_availability_handler, AvailabilityState};
use agendly_common::services::SharedAvailabilityStore;
use agendly_config::AppConfig;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Creates a router containing all routes for the availability editor.
pub fn routes(config: Arc<AppConfig>, store: SharedAvailabilityStore) -> Router {
    let state = Arc::new(AvailabilityState { config, store });

    Router::new()
        .route(
            "/availability",
            get(get_availability_handler).post(save_availability_handler),
        )
        .with_state(state)
}
