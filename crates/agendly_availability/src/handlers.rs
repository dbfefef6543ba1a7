// --- File: crates/agendly_availability/src/handlers.rs ---
use agendly_common::error::{service_unavailable, validation_error, AgendlyError, Context};
use agendly_common::services::{DayAvailabilityRecord, SharedAvailabilityStore};
use agendly_config::AppConfig;
use agendly_slots::time::{time_of_day, ParseMode};
use agendly_slots::weekday::parse_weekday;
use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone)]
pub struct AvailabilityState {
    pub config: Arc<AppConfig>,
    pub store: SharedAvailabilityStore,
}

#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AvailabilityDocumentBody {
    pub availability: Vec<DayAvailabilityRecord>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SaveResponse {
    pub ok: bool,
}

fn ensure_enabled(state: &AvailabilityState) -> Result<(), AgendlyError> {
    if state.config.use_availability {
        Ok(())
    } else {
        Err(service_unavailable("Availability editing is disabled."))
    }
}

fn parse_mode(config: &AppConfig) -> ParseMode {
    if config.scheduler().lenient_times() {
        ParseMode::Lenient
    } else {
        ParseMode::Strict
    }
}

/// Reject records the scheduler could never act on. Weekday names must come
/// from the known table; under strict mode the times must be well-formed too.
fn validate_records(
    records: &[DayAvailabilityRecord],
    mode: ParseMode,
) -> Result<(), AgendlyError> {
    for record in records {
        if parse_weekday(&record.day).is_none() {
            return Err(validation_error(format!(
                "Unknown weekday name: {:?}",
                record.day
            )));
        }
        for (label, value) in [("desde", &record.from), ("hasta", &record.to)] {
            if let Err(e) = time_of_day(value, mode) {
                return Err(validation_error(format!(
                    "Invalid {label} time for {:?}: {e}",
                    record.day
                )));
            }
        }
    }
    Ok(())
}

/// Handler returning the stored weekly availability records.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/availability",
    responses(
        (status = 200, description = "Stored weekly records", body = AvailabilityDocumentBody),
        (status = 503, description = "Availability capability disabled"),
        (status = 500, description = "Internal error")
    ),
    tag = "availability"
))]
pub async fn get_availability_handler(
    State(state): State<Arc<AvailabilityState>>,
) -> Result<Json<AvailabilityDocumentBody>, AgendlyError> {
    ensure_enabled(&state)?;
    let availability = state
        .store
        .fetch()
        .await
        .context("Failed to load availability records")?;
    Ok(Json(AvailabilityDocumentBody { availability }))
}

/// Handler replacing the stored weekly availability records.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/availability",
    request_body = AvailabilityDocumentBody,
    responses(
        (status = 200, description = "Records saved", body = SaveResponse),
        (status = 400, description = "A record failed validation"),
        (status = 503, description = "Availability capability disabled"),
        (status = 500, description = "Internal error")
    ),
    tag = "availability"
))]
pub async fn save_availability_handler(
    State(state): State<Arc<AvailabilityState>>,
    Json(payload): Json<AvailabilityDocumentBody>,
) -> Result<Json<SaveResponse>, AgendlyError> {
    ensure_enabled(&state)?;
    validate_records(&payload.availability, parse_mode(&state.config))?;

    state
        .store
        .save(payload.availability)
        .await
        .context("Failed to save availability records")?;
    Ok(Json(SaveResponse { ok: true }))
}
