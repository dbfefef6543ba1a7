// --- File: crates/agendly_gcal/src/handlers.rs ---
use agendly_common::services::{
    CalendarEvent, DayAvailabilityRecord, SharedAvailabilityStore, SharedCalendarService,
};
use agendly_config::AppConfig;
use agendly_slots::booking::BookingRequest;
use agendly_slots::conflict::{overlaps, BusyInterval};
use agendly_slots::engine::{compute_free_slots, Slot};
use agendly_slots::rules::{AvailabilityRule, TimeWindow};
use agendly_slots::time::{day_start, ParseMode};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

// Shared state needed by the scheduling handlers. Both collaborators are
// injected at router build time; a missing capability never reaches here.
#[derive(Clone)]
pub struct SchedulerState {
    pub config: Arc<AppConfig>,
    pub calendar: SharedCalendarService,
    pub availability: SharedAvailabilityStore,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct FreeSlotsQuery {
    /// Date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-05-06"))]
    pub date: String,
}

#[derive(Serialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SlotView {
    #[cfg_attr(feature = "openapi", schema(example = "2025-05-06T10:30:00+00:00"))]
    pub start_time: String, // ISO 8601 format
    #[cfg_attr(feature = "openapi", schema(example = "2025-05-06T11:00:00+00:00"))]
    pub end_time: String, // ISO 8601 format
    #[cfg_attr(feature = "openapi", schema(example = 30))]
    pub duration_minutes: i64,
}

impl From<Slot> for SlotView {
    fn from(slot: Slot) -> Self {
        Self {
            start_time: slot.start.to_rfc3339(),
            end_time: slot.end().to_rfc3339(),
            duration_minutes: slot.duration_minutes,
        }
    }
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FreeSlotsResponse {
    pub slots: Vec<SlotView>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookSlotRequest {
    /// Chosen slot start, RFC 3339
    pub start_time: String,
    pub candidate_name: String,
    pub candidate_email: Option<String>,
    /// Free-form note, ends up in the event description
    pub notes: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingResponse {
    pub success: bool,
    pub event_id: Option<String>,
    pub meet_link: Option<String>,
    pub message: String,
}

fn parse_mode(config: &AppConfig) -> ParseMode {
    if config.scheduler().lenient_times() {
        ParseMode::Lenient
    } else {
        ParseMode::Strict
    }
}

/// Resolve stored records into rules. Records with unknown weekday names are
/// skipped; a malformed stored time under strict mode is a server-side error.
fn resolve_rules(
    records: &[DayAvailabilityRecord],
    mode: ParseMode,
) -> Result<Vec<AvailabilityRule>, (StatusCode, String)> {
    let mut rules = Vec::with_capacity(records.len());
    for record in records {
        let resolved = AvailabilityRule::resolve(
            &record.day,
            &record.from,
            &record.to,
            record.active,
            mode,
        )
        .map_err(|e| {
            info!("Rejecting stored availability record {:?}: {}", record.day, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Invalid availability configuration on server.".to_string(),
            )
        })?;
        if let Some(rule) = resolved {
            rules.push(rule);
        }
    }
    Ok(rules)
}

/// The fixed-window override from config, when one is set.
fn window_override(
    config: &AppConfig,
    mode: ParseMode,
) -> Result<Option<Vec<TimeWindow>>, (StatusCode, String)> {
    let Some(windows) = config.scheduler().windows else {
        return Ok(None);
    };
    let mut parsed = Vec::with_capacity(windows.len());
    for window in &windows {
        parsed.push(TimeWindow::parse(&window.from, &window.to, mode).map_err(|e| {
            info!("Invalid configured window {:?}-{:?}: {}", window.from, window.to, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Invalid scheduling window configuration on server.".to_string(),
            )
        })?);
    }
    Ok(Some(parsed))
}

fn calendar_id(state: &SchedulerState) -> Result<String, (StatusCode, String)> {
    let gcal_config = state.config.gcal.as_ref().ok_or_else(|| {
        info!("GCal configuration missing in AppConfig.");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server configuration error: calendar config missing.".to_string(),
        )
    })?;
    gcal_config.calendar_id.clone().ok_or_else(|| {
        info!("GCal calendar_id missing in GcalConfig.");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server configuration error: calendar ID missing.".to_string(),
        )
    })
}

/// Handler to get the bookable slots of one day.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/slots",
    params(FreeSlotsQuery),
    responses(
        (status = 200, description = "Bookable slots for the date", body = FreeSlotsResponse),
        (status = 400, description = "Bad request (invalid date format)"),
        (status = 503, description = "Calendar capability disabled"),
        (status = 500, description = "Internal error")
    ),
    tag = "scheduler"
))]
pub async fn get_free_slots_handler(
    State(state): State<Arc<SchedulerState>>,
    Query(query): Query<FreeSlotsQuery>,
) -> Result<Json<FreeSlotsResponse>, (StatusCode, String)> {
    // Ensure the calendar capability is enabled via runtime config
    if !state.config.use_gcal {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Calendar service is disabled.".to_string(),
        ));
    }
    let calendar_id = calendar_id(&state)?;

    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d").map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            "Invalid date format (YYYY-MM-DD)".to_string(),
        )
    })?;

    // --- Fetch Busy Times (whole day, fences the slot query) ---
    let window_start = day_start(date);
    let window_end = day_start(date + Duration::days(1));
    let busy_periods = state
        .calendar
        .get_busy_times(&calendar_id, window_start, window_end)
        .await
        .map_err(|e| {
            info!("Error fetching busy times: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to query calendar availability".to_string(),
            )
        })?;
    let busy: Vec<BusyInterval> = busy_periods
        .into_iter()
        .map(|(start, end)| BusyInterval::new(start, end))
        .collect();

    // --- Resolve Availability Rules ---
    let records = state.availability.fetch().await.map_err(|e| {
        info!("Error fetching availability records: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to load availability configuration".to_string(),
        )
    })?;
    let mode = parse_mode(&state.config);
    let rules = resolve_rules(&records, mode)?;
    let windows = window_override(&state.config, mode)?;

    let slots = compute_free_slots(
        date,
        &busy,
        &rules,
        windows.as_deref(),
        state.config.scheduler().slot_minutes(),
    );

    Ok(Json(FreeSlotsResponse {
        slots: slots.into_iter().map(SlotView::from).collect(),
    }))
}

/// Handler to book a chosen slot.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/book",
    request_body = BookSlotRequest,
    responses(
        (status = 200, description = "Booking result", body = BookingResponse),
        (status = 400, description = "Bad request"),
        (status = 409, description = "Slot no longer available"),
        (status = 503, description = "Calendar capability disabled"),
        (status = 500, description = "Internal error")
    ),
    tag = "scheduler"
))]
pub async fn book_slot_handler(
    State(state): State<Arc<SchedulerState>>,
    Json(payload): Json<BookSlotRequest>,
) -> Result<Json<BookingResponse>, (StatusCode, String)> {
    if !state.config.use_gcal {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Calendar service is disabled.".to_string(),
        ));
    }
    let calendar_id = calendar_id(&state)?;

    if payload.candidate_name.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "candidate_name must not be empty".to_string(),
        ));
    }

    let slot_start: DateTime<Utc> = DateTime::parse_from_rfc3339(&payload.start_time)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                "Invalid start_time format".to_string(),
            )
        })?;
    let slot = Slot::new(slot_start, state.config.scheduler().slot_minutes());

    // Re-check the slot against fresh busy times before creating the event
    let busy_periods = state
        .calendar
        .get_busy_times(&calendar_id, slot.start, slot.end())
        .await
        .map_err(|e| {
            info!("Error checking availability: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to check slot availability".to_string(),
            )
        })?;
    let busy: Vec<BusyInterval> = busy_periods
        .into_iter()
        .map(|(start, end)| BusyInterval::new(start, end))
        .collect();
    if overlaps(slot.start, slot.end(), &busy) {
        return Err((
            StatusCode::CONFLICT,
            "Requested time slot is no longer available".to_string(),
        ));
    }

    let booking = BookingRequest::new(
        slot,
        payload.candidate_name.trim(),
        payload.candidate_email.clone(),
    );
    let event = CalendarEvent {
        start_time: booking.slot.start.to_rfc3339(),
        end_time: booking.end().to_rfc3339(),
        summary: booking.summary(),
        description: payload.notes.clone(),
        attendee_email: booking.candidate_email.clone(),
        request_id: booking.idempotency_key.clone(),
    };

    match state.calendar.create_event(&calendar_id, event).await {
        Ok(created) => {
            info!("Successfully created event: {:?}", created.event_id);
            Ok(Json(BookingResponse {
                success: true,
                event_id: created.event_id,
                meet_link: created.meet_link,
                message: "Interview booked successfully.".to_string(),
            }))
        }
        Err(e) => {
            info!("Error booking slot: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to book interview.".to_string(),
            ))
        }
    }
}
