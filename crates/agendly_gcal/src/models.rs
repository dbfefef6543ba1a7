// --- File: crates/agendly_gcal/src/models.rs ---
//! Wire shapes for the Google Calendar v3 REST API.

use agendly_common::services::CalendarEvent;
use agendly_slots::conflict::BusyInterval;
use agendly_slots::time::day_start;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// An event boundary as the provider reports it: either a precise timestamp
/// or an all-day date.
#[derive(Debug, Clone, Deserialize)]
pub struct EventTime {
    #[serde(rename = "dateTime")]
    pub date_time: Option<DateTime<Utc>>,
    pub date: Option<NaiveDate>,
}

impl EventTime {
    /// The boundary as an instant. All-day dates map to midnight; the
    /// provider already reports an all-day end as the exclusive next day.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.date_time.or_else(|| self.date.map(day_start))
    }
}

/// One fetched calendar event, as much of it as slot computation needs.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteEvent {
    pub id: Option<String>,
    pub status: Option<String>,
    pub start: Option<EventTime>,
    pub end: Option<EventTime>,
}

#[derive(Debug, Deserialize)]
pub struct EventListResponse {
    #[serde(default)]
    pub items: Vec<RemoteEvent>,
}

/// Busy interval of one event. `None` when the event is cancelled or lacks a
/// usable start or end; such events block nothing.
pub fn busy_interval(event: &RemoteEvent) -> Option<BusyInterval> {
    if event.status.as_deref() == Some("cancelled") {
        return None;
    }
    let start = event.start.as_ref().and_then(EventTime::instant);
    let end = event.end.as_ref().and_then(EventTime::instant);
    BusyInterval::from_bounds(start, end)
}

// --- events.insert payload ---

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTimePayload {
    pub date_time: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttendeePayload {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConferenceSolutionKeyPayload {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceCreateRequestPayload {
    pub request_id: String,
    pub conference_solution_key: ConferenceSolutionKeyPayload,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceDataPayload {
    pub create_request: ConferenceCreateRequestPayload,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemindersPayload {
    pub use_default: bool,
}

/// The full `events.insert` body, including the conference-creation request
/// tagged with the caller's idempotency key.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start: EventDateTimePayload,
    pub end: EventDateTimePayload,
    pub attendees: Vec<AttendeePayload>,
    pub conference_data: ConferenceDataPayload,
    pub reminders: RemindersPayload,
}

impl EventPayload {
    pub fn from_event(event: &CalendarEvent) -> Self {
        Self {
            summary: event.summary.clone(),
            description: event.description.clone(),
            start: EventDateTimePayload {
                date_time: event.start_time.clone(),
            },
            end: EventDateTimePayload {
                date_time: event.end_time.clone(),
            },
            attendees: event
                .attendee_email
                .iter()
                .map(|email| AttendeePayload {
                    email: email.clone(),
                })
                .collect(),
            conference_data: ConferenceDataPayload {
                create_request: ConferenceCreateRequestPayload {
                    request_id: event.request_id.clone(),
                    conference_solution_key: ConferenceSolutionKeyPayload {
                        kind: "hangoutsMeet".to_string(),
                    },
                },
            },
            reminders: RemindersPayload { use_default: true },
        }
    }
}

// --- events.insert response ---

#[derive(Debug, Clone, Deserialize)]
pub struct ConferenceEntryPoint {
    #[serde(rename = "entryPointType")]
    pub entry_point_type: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConferenceDataResponse {
    #[serde(rename = "entryPoints", default)]
    pub entry_points: Vec<ConferenceEntryPoint>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedEvent {
    pub id: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "hangoutLink")]
    pub hangout_link: Option<String>,
    #[serde(rename = "conferenceData")]
    pub conference_data: Option<ConferenceDataResponse>,
}

impl CreatedEvent {
    /// The video entry point's URI, falling back to the legacy hangout link.
    pub fn meet_link(&self) -> Option<String> {
        self.conference_data
            .iter()
            .flat_map(|data| data.entry_points.iter())
            .find(|entry| entry.entry_point_type.as_deref() == Some("video"))
            .and_then(|entry| entry.uri.clone())
            .or_else(|| self.hangout_link.clone())
    }
}
