// --- File: crates/agendly_gcal/src/service.rs ---
//! Google Calendar service implementation over the v3 REST API.
//!
//! The widget authenticates with a user bearer token, so this client talks
//! plain REST with `reqwest` instead of the service-account SDK. Token
//! acquisition itself stays outside; the token arrives via configuration.

use agendly_common::services::{
    BoxFuture, BoxedService, CalendarEvent, CalendarEventResult, CalendarService,
    SharedCalendarService,
};
use agendly_config::{AppConfig, GcalConfig};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::models::{busy_interval, CreatedEvent, EventListResponse, EventPayload};

/// Errors that can occur when interacting with Google Calendar.
#[derive(Error, Debug)]
pub enum GcalServiceError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Google Calendar returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Calendar configuration section missing")]
    MissingConfig,
    #[error("Missing bearer token: set {0}")]
    MissingToken(String),
}

/// Google Calendar client bound to one bearer credential.
pub struct RestCalendarService {
    client: reqwest::Client,
    api_base: String,
    token: String,
}

impl RestCalendarService {
    pub fn new(api_base: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
            token: token.into(),
        }
    }

    /// Build the client from config, reading the bearer token from the
    /// configured env var.
    pub fn from_config(config: &GcalConfig) -> Result<Self, GcalServiceError> {
        let token = std::env::var(config.token_env())
            .map_err(|_| GcalServiceError::MissingToken(config.token_env().to_string()))?;
        Ok(Self::new(config.api_base(), token))
    }

    fn events_url(&self, calendar_id: &str) -> String {
        format!(
            "{}/calendars/{}/events",
            self.api_base,
            encode_path_segment(calendar_id)
        )
    }

    async fn checked(response: reqwest::Response) -> Result<reqwest::Response, GcalServiceError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(GcalServiceError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// Calendar ids are usually "primary" or an email address; escape the few
/// characters that would break the path.
fn encode_path_segment(segment: &str) -> String {
    segment
        .replace('%', "%25")
        .replace('/', "%2F")
        .replace('?', "%3F")
        .replace('#', "%23")
        .replace('@', "%40")
}

impl CalendarService for RestCalendarService {
    type Error = GcalServiceError;

    fn get_busy_times(
        &self,
        calendar_id: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> BoxFuture<'_, Vec<(DateTime<Utc>, DateTime<Utc>)>, Self::Error> {
        let url = self.events_url(calendar_id);
        Box::pin(async move {
            let response = self
                .client
                .get(url)
                .bearer_auth(&self.token)
                .query(&[
                    ("timeMin", start_time.to_rfc3339()),
                    ("timeMax", end_time.to_rfc3339()),
                    ("singleEvents", "true".to_string()),
                    ("orderBy", "startTime".to_string()),
                ])
                .send()
                .await?;
            let response = Self::checked(response).await?;
            let list: EventListResponse = response.json().await?;

            // Events with missing bounds are non-blocking, not errors
            let mut busy: Vec<(DateTime<Utc>, DateTime<Utc>)> = list
                .items
                .iter()
                .filter_map(busy_interval)
                .map(|interval| (interval.start, interval.end))
                .collect();
            busy.sort_by_key(|period| period.0);
            debug!("Fetched {} busy periods", busy.len());
            Ok(busy)
        })
    }

    fn create_event(
        &self,
        calendar_id: &str,
        event: CalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error> {
        let url = self.events_url(calendar_id);
        Box::pin(async move {
            let payload = EventPayload::from_event(&event);
            let response = self
                .client
                .post(url)
                .bearer_auth(&self.token)
                .query(&[("conferenceDataVersion", "1")])
                .json(&payload)
                .send()
                .await?;
            let response = Self::checked(response).await?;
            let created: CreatedEvent = response.json().await?;

            Ok(CalendarEventResult {
                event_id: created.id.clone(),
                status: created
                    .status
                    .clone()
                    .unwrap_or_else(|| "confirmed".to_string()),
                meet_link: created.meet_link(),
            })
        })
    }
}

/// Wire the REST client into the shared dyn handle the handlers consume.
/// This is the one-time capability initialization: when it fails (no config,
/// no token), the booking surface stays unavailable.
pub fn build_calendar_service(config: &AppConfig) -> Result<SharedCalendarService, GcalServiceError> {
    let gcal_config = config.gcal.as_ref().ok_or(GcalServiceError::MissingConfig)?;
    let service = RestCalendarService::from_config(gcal_config)?;
    Ok(Arc::new(BoxedService(service)))
}
