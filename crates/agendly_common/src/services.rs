// --- File: crates/agendly_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! The slot engine itself is pure; everything it needs from the outside world
//! (busy events, the weekly availability records, the event-creation sink)
//! arrives through the traits defined here. This keeps handlers testable with
//! mocks and decouples the HTTP crates from concrete providers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for
/// Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A trait for calendar provider operations.
///
/// Supplies the busy events of a calendar and accepts event-creation requests.
/// Token acquisition and transport details belong to the implementation.
pub trait CalendarService: Send + Sync {
    /// Error type returned by calendar service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Get busy time intervals within a specified time range.
    ///
    /// Intervals are reported sorted by start. Events the provider reports
    /// without a usable start or end are skipped, not surfaced as errors.
    #[allow(clippy::type_complexity)]
    fn get_busy_times(
        &self,
        calendar_id: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> BoxFuture<'_, Vec<(DateTime<Utc>, DateTime<Utc>)>, Self::Error>;

    /// Create a calendar event, requesting a conference link for it.
    fn create_event(
        &self,
        calendar_id: &str,
        event: CalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error>;
}

/// A trait for the weekly-availability store.
///
/// A simple fetch/save pair over the per-weekday records the operator edits.
pub trait AvailabilityStore: Send + Sync {
    /// Error type returned by store operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch all stored weekday records.
    fn fetch(&self) -> BoxFuture<'_, Vec<DayAvailabilityRecord>, Self::Error>;

    /// Replace the stored records with the given list.
    fn save(&self, records: Vec<DayAvailabilityRecord>) -> BoxFuture<'_, (), Self::Error>;
}

/// Object-safe handles used by handlers and the backend wiring.
pub type SharedCalendarService = Arc<dyn CalendarService<Error = BoxedError>>;
pub type SharedAvailabilityStore = Arc<dyn AvailabilityStore<Error = BoxedError>>;

/// Adapter that erases a service's concrete error type into [`BoxedError`],
/// so differently-typed implementations can share one dyn handle.
pub struct BoxedService<S>(pub S);

impl<S: CalendarService> CalendarService for BoxedService<S> {
    type Error = BoxedError;

    fn get_busy_times(
        &self,
        calendar_id: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> BoxFuture<'_, Vec<(DateTime<Utc>, DateTime<Utc>)>, Self::Error> {
        let fut = self.0.get_busy_times(calendar_id, start_time, end_time);
        Box::pin(async move { fut.await.map_err(|e| BoxedError(Box::new(e))) })
    }

    fn create_event(
        &self,
        calendar_id: &str,
        event: CalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error> {
        let fut = self.0.create_event(calendar_id, event);
        Box::pin(async move { fut.await.map_err(|e| BoxedError(Box::new(e))) })
    }
}

impl<S: AvailabilityStore> AvailabilityStore for BoxedService<S> {
    type Error = BoxedError;

    fn fetch(&self) -> BoxFuture<'_, Vec<DayAvailabilityRecord>, Self::Error> {
        let fut = self.0.fetch();
        Box::pin(async move { fut.await.map_err(|e| BoxedError(Box::new(e))) })
    }

    fn save(&self, records: Vec<DayAvailabilityRecord>) -> BoxFuture<'_, (), Self::Error> {
        let fut = self.0.save(records);
        Box::pin(async move { fut.await.map_err(|e| BoxedError(Box::new(e))) })
    }
}

/// One weekday's availability record as the editor stores it.
///
/// The wire keys are Spanish because that is what the deployed configuration
/// data and the editing UI use.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayAvailabilityRecord {
    /// Weekday name, localized or canonical (e.g. "Martes", "Tuesday", "Mié").
    #[serde(rename = "dia")]
    pub day: String,
    /// Window start, "HH:MM". May be empty in legacy records.
    #[serde(rename = "desde")]
    pub from: String,
    /// Window end, "HH:MM". May be empty in legacy records.
    #[serde(rename = "hasta")]
    pub to: String,
    /// Whether the day is bookable at all.
    #[serde(rename = "activo")]
    pub active: bool,
}

/// An event-creation request as handed to the calendar provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// The start time of the event, RFC 3339.
    pub start_time: String,
    /// The end time of the event, RFC 3339.
    pub end_time: String,
    /// The summary or title of the event.
    pub summary: String,
    /// An optional description of the event.
    pub description: Option<String>,
    /// Attendee email, when the candidate provided one.
    pub attendee_email: Option<String>,
    /// Idempotency key tagged onto the conference-creation request so a
    /// retried booking cannot mint a second meeting link.
    pub request_id: String,
}

/// Represents the result of a calendar event operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEventResult {
    /// The ID of the event.
    pub event_id: Option<String>,
    /// The status of the event.
    pub status: String,
    /// Video-conference link, when the provider minted one.
    pub meet_link: Option<String>,
}
