// --- File: crates/agendly_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod logging; // Logging utilities
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    config_error, conflict, external_service_error, internal_error, not_found,
    service_unavailable, validation_error, AgendlyError, Context, HttpStatusCode,
};

// Re-export the service seams most callers need
pub use services::{
    AvailabilityStore, BoxFuture, BoxedError, BoxedService, CalendarEvent, CalendarEventResult,
    CalendarService, DayAvailabilityRecord, SharedAvailabilityStore, SharedCalendarService,
};
