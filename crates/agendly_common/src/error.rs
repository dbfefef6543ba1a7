// --- File: crates/agendly_common/src/error.rs ---
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;
use thiserror::Error;
use tracing::warn;

/// The base error type shared across Agendly crates.
///
/// Feature crates keep their own `thiserror` enums and convert into this type
/// at the HTTP boundary when a generic answer is enough.
#[derive(Error, Debug)]
pub enum AgendlyError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a conflict (e.g., slot already taken)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred because a capability is switched off
    #[error("Service unavailable: {0}")]
    ServiceUnavailableError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for AgendlyError {
    fn status_code(&self) -> u16 {
        match self {
            AgendlyError::HttpError(_) => 500,
            AgendlyError::ParseError(_) => 400,
            AgendlyError::ConfigError(_) => 500,
            AgendlyError::ValidationError(_) => 400,
            AgendlyError::ExternalServiceError { .. } => 502,
            AgendlyError::ConflictError(_) => 409,
            AgendlyError::NotFoundError(_) => 404,
            AgendlyError::ServiceUnavailableError(_) => 503,
            AgendlyError::InternalError(_) => 500,
        }
    }
}

impl IntoResponse for AgendlyError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            warn!("{}", self);
        }
        (status, self.to_string()).into_response()
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, AgendlyError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, AgendlyError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, AgendlyError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| AgendlyError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, AgendlyError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| AgendlyError::InternalError(format!("{}: {}", f(), error)))
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> AgendlyError {
    AgendlyError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> AgendlyError {
    AgendlyError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> AgendlyError {
    AgendlyError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> AgendlyError {
    AgendlyError::ConflictError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> AgendlyError {
    AgendlyError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn service_unavailable<T: fmt::Display>(message: T) -> AgendlyError {
    AgendlyError::ServiceUnavailableError(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> AgendlyError {
    AgendlyError::InternalError(message.to_string())
}
