// File: crates/agendly_availability/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::{AvailabilityDocumentBody, SaveResponse};

#[utoipa::path(
    get,
    path = "/availability",
    responses(
        (status = 200, description = "Stored weekly records", body = AvailabilityDocumentBody,
         example = json!({
             "availability": [
                 { "dia": "Martes", "desde": "10:00", "hasta": "17:00", "activo": true }
             ]
         })
        ),
        (status = 503, description = "Availability capability disabled", body = String),
        (status = 500, description = "Internal error", body = String)
    )
)]
fn doc_get_availability_handler() {}

#[utoipa::path(
    post,
    path = "/availability",
    request_body(content = AvailabilityDocumentBody, example = json!({
        "availability": [
            { "dia": "Martes", "desde": "10:00", "hasta": "17:00", "activo": true },
            { "dia": "Domingo", "desde": "10:00", "hasta": "17:00", "activo": false }
        ]
    })),
    responses(
        (status = 200, description = "Records saved", body = SaveResponse,
         example = json!({ "ok": true })
        ),
        (status = 400, description = "A record failed validation", body = String),
        (status = 503, description = "Availability capability disabled", body = String),
        (status = 500, description = "Internal error", body = String)
    )
)]
fn doc_save_availability_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_get_availability_handler, doc_save_availability_handler),
    components(
        schemas(
            AvailabilityDocumentBody,
            SaveResponse
        )
    ),
    tags(
        (name = "availability", description = "Weekly availability editor API")
    ),
    servers(
        (url = "/api", description = "Main API prefix")
    )
)]
pub struct AvailabilityApiDoc;
