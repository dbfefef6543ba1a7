// File: services/agendly_backend/src/main.rs
use agendly_availability::routes as availability_routes;
use agendly_availability::store::JsonFileStore;
use agendly_common::logging;
use agendly_common::services::{BoxedService, SharedAvailabilityStore};
use agendly_config::load_config;
use agendly_gcal::routes as gcal_routes;
use agendly_gcal::service::build_calendar_service;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{info, warn};

const DEFAULT_AVAILABILITY_FILE: &str = "availability.json";

#[tokio::main]
async fn main() {
    logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));

    // The availability store backs both surfaces, so it is built
    // unconditionally. Runtime flags gate the handlers, not the wiring.
    let file_path = config
        .availability
        .as_ref()
        .map(|a| a.file_path.clone())
        .unwrap_or_else(|| DEFAULT_AVAILABILITY_FILE.to_string());
    let store: SharedAvailabilityStore = Arc::new(BoxedService(JsonFileStore::new(file_path)));

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to the Agendly API!" }))
        .merge(availability_routes::routes(config.clone(), store.clone()));

    // The scheduling surface needs a working calendar collaborator. When one
    // cannot be built (missing config or token), the routes are not mounted
    // at all rather than mounted broken.
    let api_router = if config.use_gcal {
        match build_calendar_service(&config) {
            Ok(calendar) => {
                api_router.merge(gcal_routes::routes(config.clone(), calendar, store.clone()))
            }
            Err(e) => {
                warn!("Calendar service unavailable, scheduling routes disabled: {e}");
                api_router
            }
        }
    } else {
        info!("use_gcal is off, scheduling routes disabled");
        api_router
    };

    let mut app = Router::new()
        .nest("/api", api_router)
        .layer(CorsLayer::permissive());

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use agendly_availability::doc::AvailabilityApiDoc;
        use agendly_gcal::doc::SchedulerApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Agendly API",
                version = "0.1.0",
                description = "Interview scheduling service API docs"
            ),
            components(),
            tags( (name = "Agendly", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(SchedulerApiDoc::openapi());
        openapi_doc.merge(AvailabilityApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    // Serve the built frontend in dev mode
    if cfg!(debug_assertions) {
        info!("Running in development mode, serving static files from ../../dist");
        app = app.fallback_service(ServeDir::new("../../dist"));
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind");
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
