#[cfg(test)]
mod tests {
    use crate::routes::routes;
    use agendly_common::services::{
        AvailabilityStore, BoxFuture, BoxedError, CalendarEvent, CalendarEventResult,
        CalendarService, DayAvailabilityRecord,
    };
    use agendly_config::{AppConfig, ServerConfig};
    use axum::body::Body;
    use chrono::{DateTime, Utc};
    use http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct NullCalendar;

    impl CalendarService for NullCalendar {
        type Error = BoxedError;

        fn get_busy_times(
            &self,
            _calendar_id: &str,
            _start_time: DateTime<Utc>,
            _end_time: DateTime<Utc>,
        ) -> BoxFuture<'_, Vec<(DateTime<Utc>, DateTime<Utc>)>, Self::Error> {
            Box::pin(async { Ok(Vec::new()) })
        }

        fn create_event(
            &self,
            _calendar_id: &str,
            _event: CalendarEvent,
        ) -> BoxFuture<'_, CalendarEventResult, Self::Error> {
            Box::pin(async {
                Ok(CalendarEventResult {
                    event_id: None,
                    status: "confirmed".to_string(),
                    meet_link: None,
                })
            })
        }
    }

    struct NullStore;

    impl AvailabilityStore for NullStore {
        type Error = BoxedError;

        fn fetch(&self) -> BoxFuture<'_, Vec<DayAvailabilityRecord>, Self::Error> {
            Box::pin(async { Ok(Vec::new()) })
        }

        fn save(&self, _records: Vec<DayAvailabilityRecord>) -> BoxFuture<'_, (), Self::Error> {
            Box::pin(async { Ok(()) })
        }
    }

    fn app() -> axum::Router {
        let config = Arc::new(AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8086,
            },
            use_gcal: false,
            use_availability: false,
            gcal: None,
            scheduler: None,
            availability: None,
        });
        routes(config, Arc::new(NullCalendar), Arc::new(NullStore))
    }

    #[tokio::test]
    async fn slot_routes_are_mounted() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/slots?date=2025-05-06")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        // disabled capability, but the route itself exists
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn unknown_paths_fall_through() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn booking_only_accepts_post() {
        let response = app()
            .oneshot(Request::builder().uri("/book").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
