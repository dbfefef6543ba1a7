#[cfg(test)]
mod tests {
    use crate::routes::routes;
    use agendly_common::services::{
        AvailabilityStore, BoxFuture, BoxedError, CalendarEvent, CalendarEventResult,
        CalendarService, DayAvailabilityRecord,
    };
    use agendly_config::{
        AppConfig, AvailabilityConfig, GcalConfig, SchedulerConfig, ServerConfig, WindowConfig,
    };
    use axum::body::Body;
    use chrono::{DateTime, TimeZone, Utc};
    use http::{Request, StatusCode};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    // In-memory calendar double: serves canned busy periods, records created
    // events so assertions can inspect the payload.
    struct FakeCalendar {
        busy: Vec<(DateTime<Utc>, DateTime<Utc>)>,
        created: Arc<Mutex<Vec<CalendarEvent>>>,
    }

    impl CalendarService for FakeCalendar {
        type Error = BoxedError;

        fn get_busy_times(
            &self,
            _calendar_id: &str,
            _start_time: DateTime<Utc>,
            _end_time: DateTime<Utc>,
        ) -> BoxFuture<'_, Vec<(DateTime<Utc>, DateTime<Utc>)>, Self::Error> {
            let busy = self.busy.clone();
            Box::pin(async move { Ok(busy) })
        }

        fn create_event(
            &self,
            _calendar_id: &str,
            event: CalendarEvent,
        ) -> BoxFuture<'_, CalendarEventResult, Self::Error> {
            let created = self.created.clone();
            Box::pin(async move {
                created.lock().unwrap().push(event);
                Ok(CalendarEventResult {
                    event_id: Some("evt-1".to_string()),
                    status: "confirmed".to_string(),
                    meet_link: Some("https://meet.google.com/abc-defg-hij".to_string()),
                })
            })
        }
    }

    struct FakeStore {
        records: Vec<DayAvailabilityRecord>,
    }

    impl AvailabilityStore for FakeStore {
        type Error = BoxedError;

        fn fetch(&self) -> BoxFuture<'_, Vec<DayAvailabilityRecord>, Self::Error> {
            let records = self.records.clone();
            Box::pin(async move { Ok(records) })
        }

        fn save(&self, _records: Vec<DayAvailabilityRecord>) -> BoxFuture<'_, (), Self::Error> {
            Box::pin(async move { Ok(()) })
        }
    }

    fn test_config(use_gcal: bool) -> Arc<AppConfig> {
        Arc::new(AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8086,
            },
            use_gcal,
            use_availability: true,
            gcal: Some(GcalConfig {
                calendar_id: Some("primary".to_string()),
                api_base: None,
                token_env: None,
            }),
            scheduler: Some(SchedulerConfig {
                slot_minutes: Some(30),
                windows: Some(vec![
                    WindowConfig {
                        from: "10:00".to_string(),
                        to: "11:00".to_string(),
                    },
                    WindowConfig {
                        from: "15:00".to_string(),
                        to: "17:00".to_string(),
                    },
                ]),
                lenient_times: Some(true),
            }),
            availability: Some(AvailabilityConfig {
                file_path: "unused.json".to_string(),
            }),
        })
    }

    fn martes_record() -> DayAvailabilityRecord {
        DayAvailabilityRecord {
            day: "Martes".to_string(),
            from: "10:00".to_string(),
            to: "17:00".to_string(),
            active: true,
        }
    }

    fn app(
        config: Arc<AppConfig>,
        busy: Vec<(DateTime<Utc>, DateTime<Utc>)>,
        records: Vec<DayAvailabilityRecord>,
    ) -> (axum::Router, Arc<Mutex<Vec<CalendarEvent>>>) {
        let created = Arc::new(Mutex::new(Vec::new()));
        let calendar = Arc::new(FakeCalendar {
            busy,
            created: created.clone(),
        });
        let store = Arc::new(FakeStore { records });
        (routes(config, calendar, store), created)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn slots_reflect_busy_periods_and_fixed_windows() {
        // 2025-05-06 is a Tuesday; one busy period 10:00-10:30
        let busy = vec![(
            Utc.with_ymd_and_hms(2025, 5, 6, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 5, 6, 10, 30, 0).unwrap(),
        )];
        let (app, _) = app(test_config(true), busy, vec![martes_record()]);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/slots?date=2025-05-06")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let starts: Vec<&str> = json["slots"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["start_time"].as_str().unwrap())
            .collect();
        assert_eq!(
            starts,
            vec![
                "2025-05-06T10:30:00+00:00",
                "2025-05-06T15:00:00+00:00",
                "2025-05-06T15:30:00+00:00",
                "2025-05-06T16:00:00+00:00",
                "2025-05-06T16:30:00+00:00",
            ]
        );
    }

    #[tokio::test]
    async fn slots_empty_when_no_rule_matches_the_weekday() {
        // 2025-05-11 is a Sunday; only a Tuesday record exists
        let (app, _) = app(test_config(true), Vec::new(), vec![martes_record()]);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/slots?date=2025-05-11")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["slots"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn slots_require_the_capability_flag() {
        let (app, _) = app(test_config(false), Vec::new(), vec![martes_record()]);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/slots?date=2025-05-06")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn slots_reject_bad_dates() {
        let (app, _) = app(test_config(true), Vec::new(), vec![martes_record()]);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/slots?date=06-05-2025")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn booking_a_taken_slot_conflicts() {
        let busy = vec![(
            Utc.with_ymd_and_hms(2025, 5, 6, 10, 30, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 5, 6, 11, 0, 0).unwrap(),
        )];
        let (app, created) = app(test_config(true), busy, vec![martes_record()]);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/book")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{ "start_time": "2025-05-06T10:30:00+00:00", "candidate_name": "Ada" }"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert!(created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn booking_a_free_slot_creates_the_event() {
        let (app, created) = app(test_config(true), Vec::new(), vec![martes_record()]);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/book")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{
                            "start_time": "2025-05-06T10:30:00+00:00",
                            "candidate_name": "Ada Lovelace",
                            "candidate_email": "ada@example.com",
                            "notes": "Backend role"
                        }"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["event_id"], "evt-1");
        assert_eq!(json["meet_link"], "https://meet.google.com/abc-defg-hij");

        let events = created.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].summary, "Interview - Ada Lovelace");
        assert_eq!(events[0].attendee_email.as_deref(), Some("ada@example.com"));
        assert_eq!(events[0].end_time, "2025-05-06T11:00:00+00:00");
        assert!(!events[0].request_id.is_empty());
    }

    #[tokio::test]
    async fn booking_requires_a_candidate_name() {
        let (app, _) = app(test_config(true), Vec::new(), vec![martes_record()]);
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/book")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{ "start_time": "2025-05-06T10:30:00+00:00", "candidate_name": "  " }"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
