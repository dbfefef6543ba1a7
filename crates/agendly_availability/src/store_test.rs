#[cfg(test)]
mod tests {
    use crate::store::JsonFileStore;
    use agendly_common::services::{AvailabilityStore, DayAvailabilityRecord};
    use std::path::PathBuf;

    fn temp_store_path() -> PathBuf {
        std::env::temp_dir().join(format!("agendly-availability-{}.json", uuid::Uuid::new_v4()))
    }

    struct Cleanup(PathBuf);
    impl Drop for Cleanup {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    #[tokio::test]
    async fn missing_file_serves_the_default_week() {
        let path = temp_store_path();
        let store = JsonFileStore::new(&path);
        let records = store.fetch().await.unwrap();
        assert_eq!(records.len(), 7);
        assert!(records.iter().any(|r| r.day == "Martes" && r.active));
        assert!(records.iter().any(|r| r.day == "Domingo" && !r.active));
    }

    #[tokio::test]
    async fn save_then_fetch_round_trips() {
        let path = temp_store_path();
        let _cleanup = Cleanup(path.clone());
        let store = JsonFileStore::new(&path);

        let records = vec![DayAvailabilityRecord {
            day: "Martes".to_string(),
            from: "09:00".to_string(),
            to: "13:00".to_string(),
            active: true,
        }];
        store.save(records.clone()).await.unwrap();
        assert_eq!(store.fetch().await.unwrap(), records);
    }

    #[tokio::test]
    async fn file_uses_the_spanish_wire_keys() {
        let path = temp_store_path();
        let _cleanup = Cleanup(path.clone());
        let store = JsonFileStore::new(&path);

        store
            .save(vec![DayAvailabilityRecord {
                day: "Lunes".to_string(),
                from: "10:00".to_string(),
                to: "17:00".to_string(),
                active: false,
            }])
            .await
            .unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let record = &json["availability"][0];
        assert_eq!(record["dia"], "Lunes");
        assert_eq!(record["desde"], "10:00");
        assert_eq!(record["hasta"], "17:00");
        assert_eq!(record["activo"], false);
    }

    #[tokio::test]
    async fn malformed_file_is_an_error_not_defaults() {
        let path = temp_store_path();
        let _cleanup = Cleanup(path.clone());
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.fetch().await.is_err());
    }
}
