// --- File: crates/agendly_availability/src/store.rs ---
//! JSON-file-backed availability store.
//!
//! Weekly records live in one small JSON document on disk, edited through the
//! availability API. A missing file is not an error: the store serves a
//! default week until the first save creates it.

use agendly_common::services::{AvailabilityStore, BoxFuture, DayAvailabilityRecord};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Availability store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Availability store has malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// On-disk document shape: `{ "availability": [ ... ] }`.
#[derive(Debug, Serialize, Deserialize)]
struct AvailabilityDocument {
    availability: Vec<DayAvailabilityRecord>,
}

/// Store that persists the weekly records in a single JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The week served before any records have been saved: weekdays bookable
    /// 10:00-17:00, weekend off.
    pub fn default_week() -> Vec<DayAvailabilityRecord> {
        let day = |name: &str, active: bool| DayAvailabilityRecord {
            day: name.to_string(),
            from: "10:00".to_string(),
            to: "17:00".to_string(),
            active,
        };
        vec![
            day("Lunes", true),
            day("Martes", true),
            day("Miércoles", true),
            day("Jueves", true),
            day("Viernes", true),
            day("Sábado", false),
            day("Domingo", false),
        ]
    }

    async fn read_records(&self) -> Result<Vec<DayAvailabilityRecord>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                let document: AvailabilityDocument = serde_json::from_slice(&bytes)?;
                Ok(document.availability)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No availability file yet, serving defaults");
                Ok(Self::default_week())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn write_records(&self, records: Vec<DayAvailabilityRecord>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let document = AvailabilityDocument {
            availability: records,
        };
        let bytes = serde_json::to_vec_pretty(&document)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

impl AvailabilityStore for JsonFileStore {
    type Error = StoreError;

    fn fetch(&self) -> BoxFuture<'_, Vec<DayAvailabilityRecord>, Self::Error> {
        Box::pin(self.read_records())
    }

    fn save(&self, records: Vec<DayAvailabilityRecord>) -> BoxFuture<'_, (), Self::Error> {
        Box::pin(self.write_records(records))
    }
}
