// --- File: crates/agendly_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Google Calendar Config ---
// Holds non-secret calendar config. The bearer token is loaded directly from
// an env var (GOOGLE_CALENDAR_ACCESS_TOKEN by default) and never serialized.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GcalConfig {
    pub calendar_id: Option<String>,
    /// Base URL of the Calendar API, overridable for tests.
    pub api_base: Option<String>,
    /// Name of the env var holding the bearer token.
    pub token_env: Option<String>,
}

impl GcalConfig {
    pub fn api_base(&self) -> &str {
        self.api_base
            .as_deref()
            .unwrap_or("https://www.googleapis.com/calendar/v3")
    }

    pub fn token_env(&self) -> &str {
        self.token_env
            .as_deref()
            .unwrap_or("GOOGLE_CALENDAR_ACCESS_TOKEN")
    }
}

// --- Slot Scheduling Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WindowConfig {
    pub from: String, // "HH:MM"
    pub to: String,   // "HH:MM"
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SchedulerConfig {
    /// Fixed slot length in minutes; also the generation step.
    pub slot_minutes: Option<i64>,
    /// When set, these windows replace each rule's own from/to during slot
    /// generation. The deployed setup pins 10:00-11:00 and 15:00-17:00 here.
    pub windows: Option<Vec<WindowConfig>>,
    /// Accept malformed "HH:MM" strings as midnight instead of rejecting them.
    pub lenient_times: Option<bool>,
}

impl SchedulerConfig {
    pub const DEFAULT_SLOT_MINUTES: i64 = 30;

    pub fn slot_minutes(&self) -> i64 {
        self.slot_minutes.unwrap_or(Self::DEFAULT_SLOT_MINUTES)
    }

    pub fn lenient_times(&self) -> bool {
        self.lenient_times.unwrap_or(true)
    }
}

// --- Availability Store Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AvailabilityConfig {
    /// Path of the JSON document holding the weekly availability records.
    pub file_path: String,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_gcal: bool,
    #[serde(default)]
    pub use_availability: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub gcal: Option<GcalConfig>,
    #[serde(default)]
    pub scheduler: Option<SchedulerConfig>,
    #[serde(default)]
    pub availability: Option<AvailabilityConfig>,
}

impl AppConfig {
    /// Scheduler settings with defaults applied when the section is absent.
    pub fn scheduler(&self) -> SchedulerConfig {
        self.scheduler.clone().unwrap_or_default()
    }
}
