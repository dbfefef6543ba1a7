use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;

pub mod models;
pub use models::*;

static DOTENV_LOADED: OnceCell<()> = OnceCell::new();

/// Load `.env` exactly once per process. Missing files are fine.
pub fn ensure_dotenv_loaded() {
    DOTENV_LOADED.get_or_init(|| {
        let _ = dotenv::dotenv();
    });
}

/// Loads the unified application configuration.
///
/// Sources, later ones overriding earlier ones:
/// 1. `config/default.toml`
/// 2. `config/{RUN_ENV}.toml` (optional)
/// 3. Environment variables prefixed `AGENDLY`, `__`-separated
///    (e.g. `AGENDLY__SERVER__PORT=8086`)
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    let run_env = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".to_string());

    let config = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{run_env}")).required(false))
        .add_source(Environment::with_prefix("AGENDLY").separator("__"))
        .build()?;

    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduler_defaults_apply_when_section_missing() {
        let config: AppConfig = serde_json::from_str(
            r#"{ "server": { "host": "127.0.0.1", "port": 8086 } }"#,
        )
        .unwrap();
        let scheduler = config.scheduler();
        assert_eq!(scheduler.slot_minutes(), 30);
        assert!(scheduler.lenient_times());
        assert!(scheduler.windows.is_none());
        assert!(!config.use_gcal);
    }

    #[test]
    fn gcal_config_falls_back_to_public_api_base() {
        let gcal = GcalConfig {
            calendar_id: Some("primary".to_string()),
            api_base: None,
            token_env: None,
        };
        assert_eq!(gcal.api_base(), "https://www.googleapis.com/calendar/v3");
        assert_eq!(gcal.token_env(), "GOOGLE_CALENDAR_ACCESS_TOKEN");
    }
}
