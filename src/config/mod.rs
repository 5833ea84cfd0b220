//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SAKHI` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use sakhi::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Profile stored at {}", config.storage.profile_path().display());
//! ```

mod assistant;
mod error;
mod logging;
mod storage;
mod tracking;

pub use assistant::AssistantConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use storage::StorageConfig;
pub use tracking::TrackingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Profile and message files
    #[serde(default)]
    pub storage: StorageConfig,

    /// Day counting rule
    #[serde(default)]
    pub tracking: TrackingConfig,

    /// Session context sizes
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SAKHI` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SAKHI__STORAGE__DATA_DIR=/var/lib/sakhi` -> `storage.data_dir`
    /// - `SAKHI__TRACKING__DAY_COUNTING=continuous` -> `tracking.day_counting`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SAKHI")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.assistant.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cycle::DayCounting;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const KEYS: [&str; 6] = [
        "SAKHI__STORAGE__DATA_DIR",
        "SAKHI__STORAGE__PROFILE_FILE",
        "SAKHI__TRACKING__DAY_COUNTING",
        "SAKHI__ASSISTANT__MESSAGE_WINDOW",
        "SAKHI__LOGGING__LEVEL",
        "SAKHI__LOGGING__JSON",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.storage.profile_file, "profile.json");
        assert_eq!(config.tracking.day_counting, DayCounting::Wrapped);
        assert_eq!(config.assistant.message_window, 15);
        assert_eq!(config.assistant.recent_symptoms, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SAKHI__STORAGE__DATA_DIR", "/tmp/sakhi-test");
        env::set_var("SAKHI__TRACKING__DAY_COUNTING", "continuous");
        env::set_var("SAKHI__ASSISTANT__MESSAGE_WINDOW", "30");
        env::set_var("SAKHI__LOGGING__LEVEL", "debug");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/sakhi-test"));
        assert_eq!(config.tracking.day_counting, DayCounting::Continuous);
        assert_eq!(config.assistant.message_window, 30);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_validate_rejects_bad_section() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SAKHI__LOGGING__LEVEL", "chatty");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_unknown_day_counting_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SAKHI__TRACKING__DAY_COUNTING", "sideways");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
