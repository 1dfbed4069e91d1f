//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `AHP_ENGINE` prefix and
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use ahp_engine::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("CR threshold {}", config.engine.consistency_threshold);
//! ```

mod engine;
mod error;
mod logging;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment is a valid setup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Priority pipeline settings (consistency threshold)
    #[serde(default)]
    pub engine: EngineConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `AHP_ENGINE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AHP_ENGINE__ENGINE__CONSISTENCY_THRESHOLD=0.2` -> `engine.consistency_threshold = 0.2`
    /// - `AHP_ENGINE__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AHP_ENGINE")
                    .separator("__")
                    .try_parsing(true),
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
        self.engine.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const THRESHOLD_VAR: &str = "AHP_ENGINE__ENGINE__CONSISTENCY_THRESHOLD";
    const LEVEL_VAR: &str = "AHP_ENGINE__LOGGING__LEVEL";
    const JSON_VAR: &str = "AHP_ENGINE__LOGGING__JSON";

    fn clear_env() {
        env::remove_var(THRESHOLD_VAR);
        env::remove_var(LEVEL_VAR);
        env::remove_var(JSON_VAR);
    }

    #[test]
    fn test_load_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.engine, EngineConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var(THRESHOLD_VAR, "0.2");
        env::set_var(LEVEL_VAR, "warn");
        env::set_var(JSON_VAR, "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.engine.consistency_threshold, 0.2);
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.json);
    }

    #[test]
    fn test_out_of_range_threshold_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var(THRESHOLD_VAR, "1.5");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidThreshold(1.5))
        );
    }
}
