//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Log output settings for the CLI
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG` when set
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.level.trim().is_empty() {
            return Err(ValidationError::EmptyLogLevel);
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info,ahp_engine=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info,ahp_engine=debug");
        assert!(!config.json);
    }

    #[test]
    fn test_blank_level_is_invalid() {
        let config = LoggingConfig {
            level: "  ".to_string(),
            json: false,
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyLogLevel));
    }
}
