//! Engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::{ConsistencyGate, CONSISTENCY_RATIO_THRESHOLD};

/// Tunables for the priority pipeline
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Largest consistency ratio accepted by the gate
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,
}

impl EngineConfig {
    /// Builds the gate for this threshold.
    pub fn gate(&self) -> Result<ConsistencyGate, ValidationError> {
        self.validate()?;
        ConsistencyGate::new(self.consistency_threshold)
            .map_err(|_| ValidationError::InvalidThreshold(self.consistency_threshold))
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let t = self.consistency_threshold;
        if !(t > 0.0 && t < 1.0) {
            return Err(ValidationError::InvalidThreshold(t));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: default_consistency_threshold(),
        }
    }
}

fn default_consistency_threshold() -> f64 {
    CONSISTENCY_RATIO_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_conventional_threshold() {
        let config = EngineConfig::default();
        assert_eq!(config.consistency_threshold, 0.10);
        assert_eq!(config.gate().unwrap().threshold(), 0.10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn threshold_must_be_a_proper_fraction() {
        for bad in [0.0, -0.1, 1.0, 2.5, f64::NAN] {
            let config = EngineConfig {
                consistency_threshold: bad,
            };
            assert!(config.validate().is_err(), "{} should be rejected", bad);
            assert!(config.gate().is_err());
        }
    }
}
