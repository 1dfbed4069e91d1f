//! Consistency Gate - accepts or rejects a priority result by its CR.

use serde::{Deserialize, Serialize};

use super::{AhpError, ComparisonSet, PriorityResult};
use crate::domain::foundation::ValidationError;

/// Conventional acceptability threshold for the consistency ratio.
pub const CONSISTENCY_RATIO_THRESHOLD: f64 = 0.10;

/// Outcome of a consistency check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum ConsistencyVerdict {
    Accepted,
    Rejected { message: String },
}

impl ConsistencyVerdict {
    /// Returns true if the judgments may be used.
    pub fn is_accepted(&self) -> bool {
        matches!(self, ConsistencyVerdict::Accepted)
    }
}

/// Applies the CR threshold to engine output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsistencyGate {
    threshold: f64,
}

impl Default for ConsistencyGate {
    fn default() -> Self {
        Self {
            threshold: CONSISTENCY_RATIO_THRESHOLD,
        }
    }
}

impl ConsistencyGate {
    /// Creates a gate with a custom threshold.
    ///
    /// # Errors
    /// - `InvalidFormat` if the threshold is not a finite positive number
    pub fn new(threshold: f64) -> Result<Self, ValidationError> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ValidationError::invalid_format(
                "consistency_threshold",
                format!("{} is not a positive finite ratio", threshold),
            ));
        }
        Ok(Self { threshold })
    }

    /// Returns the threshold in use.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Checks one result, naming `set` in the rejection message.
    pub fn check(&self, result: &PriorityResult, set: &ComparisonSet) -> ConsistencyVerdict {
        match self.ensure(result, set) {
            Ok(()) => ConsistencyVerdict::Accepted,
            Err(err) => ConsistencyVerdict::Rejected {
                message: err.to_string(),
            },
        }
    }

    /// Like `check`, but as a `Result` for `?` chaining.
    ///
    /// # Errors
    /// - `InconsistentJudgments` when CR exceeds the threshold
    /// - `EmptyInput` when the set has no items yet
    /// - `InvalidMatrix` when no CR could be computed
    pub fn ensure(&self, result: &PriorityResult, set: &ComparisonSet) -> Result<(), AhpError> {
        if result.size() == 0 {
            return Err(AhpError::EmptyInput(set.item_kind()));
        }

        let ratio = match result.consistency_ratio {
            Some(ratio) if result.is_computable() => ratio,
            _ => {
                return Err(AhpError::invalid_matrix(
                    set,
                    "consistency ratio could not be computed",
                ))
            }
        };

        if ratio > self.threshold {
            return Err(AhpError::InconsistentJudgments {
                set: set.clone(),
                ratio,
                threshold: self.threshold,
            });
        }

        Ok(())
    }
}
