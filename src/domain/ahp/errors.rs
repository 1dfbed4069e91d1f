//! AHP computation errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Identifies which comparison matrix a result or failure belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComparisonSet {
    /// The single criteria-level matrix.
    Criteria,
    /// The alternatives matrix owned by one criterion.
    Alternatives { criterion: String },
}

impl ComparisonSet {
    /// Alternatives matrix for the named criterion.
    pub fn alternatives(criterion: impl Into<String>) -> Self {
        ComparisonSet::Alternatives {
            criterion: criterion.into(),
        }
    }

    /// The item set whose pairs this matrix compares.
    pub fn item_kind(&self) -> ItemKind {
        match self {
            ComparisonSet::Criteria => ItemKind::Criteria,
            ComparisonSet::Alternatives { .. } => ItemKind::Alternatives,
        }
    }
}

impl fmt::Display for ComparisonSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonSet::Criteria => write!(f, "criteria"),
            ComparisonSet::Alternatives { criterion } => {
                write!(f, "alternatives under criterion {}", criterion)
            }
        }
    }
}

/// Which item set was empty when ranking was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Criteria,
    Alternatives,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Criteria => write!(f, "criterion"),
            ItemKind::Alternatives => write!(f, "alternative"),
        }
    }
}

/// Failures surfaced by the AHP engine.
///
/// None of these are fatal; each carries enough context for a single
/// actionable message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AhpError {
    #[error("Invalid comparison matrix ({set}): {reason}")]
    InvalidMatrix { set: String, reason: String },

    #[error("Cannot set comparison ({row}, {column}): {reason}")]
    InvalidComparison {
        row: usize,
        column: usize,
        reason: String,
    },

    #[error(
        "Judgments for {set} are inconsistent (CR = {ratio:.2}, must be at most {threshold:.2}). Please revise the comparisons."
    )]
    InconsistentJudgments {
        set: ComparisonSet,
        ratio: f64,
        threshold: f64,
    },

    #[error("No alternative comparisons recorded for criterion '{criterion}'")]
    MissingComparisons { criterion: String },

    #[error("At least one {0} is required")]
    EmptyInput(ItemKind),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AhpError {
    /// Creates an invalid matrix error.
    pub fn invalid_matrix(set: impl fmt::Display, reason: impl Into<String>) -> Self {
        AhpError::InvalidMatrix {
            set: set.to_string(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid comparison error.
    pub fn invalid_comparison(row: usize, column: usize, reason: impl Into<String>) -> Self {
        AhpError::InvalidComparison {
            row,
            column,
            reason: reason.into(),
        }
    }

    /// Creates a missing comparisons error.
    pub fn missing_comparisons(criterion: impl Into<String>) -> Self {
        AhpError::MissingComparisons {
            criterion: criterion.into(),
        }
    }

    /// Returns the stable error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            AhpError::InvalidMatrix { .. } => ErrorCode::InvalidMatrix,
            AhpError::InvalidComparison { .. } => ErrorCode::InvalidComparison,
            AhpError::InconsistentJudgments { .. } => ErrorCode::InconsistentJudgments,
            AhpError::MissingComparisons { .. } => ErrorCode::MissingComparisons,
            AhpError::EmptyInput(_) => ErrorCode::EmptyInput,
            AhpError::Validation(err) => err.code(),
        }
    }
}
