//! Error types shared across the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("'{name}' appears more than once in {field}")]
    DuplicateItem { field: String, name: String },

    #[error("'{name}' is not one of the {field}")]
    UnknownItem { field: String, name: String },

    #[error("Cannot transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a duplicate item validation error.
    pub fn duplicate_item(field: impl Into<String>, name: impl Into<String>) -> Self {
        ValidationError::DuplicateItem {
            field: field.into(),
            name: name.into(),
        }
    }

    /// Creates an unknown item validation error.
    pub fn unknown_item(field: impl Into<String>, name: impl Into<String>) -> Self {
        ValidationError::UnknownItem {
            field: field.into(),
            name: name.into(),
        }
    }

    /// Creates a rejected state transition error.
    pub fn invalid_transition(from: impl Into<String>, to: impl Into<String>) -> Self {
        ValidationError::InvalidTransition {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Returns the error code for this validation failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ValidationError::DuplicateItem { .. } => ErrorCode::DuplicateItem,
            ValidationError::UnknownItem { .. } => ErrorCode::UnknownItem,
            ValidationError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    EmptyField,
    OutOfRange,
    InvalidFormat,
    DuplicateItem,
    UnknownItem,

    // Computation errors
    InvalidMatrix,
    InvalidComparison,
    InconsistentJudgments,
    MissingComparisons,
    EmptyInput,

    // State errors
    InvalidStateTransition,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::DuplicateItem => "DUPLICATE_ITEM",
            ErrorCode::UnknownItem => "UNKNOWN_ITEM",
            ErrorCode::InvalidMatrix => "INVALID_MATRIX",
            ErrorCode::InvalidComparison => "INVALID_COMPARISON",
            ErrorCode::InconsistentJudgments => "INCONSISTENT_JUDGMENTS",
            ErrorCode::MissingComparisons => "MISSING_COMPARISONS",
            ErrorCode::EmptyInput => "EMPTY_INPUT",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("criteria");
        assert_eq!(format!("{}", err), "Field 'criteria' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("intensity", 1, 9, 12);
        assert_eq!(
            format!("{}", err),
            "Field 'intensity' must be between 1 and 9, got 12"
        );
    }

    #[test]
    fn validation_error_duplicate_item_displays_correctly() {
        let err = ValidationError::duplicate_item("alternatives", "Laptop");
        assert_eq!(
            format!("{}", err),
            "'Laptop' appears more than once in alternatives"
        );
    }

    #[test]
    fn validation_error_maps_to_code() {
        assert_eq!(ValidationError::empty_field("x").code(), ErrorCode::EmptyField);
        assert_eq!(
            ValidationError::unknown_item("criteria", "Speed").code(),
            ErrorCode::UnknownItem
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::InconsistentJudgments), "INCONSISTENT_JUDGMENTS");
        assert_eq!(format!("{}", ErrorCode::MissingComparisons), "MISSING_COMPARISONS");
        assert_eq!(format!("{}", ErrorCode::EmptyInput), "EMPTY_INPUT");
    }
}
