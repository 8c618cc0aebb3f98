//! Grading domain errors
//!
//! Every failure in the grading core is an ordinary validation error that
//! describes a violated precondition. Nothing here is retried or corrected.

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::CoreError;

/// Errors that can occur in the grading domain
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GradingError {
    /// A grade, weight or identifier failed its range or format rule
    #[error("Invalid {field}: {reason}")]
    InvalidValue {
        field: String,
        reason: String,
    },

    /// The student already holds the maximum number of evaluations
    #[error("Cannot exceed {limit} evaluations per student")]
    MaxEvaluationsExceeded {
        limit: usize,
    },

    /// Evaluation weights do not add up to the expected total
    #[error("Weight sum is {actual}%, expected {expected}%")]
    InvalidWeightSum {
        actual: Decimal,
        expected: Decimal,
    },

    /// A final grade was requested before any evaluation was registered
    #[error("Cannot calculate final grade without evaluations")]
    NoEvaluations,
}

impl GradingError {
    /// Creates an invalid value error
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        GradingError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if the error was raised while constructing a value object
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, GradingError::InvalidValue { .. })
    }
}

impl From<CoreError> for GradingError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidValue { field, reason } => GradingError::InvalidValue { field, reason },
            CoreError::Precision { field, .. } => {
                GradingError::invalid_value(field, "invalid parameters")
            }
        }
    }
}
