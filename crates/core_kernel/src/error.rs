//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A value object rejected its input
    #[error("Invalid {field}: {reason}")]
    InvalidValue {
        field: String,
        reason: String,
    },

    /// A floating point value could not be represented as a decimal
    #[error("Precision error on {field}: {message}")]
    Precision {
        field: String,
        message: String,
    },
}

impl CoreError {
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn precision(field: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::Precision {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the name of the field that failed
    pub fn field(&self) -> &str {
        match self {
            CoreError::InvalidValue { field, .. } | CoreError::Precision { field, .. } => field,
        }
    }
}
