//! Application errors

use thiserror::Error;

use core_kernel::{CoreError, PortError};
use domain_grading::GradingError;

/// Errors surfaced by use cases and the facade
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// No student is stored under the requested identifier
    #[error("Student with ID {0} not found")]
    StudentNotFound(String),

    /// A grading rule was violated
    #[error(transparent)]
    Grading(#[from] GradingError),

    /// The store failed
    #[error(transparent)]
    Port(#[from] PortError),
}

impl From<CoreError> for ApplicationError {
    fn from(error: CoreError) -> Self {
        ApplicationError::Grading(error.into())
    }
}

impl ApplicationError {
    /// Returns true if the requested student does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            ApplicationError::StudentNotFound(_) => true,
            ApplicationError::Port(e) => e.is_not_found(),
            ApplicationError::Grading(_) => false,
        }
    }
}
