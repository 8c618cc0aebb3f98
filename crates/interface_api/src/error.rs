//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use app_grading::ApplicationError;
use domain_grading::GradingError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg),
            ApiError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg)
            }
            ApiError::Unavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable", msg)
            }
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        let message = err.to_string();
        match err {
            ApplicationError::StudentNotFound(_) => ApiError::NotFound(message),
            ApplicationError::Grading(GradingError::MaxEvaluationsExceeded { .. }) => {
                ApiError::Conflict(message)
            }
            ApplicationError::Grading(_) => ApiError::Validation(message),
            ApplicationError::Port(e) if e.is_not_found() => ApiError::NotFound(message),
            ApplicationError::Port(e) if e.is_transient() => ApiError::Unavailable(message),
            ApplicationError::Port(_) => ApiError::Internal(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::PortError;

    fn status_of(err: ApplicationError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn test_grading_errors_map_to_client_statuses() {
        assert_eq!(
            status_of(GradingError::NoEvaluations.into()),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(GradingError::MaxEvaluationsExceeded { limit: 10 }.into()),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(ApplicationError::StudentNotFound("U202012345".to_string())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_port_errors_map_to_server_statuses() {
        assert_eq!(
            status_of(PortError::connection("store offline").into()),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(PortError::internal("poisoned").into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
