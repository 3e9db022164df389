//! Application error handling

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use doctor_core::{DoctorError, ErrorOutcome};

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidParameter(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, outcome) = match &self {
            AppError::InvalidParameter(msg) => (StatusCode::BAD_REQUEST, ErrorOutcome::invalid(msg)),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorOutcome::not_found(msg)),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorOutcome::internal(msg),
                )
            }
        };

        (status, Json(outcome)).into_response()
    }
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::InvalidParameter(msg) => AppError::InvalidParameter(msg),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidParameter(rejection.body_text())
    }
}
