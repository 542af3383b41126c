//! API error types and handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use registrar_application::ApplicationError;
use registrar_domain::EnrollmentRejection;

use crate::models::{ErrorDetail, ErrorResponse};

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Authentication(String),

    #[error("{0}")]
    Authorization(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    /// The eligibility gate refused an add or drop
    #[error("{0}")]
    Rejected(EnrollmentRejection),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status_and_type(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Authentication(_) => (StatusCode::UNAUTHORIZED, "authentication_error"),
            ApiError::Authorization(_) => (StatusCode::FORBIDDEN, "authorization_error"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            ApiError::Rejected(rejection @ EnrollmentRejection::NotAStudent) => {
                (StatusCode::FORBIDDEN, rejection.code())
            }
            ApiError::Rejected(rejection) => (StatusCode::BAD_REQUEST, rejection.code()),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Unauthenticated(msg) => ApiError::Authentication(msg),
            ApplicationError::Forbidden(msg) => ApiError::Authorization(msg),
            ApplicationError::UserNotFound(_)
            | ApplicationError::SemesterNotFound(_)
            | ApplicationError::CourseNotFound(_)
            | ApplicationError::EnrollmentNotFound(_) => ApiError::NotFound(err.to_string()),
            ApplicationError::UsernameTaken(_) | ApplicationError::AlreadyEnrolled(_) => {
                ApiError::Conflict(err.to_string())
            }
            ApplicationError::EnrollmentRejected(rejection) => ApiError::Rejected(rejection),
            ApplicationError::ValidationFailed(_)
            | ApplicationError::BusinessRuleViolation(_)
            | ApplicationError::DomainError(_) => ApiError::BadRequest(err.to_string()),
            ApplicationError::RepositoryError(_) | ApplicationError::HashingFailed(_) => {
                tracing::error!(error = %err, "request failed");
                ApiError::Internal(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_type();

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                error_type: error_type.to_string(),
                message: self.to_string(),
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
