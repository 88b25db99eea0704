pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Error as UuidError;

/// Standard error response structure.
///
/// Returned for all error responses:
/// - `code`: integer error code for logging/monitoring (e.g. 1008)
/// - `error`: machine-readable error identifier (e.g. "CONFLICT")
/// - `message`: human-readable error message
/// - `details`: optional structured error details
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Build a response from an [`ErrorCode`] with a specific message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Application error type that converts into HTTP responses.
///
/// Domain crates map their error enums into this type; the [`IntoResponse`]
/// impl picks the status code and renders a stable [`ErrorResponse`] body.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON parsing error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("UUID error: {0}")]
    UuidError(#[from] UuidError),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unprocessable Entity: {0}")]
    UnprocessableEntity(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::SerdeJson(e) => {
                tracing::error!(error_code = ErrorCode::SerdeJsonError.code(), "JSON parsing error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::SerdeJsonError,
                    ErrorCode::SerdeJsonError.default_message().to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!(error_code = ErrorCode::DatabaseError.code(), "Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DatabaseError,
                    ErrorCode::DatabaseError.default_message().to_string(),
                )
            }
            AppError::JsonExtractorRejection(e) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::JsonExtraction,
                e.body_text(),
            ),
            AppError::UuidError(_) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidUuid,
                ErrorCode::InvalidUuid.default_message().to_string(),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorCode::ValidationError, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorCode::NotFound, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, ErrorCode::Conflict, msg),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorCode::UnprocessableEntity,
                msg,
            ),
            AppError::InternalServerError(msg) => {
                tracing::error!(error_code = ErrorCode::InternalError.code(), "Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError,
                    ErrorCode::InternalError.default_message().to_string(),
                )
            }
            AppError::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, ErrorCode::ServiceUnavailable, msg)
            }
        };

        let body = Json(ErrorResponse::new(code, message));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_new() {
        let response = ErrorResponse::new(ErrorCode::Conflict, "SKU taken");
        assert_eq!(response.code, 1008);
        assert_eq!(response.error, "CONFLICT");
        assert_eq!(response.message, "SKU taken");
        assert!(response.details.is_none());
    }

    #[test]
    fn test_internal_error_hides_detail() {
        // Internal errors must render the stable default message, not the
        // underlying cause.
        let response = AppError::InternalServerError("connection reset".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_bad_request_preserves_message() {
        let response = AppError::BadRequest("name too short".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
