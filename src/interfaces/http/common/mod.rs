//! Response envelope, error mapping and shared extractors

pub mod validated_json;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::DomainError;

pub use validated_json::ValidatedJson;

pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";
pub const UPLOAD_ERROR_MESSAGE: &str = "error uploading file";

/// Standard response envelope.
///
/// Every endpoint answers `{"status_code": ..., "message": "...", "data": ...}`;
/// `data` is `null` on errors.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Mirrors the HTTP status
    pub status_code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
            data: None,
        }
    }
}

/// Caller-safe error: a status and a fixed message.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        if e.is_internal() {
            error!(error = %e, "Request failed");
        }
        match e {
            DomainError::NotFound(m) => Self::new(StatusCode::NOT_FOUND, m),
            DomainError::Validation(m) | DomainError::Conflict(m) | DomainError::Payload(m) => {
                Self::bad_request(m)
            }
            DomainError::Unauthorized(m) => Self::unauthorized(m),
            DomainError::Upload(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, UPLOAD_ERROR_MESSAGE)
            }
            DomainError::InvalidId(_) | DomainError::Database(_) => Self::internal(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()>::error(self.status, self.message);
        (self.status, Json(body)).into_response()
    }
}

/// Handler result: a status plus enveloped payload, or an `ApiError`.
pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

/// Build a success response in the envelope.
pub fn respond<T>(status: StatusCode, message: &str, data: T) -> ApiResult<T> {
    Ok((status, Json(ApiResponse::new(status, message, data))))
}
