// src/api/error.rs
// Centralized error taxonomy for HTTP responses. Messages here are the only
// text that ever reaches a caller - downstream detail stays in the logs.

use axum::http::StatusCode;
use std::fmt;

#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
}

impl ApiError {
    /// Validation failure - constraint text is safe to expose.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::BAD_REQUEST,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::NOT_FOUND,
        }
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    /// Downstream fault, deliberately masked behind a generic message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Catch-all for unexpected faults at the outer boundary.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = Result<T, ApiError>;
