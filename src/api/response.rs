//! Response types for the rate query API.
//!
//! This module defines the success bodies, the error body, and the
//! mapping from [`RateError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::RateError;

/// Body of `GET /rates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateListResponse {
    /// Rate names in table order.
    pub rates: Vec<String>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates an invalid query error response.
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::new("INVALID_QUERY", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response for a malformed query string.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<RateError> for ApiErrorResponse {
    fn from(error: RateError) -> Self {
        let message = error.to_string();
        let (status, code) = match &error {
            RateError::RateNotFound { .. } => (StatusCode::NOT_FOUND, "RATE_NOT_FOUND"),
            RateError::ValueNotFound { .. } => (StatusCode::NOT_FOUND, "VALUE_NOT_FOUND"),
            RateError::InvalidDate { .. } => (StatusCode::BAD_REQUEST, "INVALID_DATE"),
            RateError::UnknownTypeTag { .. } => (StatusCode::BAD_REQUEST, "UNKNOWN_TYPE"),
            RateError::TypeMismatch { .. } | RateError::UntypedRate { .. } => {
                (StatusCode::BAD_REQUEST, "TYPE_MISMATCH")
            }
            RateError::Decode { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "DECODE_ERROR"),
            RateError::InvalidDateRange { .. }
            | RateError::InconsistentTypeTags { .. }
            | RateError::InvalidRecord { .. }
            | RateError::OverlappingIntervals { .. }
            | RateError::DuplicateName { .. }
            | RateError::SourceNotFound { .. }
            | RateError::SourceParse { .. }
            | RateError::Fetch { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "TABLE_ERROR"),
        };

        let error = match error_details(&error) {
            Some(details) => ApiError::with_details(code, message, details),
            None => ApiError::new(code, message),
        };

        ApiErrorResponse { status, error }
    }
}

/// The offending rate name and date, for errors raised by a query.
fn error_details(error: &RateError) -> Option<String> {
    match error {
        RateError::RateNotFound { name }
        | RateError::TypeMismatch { name, .. }
        | RateError::UntypedRate { name, .. }
        | RateError::Decode { name, .. } => Some(format!("rate: {}", name)),
        RateError::ValueNotFound { name, date } => {
            Some(format!("rate: {}, date: {}", name, date))
        }
        RateError::InvalidDate { input } => Some(format!("date: {}", input)),
        _ => None,
    }
}
