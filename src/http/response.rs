//! Uniform response envelopes.
//!
//! Every JSON-producing handler wraps its payload in [`ApiResponse`];
//! the only error envelope in the service is [`ApiError`], emitted by the
//! echo endpoint on malformed input. The plain-text ping endpoint is the
//! single exception to the envelope contract.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Current wall-clock time as an RFC3339 UTC string.
///
/// Generated at envelope-construction time, not request-arrival time.
pub fn rfc3339_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Standard success envelope: `{success: true, data, timestamp}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub timestamp: String,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a payload, stamping the envelope with the current time.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            timestamp: rfc3339_now(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Error envelope: `{error: true, message, statusCode, timestamp}`.
///
/// The HTTP status of the response is taken from `status_code`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: bool,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub timestamp: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
            status_code: status.as_u16(),
            timestamp: rfc3339_now(),
        }
    }

    /// The 400 envelope for a malformed JSON request body.
    pub fn invalid_json() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid JSON")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
