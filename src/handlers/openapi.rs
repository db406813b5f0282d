//! Embedded OpenAPI document endpoints.
//!
//! The specification is authored in YAML, embedded at compile time, and
//! served verbatim (`/openapi.yaml`) or converted to JSON
//! (`/openapi.json`). No core logic lives here.

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// The embedded OpenAPI specification, YAML source of truth.
pub const OPENAPI_SPEC: &str = include_str!("openapi.yaml");

/// `GET /openapi.json` — the embedded spec converted to JSON.
pub async fn openapi_json() -> Response {
    match serde_yaml::from_str::<serde_json::Value>(OPENAPI_SPEC) {
        Ok(document) => Json(document).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to parse embedded OpenAPI document");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to parse OpenAPI spec",
            )
                .into_response()
        }
    }
}

/// `GET /openapi.yaml` — the embedded spec, verbatim.
pub async fn openapi_yaml() -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/x-yaml")], OPENAPI_SPEC)
}
