//! Access-log middleware.
//!
//! Runs first in the chain so it observes the outcome of everything
//! downstream, including CORS preflight short-circuits.

use axum::extract::{Request, State};
use axum::http::header::USER_AGENT;
use axum::middleware::Next;
use axum::response::Response;

use crate::http::response::rfc3339_now;
use crate::http::server::AppState;

/// Log method, path, timestamp, user agent, and response status for every
/// request. Entirely suppressed under the test environment.
pub async fn log_requests(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !state.config.request_logging() {
        return next.run(request).await;
    }

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let user_agent = request
        .headers()
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("Unknown")
        .to_string();

    let response = next.run(request).await;

    tracing::info!(
        timestamp = %rfc3339_now(),
        method = %method,
        path = %path,
        user_agent = %user_agent,
        status = response.status().as_u16(),
        "request handled"
    );

    response
}
