//! Request-metrics middleware.

use std::time::Instant;

use axum::extract::{MatchedPath, Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::http::server::AppState;

/// Record request count and latency keyed by method, route template, and
/// status. The metrics-scrape endpoint itself is skipped to avoid
/// recursive self-measurement.
pub async fn track_requests(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if request.uri().path() == "/metrics" {
        return next.run(request).await;
    }

    let start = Instant::now();
    let method = request.method().to_string();
    // Label by route template when one matched, raw path otherwise.
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let response = next.run(request).await;

    state
        .metrics
        .record_request(&method, &endpoint, response.status().as_u16(), start.elapsed());

    response
}
