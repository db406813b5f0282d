//! HTTP server setup and lifecycle.
//!
//! # Responsibilities
//! - Build the shared handler state from the resolved configuration
//! - Create the Axum router with every route declaration
//! - Wire up the middleware chain in its fixed order
//! - Serve the router on a bound listener until it fails or shuts down

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::http::header::InvalidHeaderValue;
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::handlers;
use crate::http::middleware::{apply_cors, log_requests, set_security_headers, track_requests};
use crate::http::response::rfc3339_now;
use crate::observability::HttpMetrics;

/// Per-request bound covering the read and write of one exchange.
///
/// Fixed rather than configurable per deployment; bounding slow clients
/// is all a demonstration service needs.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Error raised while assembling the server. Fatal; aborts startup.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The configured CORS origin is not a legal header value.
    #[error("invalid CORS_ORIGIN {origin:?}: {source}")]
    InvalidCorsOrigin {
        origin: String,
        source: InvalidHeaderValue,
    },

    /// The metrics recorder could not be constructed.
    #[error("failed to build metrics recorder: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

/// Application metadata, constructed once at startup and never mutated.
/// Concurrent requests only read it.
#[derive(Debug, Clone, Serialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub environment: String,
    pub timestamp: String,
}

impl AppInfo {
    fn from_config(config: &AppConfig) -> Self {
        Self {
            name: crate::SERVICE_NAME.to_string(),
            version: config.version.clone(),
            environment: config.environment.clone(),
            timestamp: rfc3339_now(),
        }
    }
}

/// Immutable state injected into handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub app: Arc<AppInfo>,
    pub started_at: Instant,
    pub cors_origin: HeaderValue,
    pub metrics: Arc<HttpMetrics>,
}

impl AppState {
    /// Build handler state. The only failure modes are an unparseable
    /// CORS origin and a broken metrics recorder.
    pub fn new(config: Arc<AppConfig>) -> Result<Self, SetupError> {
        let cors_origin =
            HeaderValue::from_str(&config.cors_origin).map_err(|source| {
                SetupError::InvalidCorsOrigin {
                    origin: config.cors_origin.clone(),
                    source,
                }
            })?;
        let metrics = Arc::new(HttpMetrics::new()?);
        let app = Arc::new(AppInfo::from_config(&config));

        tracing::debug!(
            version = %app.version,
            environment = %app.environment,
            "Handler state created"
        );

        Ok(Self {
            config,
            app,
            started_at: Instant::now(),
            cors_origin,
            metrics,
        })
    }

    /// Seconds elapsed since server construction.
    pub fn uptime(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

/// Build the application router with all routes and the middleware chain.
///
/// The chain runs in request order logging → security headers → CORS →
/// metrics → handler. Layers added later wrap the ones added before, so
/// it is assembled inside-out. Ordering is a hard contract: logging must
/// wrap CORS so preflight short-circuits still reach the access log, and
/// the security-header stamp must wrap CORS so preflight responses carry
/// it too.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/ping", get(handlers::ping))
        .route("/healthz", get(handlers::system::healthz))
        .route("/info", get(handlers::system::info))
        .route("/version", get(handlers::version))
        .route("/echo", post(handlers::echo))
        .route("/openapi.json", get(handlers::openapi::openapi_json))
        .route("/openapi.yaml", get(handlers::openapi::openapi_yaml))
        .route("/metrics", get(handlers::metrics))
        .fallback(not_found)
        .layer(from_fn_with_state(state.clone(), track_requests))
        .layer(from_fn_with_state(state.clone(), apply_cors))
        .layer(from_fn(set_security_headers))
        .layer(from_fn_with_state(state.clone(), log_requests))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .with_state(state)
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// HTTP server owning the assembled router.
pub struct HttpServer {
    router: Router,
    config: Arc<AppConfig>,
}

impl HttpServer {
    /// Create a new server from resolved configuration.
    ///
    /// Construction is total apart from handler-state setup failure.
    pub fn new(config: AppConfig) -> Result<Self, SetupError> {
        let config = Arc::new(config);
        let state = AppState::new(config.clone())?;
        let router = build_router(state);
        Ok(Self { router, config })
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Blocks until the listener fails or a shutdown signal arrives; a
    /// terminal error is logged and returned to the caller.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        if let Err(err) = axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
        {
            tracing::error!(error = %err, "HTTP server error");
            return Err(err);
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
