//! HTTP request handlers.
//!
//! Each handler is a pure function of the request, the immutable
//! [`AppState`], and the current wall clock. Index, ping, and version are
//! side-effect-free; health and info perform live process introspection
//! (see [`system`]).

pub mod openapi;
pub mod system;

use std::collections::BTreeMap;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::http::response::{ApiError, ApiResponse};
use crate::http::server::AppState;

/// Welcome payload for the index endpoint.
#[derive(Debug, Serialize)]
pub struct WelcomeData {
    pub message: String,
    pub description: &'static str,
    pub documentation: Documentation,
    pub links: Links,
    pub endpoints: Vec<Endpoint>,
}

#[derive(Debug, Serialize)]
pub struct Documentation {
    pub swagger: Option<&'static str>,
    pub postman: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct Links {
    pub repository: &'static str,
    pub issues: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Endpoint {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
}

/// Version payload.
#[derive(Debug, Serialize)]
pub struct VersionData {
    pub version: String,
    pub name: String,
    pub environment: String,
}

/// Echo payload: the reflected input plus request metadata.
#[derive(Debug, Serialize)]
pub struct EchoData {
    pub echo: serde_json::Value,
    pub headers: BTreeMap<String, String>,
    pub method: String,
}

/// Every route the service exposes, as advertised by the index endpoint.
fn registered_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint {
            path: "/",
            method: "GET",
            description: "API welcome and documentation",
        },
        Endpoint {
            path: "/ping",
            method: "GET",
            description: "Simple ping-pong response",
        },
        Endpoint {
            path: "/healthz",
            method: "GET",
            description: "Health check endpoint",
        },
        Endpoint {
            path: "/info",
            method: "GET",
            description: "Application and system information",
        },
        Endpoint {
            path: "/version",
            method: "GET",
            description: "Application version information",
        },
        Endpoint {
            path: "/echo",
            method: "POST",
            description: "Echo back the request body",
        },
        Endpoint {
            path: "/openapi.json",
            method: "GET",
            description: "OpenAPI specification (JSON)",
        },
        Endpoint {
            path: "/openapi.yaml",
            method: "GET",
            description: "OpenAPI specification (YAML)",
        },
        Endpoint {
            path: "/metrics",
            method: "GET",
            description: "Prometheus metrics",
        },
    ]
}

/// `GET /` — welcome message with application information.
pub async fn index(State(state): State<AppState>) -> ApiResponse<WelcomeData> {
    ApiResponse::new(WelcomeData {
        message: format!("Welcome to {} API", state.app.name),
        description: "A simple Rust microservice for learning and demonstration",
        documentation: Documentation {
            swagger: Some("/openapi.json"),
            postman: None,
        },
        links: Links {
            repository: env!("CARGO_PKG_REPOSITORY"),
            issues: concat!(env!("CARGO_PKG_REPOSITORY"), "/issues"),
        },
        endpoints: registered_endpoints(),
    })
}

/// `GET /ping` — liveness signal. Plain text, no JSON envelope.
pub async fn ping() -> &'static str {
    "pong"
}

/// `GET /version` — static application metadata, no system calls.
pub async fn version(State(state): State<AppState>) -> ApiResponse<VersionData> {
    ApiResponse::new(VersionData {
        version: state.app.version.clone(),
        name: state.app.name.clone(),
        environment: state.app.environment.clone(),
    })
}

/// `POST /echo` — reflect a JSON body back alongside request metadata.
///
/// A body that is not valid JSON yields the 400 error envelope; there is
/// no partial or raw fallback.
pub async fn echo(method: Method, headers: HeaderMap, body: Bytes) -> Response {
    let value: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(_) => return ApiError::invalid_json().into_response(),
    };

    ApiResponse::new(EchoData {
        echo: value,
        headers: flatten_headers(&headers),
        method: method.to_string(),
    })
    .into_response()
}

/// `GET /metrics` — Prometheus text exposition.
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// First value per header name.
fn flatten_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut flat = BTreeMap::new();
    for (name, value) in headers {
        flat.entry(name.as_str().to_string())
            .or_insert_with(|| String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    flat
}
