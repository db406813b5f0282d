//! demo-api — a demonstration HTTP microservice.
//!
//! A handful of static and near-static endpoints (welcome page, ping,
//! health check, system info, version, echo) behind a fixed middleware
//! chain, built to teach containerization and orchestration workflows.
//!
//! # Architecture Overview
//!
//! ```text
//!                   ┌──────────────────────────────────────────────┐
//!                   │                  demo-api                     │
//!                   │                                               │
//!   Client Request  │  ┌────────┐   ┌───────────────────────────┐  │
//!   ────────────────┼─▶│ server │──▶│      middleware chain      │  │
//!                   │  └────────┘   │ logging → security → CORS  │  │
//!                   │               │        → metrics           │  │
//!                   │               └─────────────┬─────────────┘  │
//!                   │                             ▼                │
//!                   │               ┌───────────────────────────┐  │
//!   Client Response │               │         handlers          │  │
//!   ◀───────────────┼───────────────│ index ping healthz info   │  │
//!                   │               │ version echo openapi      │  │
//!                   │               └───────────────────────────┘  │
//!                   │                                               │
//!                   │  ┌─────────────────────────────────────────┐ │
//!                   │  │          Cross-Cutting Concerns          │ │
//!                   │  │  ┌────────┐ ┌───────────────┐ ┌───────┐ │ │
//!                   │  │  │ config │ │ observability │ │system │ │ │
//!                   │  │  └────────┘ └───────────────┘ └───────┘ │ │
//!                   │  └─────────────────────────────────────────┘ │
//!                   └──────────────────────────────────────────────┘
//! ```
//!
//! Liveness probes hit `/ping`; readiness probes hit `/healthz`.

// Core subsystems
pub mod config;
pub mod handlers;
pub mod http;

// Cross-cutting concerns
pub mod observability;
pub mod system;

/// Service name baked in at compile time.
pub const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");

pub use config::AppConfig;
pub use http::server::{HttpServer, SetupError};
