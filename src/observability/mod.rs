//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! middleware chain produces:
//!     → tracing events (structured access log, startup/shutdown)
//!     → metrics.rs (request counter, latency histogram)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → /metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging via `tracing`; the subscriber is installed in `main`.
//! - The metrics recorder is owned by the composition root, never global.

pub mod metrics;

pub use metrics::HttpMetrics;
