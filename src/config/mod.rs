//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (PORT, HOST, APP_ENV, APP_VERSION, CORS_ORIGIN)
//!     → schema.rs (resolve once at startup)
//!     → AppConfig (validated, immutable)
//!     → shared via Arc to server, handlers, and middleware
//! ```
//!
//! # Design Decisions
//! - Environment is read exactly once; behavior is deterministic for a
//!   given process lifetime.
//! - All fields have defaults so the service starts with a bare environment.
//! - An unparseable `PORT` is a fatal startup error, not a silent default.

pub mod schema;

pub use schema::{AppConfig, ConfigError};
