//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, route table, middleware chain)
//!     → middleware/ (logging → security headers → CORS → metrics)
//!     → handlers (terminal, produce an envelope)
//!     → response.rs (uniform success/error envelopes)
//!     → Send to client
//! ```

pub mod middleware;
pub mod response;
pub mod server;

pub use response::{ApiError, ApiResponse};
pub use server::{AppState, HttpServer, SetupError};
