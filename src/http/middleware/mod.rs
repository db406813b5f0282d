//! Cross-cutting middleware chain.
//!
//! Every request passes through an ordered sequence of wrappers before
//! dispatch; each wrapper may inspect or modify the request/response and
//! calls onward to continue the chain, or short-circuits (CORS preflight).
//!
//! Request order, fixed by contract:
//! ```text
//! logging → security headers → CORS → metrics → handler
//! ```
//!
//! Reversing logging and CORS would make preflight responses invisible to
//! the access log; that must not happen. The security-header stamp wraps
//! CORS so even short-circuited preflight responses carry it.

pub mod cors;
pub mod logging;
pub mod metrics;
pub mod security;

pub use cors::apply_cors;
pub use logging::log_requests;
pub use metrics::track_requests;
pub use security::set_security_headers;
