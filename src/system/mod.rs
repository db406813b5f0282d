//! Process and host introspection.
//!
//! # Design Decisions
//! - Probes are best-effort: each field is an `Option`, zero-filled at the
//!   response boundary. A degraded metrics source never fails a request.
//! - Snapshots are computed fresh per request; nothing is cached.

pub mod probe;
