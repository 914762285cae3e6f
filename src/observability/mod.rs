//! Observability
//!
//! Structured logging through `tracing`. Per-request spans come from
//! `tower_http::trace::TraceLayer` in the HTTP server.

mod logger;

pub use logger::{default_directives, init_tracing};
