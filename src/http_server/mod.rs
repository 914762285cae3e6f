//! # HTTP Server Module
//!
//! Assembles the Axum application: the product routes under
//! `/api/products`, a `/health` check, a JSON 404 fallback, and the CORS and
//! tracing layers around them.

pub mod config;
pub mod observability_routes;
pub mod server;

pub use config::{ConfigError, RunMode, ServerConfig};
pub use server::HttpServer;
