//! Tracing subscriber setup
//!
//! Log lines go to stderr through `tracing-subscriber`'s fmt layer. The level
//! comes from `RUST_LOG` when set, otherwise from the run mode: `debug` for
//! this crate and request spans in development, `info` in production.

use tracing_subscriber::EnvFilter;

use crate::http_server::RunMode;

/// Default filter directives when `RUST_LOG` is not set
pub fn default_directives(run_mode: RunMode) -> &'static str {
    match run_mode {
        RunMode::Development => "products_api=debug,tower_http=debug,info",
        RunMode::Production => "info",
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_tracing(run_mode: RunMode) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(run_mode)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
