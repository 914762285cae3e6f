//! CLI module
//!
//! - init: create the data file
//! - serve: run the HTTP API

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{init, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliResult};
pub use io::write_response;
