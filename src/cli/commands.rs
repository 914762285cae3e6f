//! CLI command implementations

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;

use crate::http_server::{HttpServer, ServerConfig};
use crate::observability::init_tracing;
use crate::products::ProductRepository;
use crate::storage::JsonFileStore;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main CLI entry point
///
/// Loads `.env`, parses arguments and dispatches. This is the only function
/// that main.rs should call.
pub fn run() -> CliResult<()> {
    let _ = dotenvy::dotenv();
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config, data_file } => init(config.as_deref(), data_file),
        Command::Serve {
            config,
            port,
            data_file,
        } => serve(config.as_deref(), port, data_file),
    }
}

/// Defaults, config file and environment, then CLI flags on top
pub fn resolve_config(
    config_path: Option<&Path>,
    port: Option<u16>,
    data_file: Option<PathBuf>,
) -> CliResult<ServerConfig> {
    let mut config = ServerConfig::load(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(data_file) = data_file {
        config.data_file = data_file;
    }
    Ok(config)
}

/// Create the data file if it is missing or blank. Existing content is kept.
pub fn init(config_path: Option<&Path>, data_file: Option<PathBuf>) -> CliResult<()> {
    let config = resolve_config(config_path, None, data_file)?;
    init_tracing(config.run_mode);

    let created = !has_content(&config.data_file);
    let store = JsonFileStore::open(&config.data_file)?;

    write_response(json!({
        "initialized": created,
        "data_file": store.path().display().to_string(),
    }))
}

fn has_content(path: &Path) -> bool {
    fs::read_to_string(path)
        .map(|content| !content.trim().is_empty())
        .unwrap_or(false)
}

/// Start the HTTP server and block until it stops
pub fn serve(
    config_path: Option<&Path>,
    port: Option<u16>,
    data_file: Option<PathBuf>,
) -> CliResult<()> {
    let config = resolve_config(config_path, port, data_file)?;
    init_tracing(config.run_mode);

    let store = JsonFileStore::open(&config.data_file)?;
    let repository = ProductRepository::new(store);
    let server = HttpServer::new(config, repository);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::BootFailed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::BootFailed(format!("HTTP server failed: {}", e)))
    })
}
