//! CLI argument definitions using clap
//!
//! Commands:
//! - products-api init [--config <path>] [--data-file <path>]
//! - products-api serve [--config <path>] [--port <port>] [--data-file <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// REST API for a products collection stored in one JSON file
#[derive(Parser, Debug)]
#[command(name = "products-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the data file with an empty product list if it does not exist
    Init {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the data file location
        #[arg(long)]
        data_file: Option<PathBuf>,
    },

    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the port to listen on
        #[arg(long)]
        port: Option<u16>,

        /// Override the data file location
        #[arg(long)]
        data_file: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
