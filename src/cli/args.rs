//! CLI argument definitions using clap
//!
//! Commands:
//! - book-registry serve [--config <path>] [--host <host>] [--port <port>] [--log-level <filter>]
//! - book-registry check-config --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Book Registry - an in-memory book catalogue over HTTP
#[derive(Parser, Debug)]
#[command(name = "book-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to an optional JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(long, short)]
        port: Option<u16>,

        /// Log filter directive, e.g. "debug" or "book_registry=debug"
        #[arg(long)]
        log_level: Option<String>,
    },

    /// Load and validate a configuration file, then print the effective config
    CheckConfig {
        /// Path to configuration file
        #[arg(long)]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
