//! CLI module for the book registry
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server
//! - check-config: Validate a configuration file

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check_config, run, run_command, serve};
pub use config::ServiceConfig;
pub use errors::{CliError, CliResult};
pub use io::write_response;
