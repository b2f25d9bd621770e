//! CLI command implementations

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::registry::BookRegistry;

use super::args::Command;
use super::config::ServiceConfig;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            host,
            port,
            log_level,
        } => {
            let config = ServiceConfig::load_or_default(config.as_deref())?
                .with_overrides(host, port, log_level)?;
            serve(config)
        }
        Command::CheckConfig { config } => check_config(&config),
    }
}

/// Start the HTTP server
///
/// 1. Install logging
/// 2. Seed the registry
/// 3. Run the Axum server on a fresh tokio runtime until Ctrl-C
pub fn serve(config: ServiceConfig) -> CliResult<()> {
    init_logging(&config.log_level);

    let registry = Arc::new(BookRegistry::seeded());
    info!(
        books = registry.len().unwrap_or_default(),
        "registry seeded"
    );

    let server = HttpServer::with_registry(config.server, registry);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Boot(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::Boot(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Validate a configuration file and print the effective configuration
pub fn check_config(config_path: &Path) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;
    write_response(serde_json::to_value(&config)?)
}
