//! CLI error types
//!
//! Every CLI error is fatal: `main` prints it and exits non-zero. The
//! displayed form leads with a stable code so scripts can match on it.

use std::io;

use thiserror::Error;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing, unreadable or invalid
    #[error("BOOKS_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// Writing command output failed
    #[error("BOOKS_CLI_IO_ERROR: {0}")]
    Io(#[from] io::Error),

    /// Encoding command output failed
    #[error("BOOKS_CLI_IO_ERROR: JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server could not start, or stopped with an error
    #[error("BOOKS_CLI_BOOT_FAILED: {0}")]
    Boot(String),
}
