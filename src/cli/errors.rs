//! CLI-specific error types.

use std::io;

use thiserror::Error;

use crate::http_server::config::ConfigError;
use crate::store::StoreError;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors. All of these are fatal: the process prints the error and
/// exits non-zero.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Data file could not be prepared
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Runtime or bind failure while serving
    #[error("server error: {0}")]
    Server(#[from] io::Error),
}
