//! CLI module for ecotrack
//!
//! Provides the command-line interface:
//! - init: create the data file (and config defaults) up front
//! - serve: start the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, serve};
pub use errors::{CliError, CliResult};
