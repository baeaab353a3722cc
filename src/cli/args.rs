//! CLI argument definitions using clap
//!
//! Commands:
//! - ecotrack init [--config <path>]
//! - ecotrack serve [--config <path>] [--port <port>] [--data <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ecotrack - a sustainability action tracker over a single JSON file
#[derive(Parser, Debug)]
#[command(name = "ecotrack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the data file (an empty collection) if it does not exist
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./ecotrack.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./ecotrack.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,

        /// Override the configured data file path
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
