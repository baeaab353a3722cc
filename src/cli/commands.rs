//! CLI command implementations.
//!
//! Commands load configuration first and only then touch the file system
//! or the network. A missing config file is not an error: every setting
//! has a default, so the server can run with no config at all.

use std::path::Path;

use crate::http_server::{HttpServer, ServerConfig};
use crate::observability::Logger;
use crate::store::FileStore;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Init { config } => init(&config),
        Command::Serve { config, port, data } => {
            let mut server_config = load_config(&config)?;
            if let Some(port) = port {
                server_config.port = port;
            }
            if let Some(data) = data {
                server_config.data_path = data;
            }
            serve(server_config)
        }
    }
}

/// Create the data file as an empty collection if it does not exist yet.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let store = FileStore::new(&config.data_path);
    store.ensure_file()?;
    Logger::info(
        "data_file_ready",
        &[("path", &config.data_path.display().to_string())],
    );
    Ok(())
}

/// Build the tokio runtime and run the HTTP server until it stops.
pub fn serve(config: ServerConfig) -> CliResult<()> {
    let server = HttpServer::with_config(config);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;
    Ok(())
}

fn load_config(path: &Path) -> CliResult<ServerConfig> {
    if path.exists() {
        Ok(ServerConfig::load(path)?)
    } else {
        Ok(ServerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_empty_data_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let data_path = dir.path().join("data.json");
        let config_path = dir.path().join("ecotrack.json");
        std::fs::write(
            &config_path,
            format!(r#"{{"data_path": {:?}}}"#, data_path.display().to_string()),
        )
        .unwrap();

        init(&config_path).unwrap();
        assert_eq!(std::fs::read_to_string(&data_path).unwrap(), "[]");
    }

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = load_config(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config.port, 8000);
    }
}
