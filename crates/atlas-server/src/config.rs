use atlas_core::DataPaths;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ServerError;

/// Server settings, from flags or `ATLAS_*` environment variables.
#[derive(Debug, Clone, Parser)]
#[command(name = "atlas-server", version, about = "Read-only country and capital REST API")]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, env = "ATLAS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "ATLAS_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Directory holding countries.json and capitals.json (default: bundled data)
    #[arg(long, env = "ATLAS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, env = "ATLAS_LOG_JSON")]
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            data_dir: None,
            log_json: false,
        }
    }
}

impl ServerConfig {
    pub fn data_paths(&self) -> DataPaths {
        match &self.data_dir {
            Some(dir) => DataPaths::from_dir(dir),
            None => DataPaths::bundled(),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ServerError::Config(format!("Invalid address: {e}")))
    }
}
