//! Server configuration for todo-server
//!
//! Loads and parses `todo-server.toml`. Every key has a default, so an empty
//! file (or no file at all) yields a working configuration.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::db::connection::DEFAULT_MAX_CONNECTIONS;

/// Default listen address of the gRPC server
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:9101";

/// Default SQLite database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite://todo.db";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid listen address '{addr}': {source}")]
    InvalidListenAddr {
        addr: String,
        source: std::net::AddrParseError,
    },
}

/// gRPC listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Address the gRPC server binds to
    pub listen_addr: String,
    /// Register the gRPC reflection service
    pub reflection: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            reflection: true,
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// sqlx connection string
    pub url: String,
    /// Upper bound of the connection pool
    pub max_connections: u32,
    /// Apply embedded migrations at startup
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            run_migrations: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: ServerSection,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from an explicit path or the default location
    ///
    /// Without an explicit path, `config/todo-server.toml` is used when it
    /// exists; otherwise the built-in defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let default_path = PathBuf::from("config/todo-server.toml");
        if default_path.exists() {
            return Self::from_file(default_path);
        }

        Ok(Self::default())
    }

    /// Apply command-line or environment overrides on top of loaded values
    ///
    /// Only the values that were given replace what the file set.
    pub fn apply_overrides(&mut self, listen: Option<String>, database_url: Option<String>) {
        if let Some(listen) = listen {
            self.server.listen_addr = listen;
        }
        if let Some(url) = database_url {
            self.database.url = url;
        }
    }

    /// Parsed listen address
    pub fn listen_socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .listen_addr
            .parse()
            .map_err(|source| ConfigError::InvalidListenAddr {
                addr: self.server.listen_addr.clone(),
                source,
            })
    }
}
