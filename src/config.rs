//! Configuration module
//!
//! Reads a TOML configuration file; every section has sensible defaults so
//! a missing or partial file still produces a runnable service.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address for the REST API
    pub api_host: String,
    /// Port for the REST API
    pub api_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_host: "0.0.0.0".to_string(),
            api_port: 8080,
        }
    }
}

/// Database settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Path to the SQLite database file
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "./forecourt.db".to_string(),
        }
    }
}

impl DatabaseSettings {
    /// SeaORM connection URL for the configured file.
    pub fn connection_url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.path)
    }
}

/// Logging settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter (overridden by RUST_LOG)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        toml::from_str(&contents).map_err(ConfigError::Parse)
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Platform config path: `<config dir>/forecourt/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("forecourt")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_runnable() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.api_port, 8080);
        assert_eq!(cfg.database.connection_url(), "sqlite://./forecourt.db?mode=rwc");
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            api_port = 9999
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.api_port, 9999);
        assert_eq!(cfg.server.api_host, "0.0.0.0");
        assert_eq!(cfg.database.path, "./forecourt.db");
    }

    #[test]
    fn full_toml_round_trip() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            api_host = "127.0.0.1"
            api_port = 3000

            [database]
            path = "/var/lib/forecourt/data.db"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.api_host, "127.0.0.1");
        assert_eq!(
            cfg.database.connection_url(),
            "sqlite:///var/lib/forecourt/data.db?mode=rwc"
        );
        assert_eq!(cfg.logging.level, "debug");
    }
}
