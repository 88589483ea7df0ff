//! Configuration management for paydash
//!
//! This module handles loading, validation, and management of
//! paydash configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::ConfigError;

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

/// Pagination settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Transactions returned per "view more" page
    #[serde(default = "default_transactions_per_page")]
    pub transactions_per_page: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            transactions_per_page: default_transactions_per_page(),
        }
    }
}

fn default_transactions_per_page() -> usize {
    5
}

/// Backend data source settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BackendConfig {
    /// Simulated upstream latency in milliseconds
    #[serde(default)]
    pub latency_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Pagination settings
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Backend data source settings
    #[serde(default)]
    pub backend: BackendConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_string_lossy().to_string(),
                }
            } else {
                ConfigError::IoError
            }
        })?;

        let config: Config = serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::InvalidYaml {
                message: e.to_string(),
            }
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if self.pagination.transactions_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pagination.transactions_per_page".to_string(),
                reason: "Page size must be greater than 0".to_string(),
            });
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                reason: format!(
                    "Log level must be one of: {}",
                    valid_levels.join(", ")
                ),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8082);
        assert_eq!(config.pagination.transactions_per_page, 5);
        assert_eq!(config.backend.latency_ms, 0);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_match_empty_yaml() {
        let from_yaml: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(from_yaml.server.port, Config::default().server.port);
        assert_eq!(
            from_yaml.pagination.transactions_per_page,
            Config::default().pagination.transactions_per_page
        );
        assert_eq!(from_yaml.logging.level, Config::default().logging.level);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "server:\n  port: 9000\npagination:\n  transactions_per_page: 10"
        )
        .unwrap();

        let config = Config::load(file.path().to_path_buf()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.pagination.transactions_per_page, 10);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(PathBuf::from("/nonexistent/config.yaml")).unwrap_err();
        assert_eq!(err.code(), error::ConfigErrorCode::FileNotFound);
        assert_eq!(err.severity(), error::ConfigErrorSeverity::Warning);
    }

    #[test]
    fn test_load_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server: [not a map").unwrap();

        let err = Config::load(file.path().to_path_buf()).unwrap_err();
        assert_eq!(err.code(), error::ConfigErrorCode::InvalidYaml);
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let mut config: Config = serde_yaml::from_str("{}").unwrap();
        config.pagination.transactions_per_page = 0;
        let err = config.validate().unwrap_err();
        assert_eq!(err.code(), error::ConfigErrorCode::InvalidValue);
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let mut config: Config = serde_yaml::from_str("{}").unwrap();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_generate_default_parses() {
        let config: Config = serde_yaml::from_str(Config::generate_default()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.pagination.transactions_per_page, 5);
    }
}
