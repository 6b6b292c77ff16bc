//! Configuration management for txsearch
//!
//! This module handles loading, validation, and management of
//! txsearch configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use error::{ConfigError, ConfigErrorCode};

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
    /// Allow cross-origin requests
    #[serde(default)]
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    30001
}

/// Data directory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the dataset
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
    /// Dataset file name (relative to data path)
    #[serde(default = "default_dataset_file")]
    pub dataset_file: String,
    /// Directory served as the static frontend
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            dataset_file: default_dataset_file(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("./data")
}

fn default_dataset_file() -> String {
    "transactions.json".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("./ui")
}

/// Query cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached queries
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    /// Seconds a cached result stays valid
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl CacheConfig {
    /// Cache time-to-live as a duration
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

fn default_max_entries() -> usize {
    80
}

fn default_ttl_secs() -> u64 {
    300
}

/// Pagination settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Items per page when the request has no usable limit
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> usize {
    10
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
    /// Data directory settings
    #[serde(default)]
    pub data: DataConfig,
    /// Cache settings
    #[serde(default)]
    pub cache: CacheConfig,
    /// Pagination settings
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_string_lossy().to_string(),
                }
            } else {
                ConfigError::IoError
            }
        })?;

        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::InvalidYaml { message: e.to_string() })?;

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

        if self.cache.max_entries == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cache.max_entries".to_string(),
                reason: "Cache must hold at least one entry".to_string(),
            });
        }

        if self.cache.ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cache.ttl_secs".to_string(),
                reason: "TTL must be greater than 0".to_string(),
            });
        }

        if self.pagination.default_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pagination.default_page_size".to_string(),
                reason: "Page size must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }

    /// Get the full path to the dataset file
    pub fn dataset_path(&self) -> PathBuf {
        self.data.path.join(&self.data.dataset_file)
    }

    /// Address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
