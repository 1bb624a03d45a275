//! Catalog configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable | Default |
//! |---|---|
//! | `CATALOG_DB_PATH` | `catalog.db` |
//! | `CATALOG_DB_MAX_CONNECTIONS` | `5` |
//! | `CATALOG_DB_MIN_CONNECTIONS` | `1` |
//! | `CATALOG_DB_CONNECT_TIMEOUT_SECS` | `30` |
//! | `CATALOG_LOG` | `info,catalog=debug,sqlx=warn` |

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use catalog_db::DbConfig;

pub const DEFAULT_DB_PATH: &str = "catalog.db";
pub const DEFAULT_LOG_FILTER: &str = "info,catalog=debug,sqlx=warn";

/// Catalog process configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// SQLite database file, or `:memory:`
    pub database_path: PathBuf,

    /// Pool upper bound
    pub max_connections: u32,

    /// Connections kept open while idle
    pub min_connections: u32,

    /// Seconds to wait for a pooled connection
    pub connect_timeout_secs: u64,

    /// tracing-subscriber filter directive (RUST_LOG wins when set)
    pub log_filter: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            database_path: PathBuf::from(DEFAULT_DB_PATH),
            max_connections: 5,
            min_connections: 1,
            connect_timeout_secs: 30,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// `load()` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CatalogConfig::default();

        let config = CatalogConfig {
            database_path: lookup("CATALOG_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),

            max_connections: parse_or(&lookup, "CATALOG_DB_MAX_CONNECTIONS", defaults.max_connections)?,

            min_connections: parse_or(&lookup, "CATALOG_DB_MIN_CONNECTIONS", defaults.min_connections)?,

            connect_timeout_secs: parse_or(
                &lookup,
                "CATALOG_DB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,

            log_filter: lookup("CATALOG_LOG").unwrap_or(defaults.log_filter),
        };

        if config.max_connections == 0 || config.min_connections > config.max_connections {
            return Err(ConfigError::InvalidPoolSize {
                min: config.min_connections,
                max: config.max_connections,
            });
        }

        Ok(config)
    }

    /// Database settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        if self.database_path == PathBuf::from(":memory:") {
            return DbConfig::in_memory();
        }

        DbConfig::new(&self.database_path)
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid pool size: min {min}, max {max}")]
    InvalidPoolSize { min: u32, max: u32 },
}
