//! Configuration for the Roster Server
//!
//! This module contains the configuration types and loading functionality.

use serde::{Deserialize, Serialize};
use std::env;
use tracing::{info, warn};

use crate::error::{ServerError, ServerResult};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Host to bind to
    #[serde(default = "default_host")]
    pub bind_address: String,

    /// URL of the employee record store (`memory://` or `postgres://`)
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Maximum number of pooled database connections
    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,

    /// Timeout for acquiring a pooled connection, in seconds
    #[serde(default = "default_acquire_timeout")]
    pub database_acquire_timeout_secs: u64,

    /// Whether to create the schema on startup
    #[serde(default = "default_run_migrations")]
    pub database_run_migrations: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_port() -> u16 {
    8080
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_database_url() -> String {
    "memory://local".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout() -> u64 {
    30
}

fn default_run_migrations() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn load() -> ServerResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup, starting from defaults
    pub fn from_lookup<F>(lookup: F) -> ServerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup("SERVER_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                config.port = port;
            } else {
                warn!("Invalid SERVER_PORT value: {}", port);
            }
        }

        if let Some(host) = lookup("SERVER_HOST") {
            config.bind_address = host;
        }

        if let Some(database_url) = lookup("DATABASE_URL") {
            config.database_url = database_url;
        }

        if let Some(max_connections) = lookup("DATABASE_MAX_CONNECTIONS") {
            if let Ok(max) = max_connections.parse::<u32>() {
                config.database_max_connections = max;
            } else {
                warn!("Invalid DATABASE_MAX_CONNECTIONS value: {}", max_connections);
            }
        }

        if let Some(timeout) = lookup("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse::<u64>() {
                config.database_acquire_timeout_secs = secs;
            } else {
                warn!("Invalid DATABASE_ACQUIRE_TIMEOUT_SECS value: {}", timeout);
            }
        }

        if let Some(run_migrations) = lookup("DATABASE_RUN_MIGRATIONS") {
            match parse_bool(&run_migrations) {
                Some(run) => config.database_run_migrations = run,
                None => warn!("Invalid DATABASE_RUN_MIGRATIONS value: {}", run_migrations),
            }
        }

        if let Some(log_level) = lookup("LOG_LEVEL") {
            config.log_level = log_level;
        }

        if let Some(log_format) = lookup("LOG_FORMAT") {
            config.log_format = match log_format.to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "text" | "pretty" => LogFormat::Text,
                _ => {
                    warn!("Invalid LOG_FORMAT value: {}, using text", log_format);
                    LogFormat::Text
                }
            };
        }

        // Validate required fields
        if config.database_url.is_empty() {
            return Err(ServerError::ConfigError(
                "Database URL is required".to_string()
            ));
        }

        if config.database_max_connections == 0 {
            return Err(ServerError::ConfigError(
                "DATABASE_MAX_CONNECTIONS must be at least 1".to_string()
            ));
        }

        if config.database_url.starts_with("memory://") {
            warn!("Using in-memory employee store - records will not survive a restart");
        }

        info!("Loaded server configuration");
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_host(),
            database_url: default_database_url(),
            database_max_connections: default_max_connections(),
            database_acquire_timeout_secs: default_acquire_timeout(),
            database_run_migrations: default_run_migrations(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}
