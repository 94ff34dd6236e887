//!
//! Roster Server - HTTP front end for the employee records service
//!
//! This module exports all the components of the Roster Server.

// External dependencies
use std::sync::Arc;

use roster_core::EmployeeRepository;

/// API module
pub mod api;

/// Server module
pub mod server;

/// Configuration module
pub mod config;

/// Error module
pub mod error;

// Re-export key types
pub use config::{LogFormat, ServerConfig};
pub use server::RosterServer;
pub use error::{ServerError, ServerResult};

/// Run function
pub async fn run(config: ServerConfig) -> ServerResult<()> {
    // Initialize logging
    init_logging(&config);

    // Create dependencies
    let employee_repo = create_employee_repository(&config).await?;

    // Create and run server
    let server = RosterServer::new(config, employee_repo);
    server.run().await
}

/// Initialize logging
fn init_logging(config: &ServerConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true);

    // A second subscriber (tests, embedding) is not an error
    let result = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    if let Err(err) = result {
        tracing::debug!("Logging already initialized: {}", err);
    }
}

/// Create the employee record store selected by `database_url`
pub async fn create_employee_repository(
    config: &ServerConfig,
) -> ServerResult<Arc<dyn EmployeeRepository>> {
    if config.database_url.starts_with("memory://") {
        tracing::info!("Using in-memory employee store");
        let store = roster_state_inmemory::InMemoryEmployeeRepository::new();
        return Ok(Arc::new(store));
    }

    #[cfg(feature = "postgres")]
    if config.database_url.starts_with("postgres://")
        || config.database_url.starts_with("postgresql://")
    {
        tracing::info!(
            max_connections = config.database_max_connections,
            "Using PostgreSQL employee store"
        );
        let pg_config = roster_state_postgres::PostgresConfig {
            connection_string: config.database_url.clone(),
            max_connections: config.database_max_connections,
            acquire_timeout_secs: config.database_acquire_timeout_secs,
            run_migrations: config.database_run_migrations,
        };
        let store = roster_state_postgres::connect_employee_repository(&pg_config).await?;
        return Ok(Arc::new(store));
    }

    Err(ServerError::ConfigError(format!(
        "Unsupported database URL: {}", redact_url(&config.database_url)
    )))
}

/// Keep the scheme only, credentials must not reach the logs
fn redact_url(url: &str) -> String {
    match url.split_once("://") {
        Some((scheme, _)) => format!("{}://...", scheme),
        None => "<no scheme>".to_string(),
    }
}
