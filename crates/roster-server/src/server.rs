//! Main Roster Server implementation
//!
//! This module contains the RosterServer implementation.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, debug};

use roster_core::{Employee, EmployeeId, EmployeeRepository, EmployeeService};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};

/// Main server implementation
#[derive(Clone)]
pub struct RosterServer {
    /// Configuration
    pub config: ServerConfig,

    /// Employee workflow
    employee_service: Arc<EmployeeService>,
}

impl RosterServer {
    /// Create a new server over the given record store
    pub fn new(config: ServerConfig, employee_repo: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            config,
            employee_service: Arc::new(EmployeeService::new(employee_repo)),
        }
    }

    /// Run the server until a shutdown signal is received
    pub async fn run(self) -> ServerResult<()> {
        info!("Starting Roster Server");

        let addr: SocketAddr = format!("{}:{}", self.config.bind_address, self.config.port)
            .parse()
            .map_err(|e| ServerError::ConfigError(format!("Invalid bind address: {}", e)))?;

        let app = crate::api::build_router(Arc::new(self));

        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        info!(%addr, "Server listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }

    /// Create an employee
    pub async fn create_employee(&self, candidate: Employee) -> ServerResult<Employee> {
        Ok(self.employee_service.create(candidate).await?)
    }

    /// List all employees
    pub async fn list_employees(&self) -> ServerResult<Vec<Employee>> {
        Ok(self.employee_service.list_all().await?)
    }

    /// Get an employee by ID
    pub async fn get_employee(&self, id: EmployeeId) -> ServerResult<Option<Employee>> {
        Ok(self.employee_service.get_by_id(id).await?)
    }

    /// Update an employee's names and email
    pub async fn update_employee(
        &self,
        id: EmployeeId,
        patch: Employee,
    ) -> ServerResult<Option<Employee>> {
        Ok(self.employee_service.update(id, patch).await?)
    }

    /// Delete an employee by ID
    pub async fn delete_employee(&self, id: EmployeeId) -> ServerResult<()> {
        Ok(self.employee_service.delete_by_id(id).await?)
    }

    /// Check the record store
    pub async fn check_store_health(&self) -> ServerResult<bool> {
        Ok(self.employee_service.check_store_health().await?)
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => {
            // Without a signal handler, run until the process is killed
            debug!(?err, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
