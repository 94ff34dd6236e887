//! API module for the Roster Server
//!
//! This module contains the API routes and handlers for the Roster Server.

use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod employees;
pub mod health;
pub mod errors;

use crate::server::RosterServer;

/// Build the router for API endpoints
pub fn build_router(server: Arc<RosterServer>) -> Router {
    Router::new()
        // Employee records
        .route(
            "/api/v1/employees",
            get(employees::list_employees_handler).post(employees::create_employee_handler),
        )
        .route(
            "/api/v1/employees/:id",
            get(employees::get_employee_handler)
                .put(employees::update_employee_handler)
                .delete(employees::delete_employee_handler),
        )

        // Health check
        .route("/health", get(health::health_check))

        .layer(TraceLayer::new_for_http())

        // Shared state
        .with_state(server)
}

// Re-export all modules for easier imports
pub use employees::*;
pub use health::*;
pub use errors::*;
