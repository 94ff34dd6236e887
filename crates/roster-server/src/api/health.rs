//! Health check endpoint for the Roster Server
//!
//! This module contains the health check handler.

use axum::{
    extract::State,
    response::IntoResponse,
    Json,
    http::StatusCode,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::server::RosterServer;

/// Health check handler
///
/// Reports the server version and whether the record store is reachable.
pub async fn health_check(
    State(server): State<Arc<RosterServer>>,
) -> impl IntoResponse {
    debug!("Health check requested");

    let store_status = match server.check_store_health().await {
        Ok(true) => "UP",
        Ok(false) => "DEGRADED",
        Err(err) => {
            warn!(?err, "Record store health check failed");
            "DOWN"
        }
    };

    let response = json!({
        "status": if store_status == "DOWN" { "DOWN" } else { "UP" },
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "store": {
                "status": store_status,
            },
        },
    });

    let overall_status = if store_status == "DOWN" {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    (overall_status, Json(response))
}
