//! HTTP route handlers
//!
//! This module provides HTTP route handler functions.

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::warn;

/// Health check endpoint handler
///
/// Always answers 200; `database` reports whether the store is reachable.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let (status, database) = match state.store.health_check().await {
        Ok(()) => ("healthy", "up"),
        Err(e) => {
            warn!("Database health check failed: {}", e);
            ("degraded", "down")
        }
    };

    HttpResponse::Ok().json(json!({
        "status": status,
        "database": database,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
