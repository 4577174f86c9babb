//! Web API Routes
//!
//! Route definitions for all web endpoints organized by functionality.

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::web::{handlers, state::AppState};

/// Health check routes for monitoring and load balancer probes
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness_check))
}

/// Item CRUD and batch processing routes
pub fn item_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/items",
            get(handlers::items::list_items).post(handlers::items::create_item),
        )
        .route("/api/items/process", get(handlers::items::process_items))
        .route(
            "/api/items/process/stats",
            get(handlers::items::processing_stats),
        )
        .route(
            "/api/items/{id}",
            get(handlers::items::get_item)
                .put(handlers::items::update_item)
                .delete(handlers::items::delete_item),
        )
}
