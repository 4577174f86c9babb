//! # Health Check Handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;
use tracing::warn;

use crate::web::response_types::HealthResponse;
use crate::web::state::AppState;

/// Basic health check endpoint: GET /health
///
/// Reports that the process is up without touching storage.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Readiness probe: GET /health/ready
///
/// Answers 503 while the item storage cannot serve requests.
pub async fn readiness_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    match state.item_service().health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ready".to_string(),
            }),
        ),
        Err(error) => {
            warn!(error = %error, "Storage health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable".to_string(),
                }),
            )
        }
    }
}
