//! # Item Handlers
//!
//! CRUD endpoints for stored items and the batch processing trigger.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;
use tracing::info;

use crate::models::{ItemId, NewItem, WorkItem};
use crate::web::response_types::{ApiResult, ProcessingStatsResponse};
use crate::web::state::AppState;

/// List items: GET /api/items
pub async fn list_items(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<WorkItem>>> {
    Ok(Json(state.item_service().find_all().await?))
}

/// Create item: POST /api/items
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewItem>,
) -> ApiResult<(StatusCode, Json<WorkItem>)> {
    let created = state.item_service().create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get item: GET /api/items/{id}
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<ItemId>,
) -> ApiResult<Json<WorkItem>> {
    Ok(Json(state.item_service().find_by_id(id).await?))
}

/// Replace item: PUT /api/items/{id}
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<ItemId>,
    Json(payload): Json<NewItem>,
) -> ApiResult<Json<WorkItem>> {
    Ok(Json(state.item_service().update(id, payload).await?))
}

/// Delete item: DELETE /api/items/{id}
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<ItemId>,
) -> ApiResult<StatusCode> {
    state.item_service().delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Process all pending items: GET /api/items/process
///
/// Responds once the whole batch has settled with the items that were
/// processed; items that failed are absent.
pub async fn process_items(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<WorkItem>>> {
    let processed = state.item_service().process_pending().await?;
    info!(processed = processed.len(), "Pending items processed via API");
    Ok(Json(processed))
}

/// Success counter: GET /api/items/process/stats
pub async fn processing_stats(State(state): State<Arc<AppState>>) -> Json<ProcessingStatsResponse> {
    Json(ProcessingStatsResponse {
        processed_count: state.item_service().processed_count(),
    })
}
