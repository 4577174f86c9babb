//! # Web API Module
//!
//! REST endpoints for item management and batch processing.

use axum::http::StatusCode;
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

pub mod handlers;
pub mod response_types;
pub mod routes;
pub mod state;

pub use response_types::{ApiError, ApiResult, ErrorResponse};
pub use state::AppState;

/// Create the web application with all routes and middleware
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let common_middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.request_timeout(),
        ))
        .layer(cors);

    let app = Router::new()
        .merge(routes::health_routes())
        .merge(routes::item_routes())
        .layer(common_middleware)
        .with_state(state);

    info!("Web application created with all routes and middleware");
    app
}
