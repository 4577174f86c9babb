//! # Structured Logging Module
//!
//! Environment-aware structured logging for the batch service. Console output is
//! human-readable by default and switches to JSON lines when requested.

use chrono::Utc;
use std::sync::OnceLock;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::models::ItemId;

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging. Safe to call more than once.
pub fn init_structured_logging(json: bool) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(get_log_level(&environment)));

        let console_layer: Box<dyn Layer<Registry> + Send + Sync> = if json {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .json()
                .boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_ansi(true)
                .boxed()
        };

        let subscriber = tracing_subscriber::registry().with(console_layer.with_filter(filter));

        // A global subscriber may already be installed by an embedding host
        if subscriber.try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized");
        }

        tracing::info!(
            pid = std::process::id(),
            environment = %environment,
            json = json,
            "🔧 STRUCTURED LOGGING: Initialized"
        );
    });
}

/// Get current environment from environment variables
fn get_environment() -> String {
    std::env::var("BATCHWORK_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> String {
    match environment {
        "test" => "debug".to_string(),
        "development" => "debug".to_string(),
        "production" => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Log structured data for item operations
pub fn log_item_operation(
    operation: &str,
    item_id: Option<ItemId>,
    status: &str,
    details: Option<&str>,
) {
    tracing::info!(
        operation = %operation,
        item_id = item_id,
        status = %status,
        details = details,
        timestamp = %Utc::now().to_rfc3339(),
        "📋 ITEM_OPERATION"
    );
}
