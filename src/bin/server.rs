//! # Batchwork Server
//!
//! Standalone HTTP server for item management and batch processing.
//!
//! ## Usage
//!
//! ```bash
//! # Run with default configuration (in-memory storage)
//! cargo run --bin batchwork-server
//!
//! # Run against PostgreSQL
//! BATCHWORK_STORAGE_BACKEND=postgres \
//! BATCHWORK_DATABASE_URL=postgresql://localhost/batchwork \
//!   cargo run --bin batchwork-server
//! ```

use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use batchwork_core::config::{ConfigLoader, StorageBackend};
use batchwork_core::database::{
    DatabaseConnection, InMemoryItemRepository, ItemRepository, PostgresItemRepository,
};
use batchwork_core::logging;
use batchwork_core::web::{create_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load().context("Failed to load configuration")?;

    logging::init_structured_logging(config.log_json);

    info!("🚀 Starting Batchwork Server...");
    info!("   Version: {}", env!("CARGO_PKG_VERSION"));
    info!("   Environment: {}", ConfigLoader::detect_environment());
    info!("   Storage backend: {:?}", config.storage_backend);

    let mut connection = None;
    let repository: Arc<dyn ItemRepository> = match config.storage_backend {
        StorageBackend::Memory => Arc::new(InMemoryItemRepository::new()),
        StorageBackend::Postgres => {
            let database = DatabaseConnection::connect(&config)
                .await
                .context("Failed to connect to PostgreSQL")?;
            database
                .migrate()
                .await
                .context("Failed to apply database migrations")?;
            let repository = PostgresItemRepository::new(database.pool().clone());
            connection = Some(database);
            Arc::new(repository)
        }
    };

    let bind_address = config.bind_address.clone();
    let state = Arc::new(AppState::from_repository(config, repository));
    let app = create_app(state);

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    info!("🎉 Listening on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    if let Some(database) = connection {
        database.close().await;
        info!("🔌 Database pool closed");
    }

    info!("👋 Batchwork Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received, initiating graceful shutdown...");
}
