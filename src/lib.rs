#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Batchwork Core
//!
//! Concurrent batch processing of stored work items.
//!
//! ## Overview
//!
//! A batch of item ids is fanned out to one task per id. Each task fetches its
//! item, marks it `PROCESSED` and saves it. Once every task has settled, the
//! successfully processed items are returned in the order the ids were
//! submitted. A failing item never aborts or delays its siblings; it is logged
//! at `warn` and left out of the result.
//!
//! ## Module Organization
//!
//! - [`execution`] - item worker and batch coordinator
//! - [`database`] - item storage trait with in-memory and PostgreSQL backends
//! - [`services`] - validated CRUD and batch entry points
//! - [`web`] - REST surface
//! - [`config`] - layered configuration
//! - [`logging`] - structured logging setup
//! - [`error`] - structured error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use batchwork_core::database::{InMemoryItemRepository, ItemRepository};
//! use batchwork_core::execution::{BatchCoordinator, UpdateItemProcessor};
//! use batchwork_core::models::WorkItem;
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let repository: Arc<dyn ItemRepository> = Arc::new(InMemoryItemRepository::with_items(
//!     vec![WorkItem::with_id(1), WorkItem::with_id(3)],
//! ));
//! let processor = Arc::new(UpdateItemProcessor::new(repository));
//! let coordinator = BatchCoordinator::new(processor.clone());
//!
//! let processed = coordinator.process_batch(&[1, 2, 3]).await;
//!
//! assert_eq!(processed.iter().map(|item| item.id).collect::<Vec<_>>(), vec![1, 3]);
//! assert_eq!(processor.processed_count(), 2);
//! # });
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod execution;
pub mod logging;
pub mod models;
pub mod services;
pub mod validation;
pub mod web;

pub use crate::config::{ConfigLoader, ServiceConfig, StorageBackend};
pub use crate::error::{ItemError, ItemResult, RepositoryError, RepositoryResult};
pub use crate::execution::{
    BatchCoordinator, ItemWorker, ProcessingOutcome, SuccessCounter, UpdateItemProcessor,
};
pub use crate::models::{ItemId, ItemStatus, NewItem, WorkItem};
pub use crate::services::ItemService;
