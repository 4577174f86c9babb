//! # Item Storage
//!
//! Storage layer for work items. The batch pipeline only needs lookup and save;
//! the remaining operations back the CRUD surface and the pending-id query.
//!
//! ## Backends
//!
//! - [`InMemoryItemRepository`] - lock-free map, used for local runs and tests
//! - [`PostgresItemRepository`] - SQLx/PostgreSQL, schema in `migrations/`
//!
//! Implementations must tolerate concurrent calls with distinct ids. Concurrent
//! writes to the same id are not coordinated here: the last save wins.

pub mod connection;
pub mod memory;
pub mod postgres;

use crate::error::RepositoryResult;
use crate::models::{ItemId, NewItem, WorkItem};
use async_trait::async_trait;

pub use connection::DatabaseConnection;
pub use memory::InMemoryItemRepository;
pub use postgres::PostgresItemRepository;

/// Storage collaborator for work items
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Look up an item; `Ok(None)` when the id has no stored item
    async fn find_by_id(&self, id: ItemId) -> RepositoryResult<Option<WorkItem>>;

    /// All stored items ordered by id
    async fn find_all(&self) -> RepositoryResult<Vec<WorkItem>>;

    /// Store a new item under a freshly assigned id
    async fn insert(&self, item: NewItem) -> RepositoryResult<WorkItem>;

    /// Insert or replace the item stored under `item.id`
    async fn save(&self, item: WorkItem) -> RepositoryResult<WorkItem>;

    /// Remove an item, returning whether anything was deleted
    async fn delete_by_id(&self, id: ItemId) -> RepositoryResult<bool>;

    /// Ids of items not yet in `PROCESSED` status, ordered by id
    async fn find_pending_ids(&self) -> RepositoryResult<Vec<ItemId>>;

    /// Confirm the backend can serve requests
    async fn health_check(&self) -> RepositoryResult<()> {
        Ok(())
    }
}
