//! # Item Service
//!
//! Application-level operations over stored items: validated CRUD plus the
//! batch entry points that feed ids into the [`BatchCoordinator`].

use crate::database::ItemRepository;
use crate::error::{ItemError, ItemResult};
use crate::execution::{BatchCoordinator, SuccessCounter};
use crate::logging::log_item_operation;
use crate::models::{ItemId, ItemStatus, NewItem, WorkItem};
use crate::validation::validate_new_item;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct ItemService {
    repository: Arc<dyn ItemRepository>,
    coordinator: BatchCoordinator,
    success_counter: Arc<SuccessCounter>,
}

impl ItemService {
    pub fn new(
        repository: Arc<dyn ItemRepository>,
        coordinator: BatchCoordinator,
        success_counter: Arc<SuccessCounter>,
    ) -> Self {
        Self {
            repository,
            coordinator,
            success_counter,
        }
    }

    pub async fn find_all(&self) -> ItemResult<Vec<WorkItem>> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn find_by_id(&self, id: ItemId) -> ItemResult<WorkItem> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ItemError::not_found(id))
    }

    /// Store a new item; the server assigns the id and the initial status
    pub async fn create(&self, item: NewItem) -> ItemResult<WorkItem> {
        validate_new_item(&item)?;
        let created = self.repository.insert(item).await?;
        log_item_operation("create", Some(created.id), created.status.as_str(), None);
        Ok(created)
    }

    /// Replace an existing item. The stored status is kept unless the payload
    /// carries one.
    pub async fn update(&self, id: ItemId, item: NewItem) -> ItemResult<WorkItem> {
        validate_new_item(&item)?;
        let existing = self.find_by_id(id).await?;
        let status: ItemStatus = item.status.unwrap_or(existing.status);

        let updated = self
            .repository
            .save(item.into_item(existing.id, status))
            .await?;
        log_item_operation("update", Some(id), updated.status.as_str(), None);
        Ok(updated)
    }

    /// Delete an item; deleting an absent id is not an error
    pub async fn delete_by_id(&self, id: ItemId) -> ItemResult<()> {
        let removed = self.repository.delete_by_id(id).await?;
        log_item_operation(
            "delete",
            Some(id),
            if removed { "deleted" } else { "absent" },
            None,
        );
        Ok(())
    }

    pub async fn find_pending_ids(&self) -> ItemResult<Vec<ItemId>> {
        Ok(self.repository.find_pending_ids().await?)
    }

    /// Process the given ids as one batch
    pub async fn process_items(&self, item_ids: &[ItemId]) -> Vec<WorkItem> {
        self.coordinator.process_batch(item_ids).await
    }

    /// Process every item that is not yet `PROCESSED`
    pub async fn process_pending(&self) -> ItemResult<Vec<WorkItem>> {
        let pending = self.find_pending_ids().await?;
        debug!(pending = pending.len(), "Processing pending items");
        Ok(self.process_items(&pending).await)
    }

    pub fn processed_count(&self) -> u64 {
        self.success_counter.get()
    }

    pub async fn health_check(&self) -> ItemResult<()> {
        Ok(self.repository.health_check().await?)
    }
}
