use crate::database::ItemRepository;
use crate::error::RepositoryResult;
use crate::models::{ItemId, ItemStatus, NewItem, WorkItem};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

/// In-process item store backed by a sharded concurrent map
#[derive(Debug)]
pub struct InMemoryItemRepository {
    items: DashMap<ItemId, WorkItem>,
    next_id: AtomicI64,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Seed the store with existing items, keeping their ids
    pub fn with_items(items: impl IntoIterator<Item = WorkItem>) -> Self {
        let repo = Self::new();
        for item in items {
            repo.bump_sequence_past(item.id);
            repo.items.insert(item.id, item);
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn bump_sequence_past(&self, id: ItemId) {
        self.next_id.fetch_max(id + 1, Ordering::SeqCst);
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn find_by_id(&self, id: ItemId) -> RepositoryResult<Option<WorkItem>> {
        Ok(self.items.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<WorkItem>> {
        let mut items: Vec<WorkItem> = self.items.iter().map(|e| e.value().clone()).collect();
        items.sort_by_key(|item| item.id);
        Ok(items)
    }

    async fn insert(&self, item: NewItem) -> RepositoryResult<WorkItem> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = item.into_item(id, ItemStatus::Unprocessed);
        self.items.insert(id, stored.clone());
        Ok(stored)
    }

    async fn save(&self, item: WorkItem) -> RepositoryResult<WorkItem> {
        self.bump_sequence_past(item.id);
        self.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn delete_by_id(&self, id: ItemId) -> RepositoryResult<bool> {
        Ok(self.items.remove(&id).is_some())
    }

    async fn find_pending_ids(&self) -> RepositoryResult<Vec<ItemId>> {
        let mut ids: Vec<ItemId> = self
            .items
            .iter()
            .filter(|e| e.value().status == ItemStatus::Unprocessed)
            .map(|e| *e.key())
            .collect();
        ids.sort_unstable();
        Ok(ids)
    }
}
