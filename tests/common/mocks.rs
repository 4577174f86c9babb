use async_trait::async_trait;
use batchwork_core::database::{InMemoryItemRepository, ItemRepository};
use batchwork_core::error::{ItemError, ItemResult, RepositoryError, RepositoryResult};
use batchwork_core::execution::ItemWorker;
use batchwork_core::models::{ItemId, NewItem, WorkItem};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Worker with scripted results, for exercising the coordinator in isolation
pub struct ScriptedWorker {
    failing: HashSet<ItemId>,
    delay: Duration,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedWorker {
    pub fn new(failing: impl IntoIterator<Item = ItemId>) -> Self {
        Self {
            failing: failing.into_iter().collect(),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Highest number of simultaneously running `process` calls seen
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItemWorker for ScriptedWorker {
    async fn process(&self, item_id: ItemId) -> ItemResult<WorkItem> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing.contains(&item_id) {
            Err(ItemError::not_found(item_id))
        } else {
            Ok(WorkItem::with_id(item_id))
        }
    }
}

/// In-memory repository that fails lookups or saves for chosen ids and
/// counts every call it receives
pub struct FaultyRepository {
    inner: InMemoryItemRepository,
    fail_lookup: HashSet<ItemId>,
    fail_save: HashSet<ItemId>,
    unhealthy: bool,
    lookups: AtomicUsize,
    saves: AtomicUsize,
}

impl FaultyRepository {
    pub fn new(items: impl IntoIterator<Item = WorkItem>) -> Self {
        Self {
            inner: InMemoryItemRepository::with_items(items),
            fail_lookup: HashSet::new(),
            fail_save: HashSet::new(),
            unhealthy: false,
            lookups: AtomicUsize::new(0),
            saves: AtomicUsize::new(0),
        }
    }

    pub fn failing_lookup(mut self, ids: impl IntoIterator<Item = ItemId>) -> Self {
        self.fail_lookup.extend(ids);
        self
    }

    pub fn failing_save(mut self, ids: impl IntoIterator<Item = ItemId>) -> Self {
        self.fail_save.extend(ids);
        self
    }

    /// Fail every health check
    pub fn unhealthy(mut self) -> Self {
        self.unhealthy = true;
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn storage_calls(&self) -> usize {
        self.lookups() + self.saves()
    }
}

#[async_trait]
impl ItemRepository for FaultyRepository {
    async fn find_by_id(&self, id: ItemId) -> RepositoryResult<Option<WorkItem>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookup.contains(&id) {
            return Err(RepositoryError::Unavailable(format!(
                "lookup of {id} refused"
            )));
        }
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> RepositoryResult<Vec<WorkItem>> {
        self.inner.find_all().await
    }

    async fn insert(&self, item: NewItem) -> RepositoryResult<WorkItem> {
        self.inner.insert(item).await
    }

    async fn save(&self, item: WorkItem) -> RepositoryResult<WorkItem> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_save.contains(&item.id) {
            return Err(RepositoryError::Unavailable(format!(
                "save of {} refused",
                item.id
            )));
        }
        self.inner.save(item).await
    }

    async fn delete_by_id(&self, id: ItemId) -> RepositoryResult<bool> {
        self.inner.delete_by_id(id).await
    }

    async fn find_pending_ids(&self) -> RepositoryResult<Vec<ItemId>> {
        self.inner.find_pending_ids().await
    }

    async fn health_check(&self) -> RepositoryResult<()> {
        if self.unhealthy {
            return Err(RepositoryError::Unavailable("storage offline".to_string()));
        }
        Ok(())
    }
}
