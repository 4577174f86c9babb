//! # Item Worker
//!
//! One item's unit of work: fetch the stored item, mark it processed, persist
//! it and hand back the persisted state.
//!
//! The worker keeps no per-item state. Its only shared state is the
//! [`SuccessCounter`], bumped once for every item that was persisted.
//!
//! Two concurrent calls for the same id are not serialized here. Both read the
//! stored item, both save it, and the later save wins. Callers that need
//! single-flight semantics per id must arrange it upstream (the pending-id
//! query only yields each id once per batch).

use crate::database::ItemRepository;
use crate::error::{ItemError, ItemResult};
use crate::models::{ItemId, WorkItem};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// Contract for processing a single item; invoked concurrently
#[async_trait]
pub trait ItemWorker: Send + Sync {
    async fn process(&self, item_id: ItemId) -> ItemResult<WorkItem>;
}

/// Monotonic count of successfully processed items
#[derive(Debug, Default)]
pub struct SuccessCounter {
    count: AtomicU64,
}

impl SuccessCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one success and return the new total
    pub fn increment(&self) -> u64 {
        self.count.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn get(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}

/// Worker that transitions stored items to `PROCESSED`
pub struct UpdateItemProcessor {
    repository: Arc<dyn ItemRepository>,
    processing_delay: Duration,
    processed: Arc<SuccessCounter>,
}

impl UpdateItemProcessor {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self::with_delay(repository, Duration::ZERO)
    }

    /// `processing_delay` stands in for external latency before each lookup
    pub fn with_delay(repository: Arc<dyn ItemRepository>, processing_delay: Duration) -> Self {
        Self {
            repository,
            processing_delay,
            processed: Arc::new(SuccessCounter::new()),
        }
    }

    pub fn processed_count(&self) -> u64 {
        self.processed.get()
    }

    /// Shared handle on the success counter, readable while batches run
    pub fn success_counter(&self) -> Arc<SuccessCounter> {
        self.processed.clone()
    }
}

#[async_trait]
impl ItemWorker for UpdateItemProcessor {
    #[instrument(skip(self))]
    async fn process(&self, item_id: ItemId) -> ItemResult<WorkItem> {
        debug!(item_id, "Processing item");

        if !self.processing_delay.is_zero() {
            tokio::time::sleep(self.processing_delay).await;
        }

        let mut item = self
            .repository
            .find_by_id(item_id)
            .await
            .map_err(|e| ItemError::storage(item_id, e))?
            .ok_or_else(|| ItemError::not_found(item_id))?;

        item.mark_processed();

        let updated = self
            .repository
            .save(item)
            .await
            .map_err(|e| ItemError::storage(item_id, e))?;

        let total = self.processed.increment();

        debug!(item_id, processed_total = total, "Finished processing item");
        Ok(updated)
    }
}
