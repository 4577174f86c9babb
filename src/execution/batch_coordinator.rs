//! # Batch Coordinator
//!
//! Fans a batch of item ids out to an [`ItemWorker`], one spawned task per id,
//! and waits for every task to settle before looking at any result.
//!
//! ## Ordering
//!
//! Task handles are kept in submission order and the results are read back in
//! that same order after the barrier, so the output follows the input order no
//! matter which items finish first. Failed items are dropped from the output.
//!
//! ## Failure reporting
//!
//! Each task logs its own failure at `warn` before it finishes. Tasks are
//! detached, so a caller that stops awaiting the batch (a request timeout, a
//! client disconnect) does not stop the remaining items or lose their
//! warnings.
//!
//! ## Limits
//!
//! - Every id in the batch is in flight at once; there is no concurrency cap.
//! - There is no timeout. A worker call that never returns holds the batch.
//! - Duplicate ids are processed independently.

use crate::error::{ItemError, ItemResult};
use crate::execution::item_worker::ItemWorker;
use crate::models::{ItemId, WorkItem};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Settled result of one submitted id
#[derive(Debug)]
pub struct ProcessingOutcome {
    /// Position of the id in the submitted batch
    pub position: usize,
    pub item_id: ItemId,
    pub result: ItemResult<WorkItem>,
}

impl ProcessingOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Runs batches of item ids through a worker concurrently
#[derive(Clone)]
pub struct BatchCoordinator {
    worker: Arc<dyn ItemWorker>,
}

impl BatchCoordinator {
    pub fn new(worker: Arc<dyn ItemWorker>) -> Self {
        Self { worker }
    }

    /// Process a batch and return the successfully processed items in
    /// submission order. Item failures never surface here; see the logs.
    #[instrument(skip(self, item_ids), fields(batch_size = item_ids.len()))]
    pub async fn process_batch(&self, item_ids: &[ItemId]) -> Vec<WorkItem> {
        let started = Instant::now();
        let outcomes = self.settle_batch(item_ids).await;

        let mut processed = Vec::with_capacity(outcomes.len());
        let mut failed = 0usize;

        for outcome in outcomes {
            match outcome.result {
                Ok(item) => processed.push(item),
                Err(_) => failed += 1,
            }
        }

        info!(
            submitted = item_ids.len(),
            processed = processed.len(),
            failed = failed,
            duration_ms = started.elapsed().as_millis() as u64,
            "Batch processing completed"
        );

        processed
    }

    /// Run every id to completion and return one outcome per id, in
    /// submission order
    pub async fn settle_batch(&self, item_ids: &[ItemId]) -> Vec<ProcessingOutcome> {
        if item_ids.is_empty() {
            return Vec::new();
        }

        let handles: Vec<_> = item_ids
            .iter()
            .enumerate()
            .map(|(position, &item_id)| {
                debug!(item_id, position, "Submitting item for processing");
                let worker = self.worker.clone();
                tokio::spawn(async move {
                    let result = worker.process(item_id).await;
                    if let Err(error) = &result {
                        warn!(
                            item_id,
                            position,
                            error = %error,
                            "Item processing failed; omitting from batch result"
                        );
                    }
                    result
                })
            })
            .collect();

        // Barrier: nothing is inspected until every task has settled
        let settled = join_all(handles).await;

        item_ids
            .iter()
            .zip(settled)
            .enumerate()
            .map(|(position, (&item_id, joined))| {
                let result = joined.unwrap_or_else(|join_error| {
                    let error = ItemError::TaskAborted {
                        item_id,
                        reason: join_error.to_string(),
                    };
                    // The task never reached its own failure log
                    warn!(
                        item_id,
                        position,
                        error = %error,
                        "Item processing failed; omitting from batch result"
                    );
                    Err(error)
                });
                ProcessingOutcome {
                    position,
                    item_id,
                    result,
                }
            })
            .collect()
    }
}
