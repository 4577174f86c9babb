//! # Item Execution
//!
//! The concurrent batch pipeline: [`ItemWorker`] handles one item,
//! [`BatchCoordinator`] runs a whole batch of ids through it and returns the
//! successful items in submission order.

pub mod batch_coordinator;
pub mod item_worker;

pub use batch_coordinator::{BatchCoordinator, ProcessingOutcome};
pub use item_worker::{ItemWorker, SuccessCounter, UpdateItemProcessor};
