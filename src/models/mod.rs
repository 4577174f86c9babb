//! # Data Models
//!
//! Stored work items and the payloads used to create or replace them.

pub mod item;

pub use item::{ItemId, ItemStatus, NewItem, ParseStatusError, WorkItem};
