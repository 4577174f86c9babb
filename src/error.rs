//! # Error Types
//!
//! Structured error handling for item storage and processing using thiserror.
//! Every processing failure carries the identifier of the item it belongs to so
//! that a failed outcome can be reported without any surrounding context.

use crate::models::ItemId;
use thiserror::Error;

/// Failures raised by an [`ItemRepository`](crate::database::ItemRepository) backend
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Failures of a single item operation
#[derive(Error, Debug)]
pub enum ItemError {
    #[error("Item with id: {item_id} not found")]
    NotFound { item_id: ItemId },

    #[error("Storage failure for item {item_id}: {source}")]
    Storage {
        item_id: ItemId,
        #[source]
        source: RepositoryError,
    },

    #[error("Processing task for item {item_id} aborted: {reason}")]
    TaskAborted { item_id: ItemId, reason: String },

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
}

impl ItemError {
    pub fn not_found(item_id: ItemId) -> Self {
        Self::NotFound { item_id }
    }

    pub fn storage(item_id: ItemId, source: RepositoryError) -> Self {
        Self::Storage { item_id, source }
    }

    /// Identifier of the failing item, when the failure is tied to one
    pub fn item_id(&self) -> Option<ItemId> {
        match self {
            Self::NotFound { item_id }
            | Self::Storage { item_id, .. }
            | Self::TaskAborted { item_id, .. } => Some(*item_id),
            Self::Repository(_) | Self::Validation(_) => None,
        }
    }
}

pub type ItemResult<T> = std::result::Result<T, ItemError>;

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;
