//! PostgreSQL-backed item storage.

use crate::database::ItemRepository;
use crate::error::RepositoryResult;
use crate::models::{ItemId, ItemStatus, NewItem, WorkItem};
use async_trait::async_trait;
use sqlx::PgPool;

const ITEM_COLUMNS: &str = "id, name, description, status, email";

/// Item storage over the `items` table
#[derive(Debug, Clone)]
pub struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn find_by_id(&self, id: ItemId) -> RepositoryResult<Option<WorkItem>> {
        let item = sqlx::query_as::<_, WorkItem>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<WorkItem>> {
        let items = sqlx::query_as::<_, WorkItem>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn insert(&self, item: NewItem) -> RepositoryResult<WorkItem> {
        let stored = sqlx::query_as::<_, WorkItem>(&format!(
            "INSERT INTO items (name, description, status, email) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {ITEM_COLUMNS}"
        ))
        .bind(&item.name)
        .bind(&item.description)
        .bind(ItemStatus::Unprocessed.as_str())
        .bind(&item.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn save(&self, item: WorkItem) -> RepositoryResult<WorkItem> {
        let stored = sqlx::query_as::<_, WorkItem>(&format!(
            "INSERT INTO items (id, name, description, status, email) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (id) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 description = EXCLUDED.description, \
                 status = EXCLUDED.status, \
                 email = EXCLUDED.email \
             RETURNING {ITEM_COLUMNS}"
        ))
        .bind(item.id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.status.as_str())
        .bind(&item.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn delete_by_id(&self, id: ItemId) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_pending_ids(&self) -> RepositoryResult<Vec<ItemId>> {
        let ids = sqlx::query_scalar::<_, ItemId>(
            "SELECT id FROM items WHERE status = $1 ORDER BY id",
        )
        .bind(ItemStatus::Unprocessed.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    async fn health_check(&self) -> RepositoryResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
