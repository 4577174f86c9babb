use crate::config::ServiceConfig;
use crate::error::RepositoryResult;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Pooled PostgreSQL connection built from service configuration
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    pub async fn connect(config: &ServiceConfig) -> RepositoryResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect(&config.database_url)
            .await?;

        info!(
            max_connections = config.database_max_connections,
            "Connected to PostgreSQL"
        );

        Ok(Self { pool })
    }

    /// Wrap an already configured pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply the embedded schema migrations
    pub async fn migrate(&self) -> RepositoryResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Database migrations applied");
        Ok(())
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}
