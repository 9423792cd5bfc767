// ABOUTME: Database state shared by HTTP handlers
// ABOUTME: Owns the pool and the address repository built on it

use std::sync::Arc;

use sqlx::SqlitePool;
use tracing::debug;

use addrbook_storage::{StorageConfig, StorageError, StorageResult};

use crate::storage::AddressStorage;

/// Shared database state for API handlers
#[derive(Clone)]
pub struct DbState {
    pub pool: SqlitePool,
    pub address_storage: Arc<AddressStorage>,
}

impl DbState {
    /// Create new database state from a SQLite pool
    pub fn new(pool: SqlitePool) -> Self {
        let address_storage = Arc::new(AddressStorage::new(pool.clone()));
        Self {
            pool,
            address_storage,
        }
    }

    /// Open the configured database, run migrations, and build the
    /// handler state. The configuration decides which database backs
    /// the state; tests pass an isolated one instead of flipping a
    /// process-wide flag.
    pub async fn init(config: &StorageConfig) -> StorageResult<Self> {
        let pool = addrbook_storage::connect(config).await?;

        sqlx::migrate!("../storage/migrations")
            .run(&pool)
            .await
            .map_err(StorageError::Migration)?;

        debug!("Database migrations completed");

        Ok(Self::new(pool))
    }
}
