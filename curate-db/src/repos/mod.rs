//! Curate repository implementations
//!
//! Data access over the SQLite pool. Pagination bounds and sort fields are
//! enforced here, at the query boundary.

mod contributor_repo;
mod list_repo;
mod user_repo;

pub use contributor_repo::*;
pub use list_repo::*;
pub use user_repo::*;

use sqlx::SqlitePool;

use crate::error::{DbError, DbResult};

/// Curate database - main entry point for storage operations
pub struct Database {
    pool: SqlitePool,
    pub lists: ListRepo,
    pub contributors: ContributorRepo,
    pub users: UserRepo,
}

impl Database {
    /// Create a new Database over the given pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            lists: ListRepo::new(pool.clone()),
            contributors: ContributorRepo::new(pool.clone()),
            users: UserRepo::new(pool.clone()),
            pool,
        }
    }

    /// Get the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the curate schema in the database
    pub async fn init_schema(&self) -> DbResult<()> {
        sqlx::raw_sql(crate::schema::CURATE_SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(|e| DbError::SchemaError(e.to_string()))?;
        Ok(())
    }

    /// Check database health
    pub async fn health_check(&self) -> DbResult<bool> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(DbError::Storage)
    }
}
