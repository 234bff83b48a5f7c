//! Contributor relationship repository implementation

use chrono::Utc;
use sqlx::SqlitePool;

use crate::entities::ContributorEntity;
use crate::error::DbResult;
use crate::pagination::PageQuery;

const CONTRIBUTOR_ORDER_FIELDS: [&str; 2] = ["contributor_id", "created_at"];

/// Contributor Relationship Repository
pub struct ContributorRepo {
    pool: SqlitePool,
}

impl ContributorRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new relationship. No uniqueness is enforced on
    /// `(list_id, contributor_id)`; repeated inserts create duplicates.
    pub async fn create(&self, list_id: i64, contributor_id: i64) -> DbResult<ContributorEntity> {
        let query = format!(
            "INSERT INTO {} (list_id, contributor_id, created_at) VALUES (?, ?, ?) RETURNING *",
            ContributorEntity::TABLE
        );

        let entity = sqlx::query_as::<_, ContributorEntity>(&query)
            .bind(list_id)
            .bind(contributor_id)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await?;

        Ok(entity)
    }

    /// One page of a list's relationships, plus the total count
    pub async fn page_for_list(
        &self,
        list_id: i64,
        page: &PageQuery,
    ) -> DbResult<(Vec<ContributorEntity>, u64)> {
        page.validate()?;
        let order_column = page.order_column(&CONTRIBUTOR_ORDER_FIELDS, "created_at")?;

        let query = format!(
            "SELECT * FROM {} WHERE list_id = ? ORDER BY {} {} LIMIT ? OFFSET ?",
            ContributorEntity::TABLE,
            order_column,
            page.order.as_sql()
        );

        let items = sqlx::query_as::<_, ContributorEntity>(&query)
            .bind(list_id)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        let count_query = format!(
            "SELECT COUNT(*) FROM {} WHERE list_id = ?",
            ContributorEntity::TABLE
        );
        let total = sqlx::query_scalar::<_, i64>(&count_query)
            .bind(list_id)
            .fetch_one(&self.pool)
            .await?;

        Ok((items, total as u64))
    }

    /// Delete one relationship by its own id, scoped to `list_id`.
    ///
    /// Returns whether a row was actually removed.
    pub async fn delete_scoped(&self, list_id: i64, relationship_id: i64) -> DbResult<bool> {
        let query = format!(
            "DELETE FROM {} WHERE id = ? AND list_id = ?",
            ContributorEntity::TABLE
        );

        let result = sqlx::query(&query)
            .bind(relationship_id)
            .bind(list_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
