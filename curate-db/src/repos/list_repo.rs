//! List repository implementation

use chrono::Utc;
use sqlx::SqlitePool;

use crate::entities::{ContributorEntity, ListEntity};
use crate::error::DbResult;
use crate::pagination::PageQuery;

/// Sort fields accepted for list pages
const LIST_ORDER_FIELDS: [&str; 2] = ["name", "created_at"];

/// List Repository
pub struct ListRepo {
    pool: SqlitePool,
}

impl ListRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new list owned by `owner_id`
    pub async fn create(&self, owner_id: i64, name: &str, is_public: bool) -> DbResult<ListEntity> {
        let query = format!(
            "INSERT INTO {} (owner_id, name, is_public, created_at) VALUES (?, ?, ?, ?) RETURNING *",
            ListEntity::TABLE
        );

        let entity = sqlx::query_as::<_, ListEntity>(&query)
            .bind(owner_id)
            .bind(name)
            .bind(is_public)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await?;

        Ok(entity)
    }

    /// Look up a list as seen by `user_id`.
    ///
    /// With `require_owner` set, only the owner gets a hit; otherwise public
    /// lists are also returned. A list the caller may not see is
    /// indistinguishable from a missing one.
    pub async fn find_visible(
        &self,
        list_id: i64,
        user_id: i64,
        require_owner: bool,
    ) -> DbResult<Option<ListEntity>> {
        let query = if require_owner {
            format!(
                "SELECT * FROM {} WHERE id = ? AND owner_id = ? LIMIT 1",
                ListEntity::TABLE
            )
        } else {
            format!(
                "SELECT * FROM {} WHERE id = ? AND (is_public = 1 OR owner_id = ?) LIMIT 1",
                ListEntity::TABLE
            )
        };

        let entity = sqlx::query_as::<_, ListEntity>(&query)
            .bind(list_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(entity)
    }

    /// One page of lists owned by `owner_id`, plus the total count
    pub async fn page_for_owner(
        &self,
        owner_id: i64,
        page: &PageQuery,
    ) -> DbResult<(Vec<ListEntity>, u64)> {
        page.validate()?;
        let order_column = page.order_column(&LIST_ORDER_FIELDS, "created_at")?;

        let query = format!(
            "SELECT * FROM {} WHERE owner_id = ? ORDER BY {} {} LIMIT ? OFFSET ?",
            ListEntity::TABLE,
            order_column,
            page.order.as_sql()
        );

        let items = sqlx::query_as::<_, ListEntity>(&query)
            .bind(owner_id)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        let count_query = format!(
            "SELECT COUNT(*) FROM {} WHERE owner_id = ?",
            ListEntity::TABLE
        );
        let total = sqlx::query_scalar::<_, i64>(&count_query)
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await?;

        Ok((items, total as u64))
    }

    /// Apply a partial field update and return the refreshed row.
    ///
    /// Returns `None` if the list no longer exists.
    pub async fn update(
        &self,
        list_id: i64,
        name: Option<&str>,
        is_public: Option<bool>,
    ) -> DbResult<Option<ListEntity>> {
        let mut assignments = Vec::new();
        if name.is_some() {
            assignments.push("name = ?");
        }
        if is_public.is_some() {
            assignments.push("is_public = ?");
        }

        if assignments.is_empty() {
            let query = format!("SELECT * FROM {} WHERE id = ?", ListEntity::TABLE);
            let entity = sqlx::query_as::<_, ListEntity>(&query)
                .bind(list_id)
                .fetch_optional(&self.pool)
                .await?;
            return Ok(entity);
        }

        let query = format!(
            "UPDATE {} SET {} WHERE id = ? RETURNING *",
            ListEntity::TABLE,
            assignments.join(", ")
        );

        let mut statement = sqlx::query_as::<_, ListEntity>(&query);
        if let Some(name) = name {
            statement = statement.bind(name.to_string());
        }
        if let Some(is_public) = is_public {
            statement = statement.bind(is_public);
        }

        let entity = statement.bind(list_id).fetch_optional(&self.pool).await?;
        Ok(entity)
    }

    /// Delete a list and cascade removal of its contributor relationships
    pub async fn delete(&self, list_id: i64) -> DbResult<()> {
        let mut tx = self.pool.begin().await?;

        let contributors_query = format!(
            "DELETE FROM {} WHERE list_id = ?",
            ContributorEntity::TABLE
        );
        sqlx::query(&contributors_query)
            .bind(list_id)
            .execute(&mut *tx)
            .await?;

        let list_query = format!("DELETE FROM {} WHERE id = ?", ListEntity::TABLE);
        sqlx::query(&list_query)
            .bind(list_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
