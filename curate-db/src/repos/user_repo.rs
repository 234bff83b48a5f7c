//! User repository implementation
//!
//! Read-only: identities are created and mutated outside this service.

use sqlx::SqlitePool;

use crate::entities::UserEntity;
use crate::error::DbResult;
use crate::pagination::PageQuery;

const USER_ORDER_FIELDS: [&str; 2] = ["username", "created_at"];

/// User Repository (read-only)
pub struct UserRepo {
    pool: SqlitePool,
}

impl UserRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Check that a user id refers to an existing identity
    pub async fn exists(&self, user_id: i64) -> DbResult<bool> {
        let query = format!(
            "SELECT COUNT(*) FROM {} WHERE id = ?",
            UserEntity::TABLE
        );

        let count = sqlx::query_scalar::<_, i64>(&query)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    /// One page of users matching an optional substring filter on
    /// username or email, plus the total count
    pub async fn search(
        &self,
        filter: Option<&str>,
        page: &PageQuery,
    ) -> DbResult<(Vec<UserEntity>, u64)> {
        page.validate()?;
        let order_column = page.order_column(&USER_ORDER_FIELDS, "username")?;

        let condition = match filter {
            Some(_) => "WHERE username LIKE ? OR email LIKE ?",
            None => "",
        };
        let pattern = filter.map(|f| format!("%{}%", f));

        let query = format!(
            "SELECT * FROM {} {} ORDER BY {} {} LIMIT ? OFFSET ?",
            UserEntity::TABLE,
            condition,
            order_column,
            page.order.as_sql()
        );

        let mut statement = sqlx::query_as::<_, UserEntity>(&query);
        if let Some(ref pattern) = pattern {
            statement = statement.bind(pattern.clone()).bind(pattern.clone());
        }
        let items = statement
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        let count_query = format!("SELECT COUNT(*) FROM {} {}", UserEntity::TABLE, condition);
        let mut count_statement = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(ref pattern) = pattern {
            count_statement = count_statement.bind(pattern.clone()).bind(pattern.clone());
        }
        let total = count_statement.fetch_one(&self.pool).await?;

        Ok((items, total as u64))
    }
}
