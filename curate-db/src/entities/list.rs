//! List entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user-curated list
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ListEntity {
    pub id: i64,
    /// Owning user; never changes after creation
    pub owner_id: i64,
    pub name: String,
    /// Public lists are visible to non-owners
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

impl ListEntity {
    pub const TABLE: &'static str = "lists";
}
