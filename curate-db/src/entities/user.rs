//! User entity (external identity)
//!
//! Users are created and maintained elsewhere; this layer only references
//! them as list owners and contributors and reads them for search.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserEntity {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl UserEntity {
    pub const TABLE: &'static str = "users";
}
