//! Contributor relationship entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One identity's membership in one list's collaborator set.
///
/// Join rows are addressed by their own `id`, not by `contributor_id`;
/// duplicate `(list_id, contributor_id)` pairs may exist.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ContributorEntity {
    pub id: i64,
    pub list_id: i64,
    pub contributor_id: i64,
    pub created_at: DateTime<Utc>,
}

impl ContributorEntity {
    pub const TABLE: &'static str = "list_contributors";
}
