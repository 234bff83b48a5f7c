//! List Manager service
//!
//! Caller-scoped CRUD over lists. Every mutating path resolves the list
//! through the owned lookup first; a list the caller does not own reads as
//! not found, so existence is never leaked to non-owners.

use std::sync::Arc;

use futures::future::join_all;

use crate::entities::ListEntity;
use crate::error::{DbError, DbResult};
use crate::pagination::{Page, PageQuery};
use crate::repos::Database;
use crate::services::ContributorService;

/// Fields for a new list
#[derive(Debug, Clone)]
pub struct NewList {
    pub name: String,
    pub is_public: bool,
    /// Contributor ids to seed, best-effort
    pub contributors: Vec<i64>,
}

/// Partial field update for a list
#[derive(Debug, Clone, Default)]
pub struct ListUpdate {
    pub name: Option<String>,
    pub is_public: Option<bool>,
}

/// List Manager
pub struct ListService {
    database: Arc<Database>,
    contributors: Arc<ContributorService>,
}

impl ListService {
    pub fn new(database: Arc<Database>, contributors: Arc<ContributorService>) -> Self {
        Self {
            database,
            contributors,
        }
    }

    /// Lists owned by the caller, paginated
    pub async fn list_for_user(&self, caller: i64, page: &PageQuery) -> DbResult<Page<ListEntity>> {
        let (items, total) = self.database.lists.page_for_owner(caller, page).await?;
        Ok(Page::new(items, total, page))
    }

    /// Create a list owned by the caller, then seed its contributors.
    ///
    /// Seeding is best-effort: all add attempts run concurrently and are
    /// awaited, and individual failures are logged and discarded. The
    /// created list is returned regardless of how many seeds took.
    pub async fn create(&self, caller: i64, new: NewList) -> DbResult<ListEntity> {
        let list = self
            .database
            .lists
            .create(caller, &new.name, new.is_public)
            .await?;

        let attempts = new
            .contributors
            .iter()
            .map(|&contributor_id| self.contributors.add(list.id, contributor_id));

        for (contributor_id, result) in new.contributors.iter().zip(join_all(attempts).await) {
            if let Err(e) = result {
                tracing::warn!(
                    "Skipping contributor {} while seeding list {}: {}",
                    contributor_id,
                    list.id,
                    e
                );
            }
        }

        Ok(list)
    }

    /// Get a list the caller may observe (public or owned)
    pub async fn get_one(&self, caller: i64, list_id: i64) -> DbResult<ListEntity> {
        self.resolve(caller, list_id, false).await
    }

    /// Get a list only if the caller owns it; used before any mutation
    pub async fn get_one_owned(&self, caller: i64, list_id: i64) -> DbResult<ListEntity> {
        self.resolve(caller, list_id, true).await
    }

    /// Apply a partial update to an owned list and return the refreshed row
    pub async fn update(
        &self,
        caller: i64,
        list_id: i64,
        update: ListUpdate,
    ) -> DbResult<ListEntity> {
        self.get_one_owned(caller, list_id).await?;

        self.database
            .lists
            .update(list_id, update.name.as_deref(), update.is_public)
            .await?
            .ok_or_else(|| DbError::NotFound(format!("List {} not found", list_id)))
    }

    /// Delete an owned list together with its contributor relationships
    pub async fn delete(&self, caller: i64, list_id: i64) -> DbResult<()> {
        self.get_one_owned(caller, list_id).await?;
        self.database.lists.delete(list_id).await
    }

    async fn resolve(&self, caller: i64, list_id: i64, require_owner: bool) -> DbResult<ListEntity> {
        self.database
            .lists
            .find_visible(list_id, caller, require_owner)
            .await?
            .ok_or_else(|| DbError::NotFound(format!("List {} not found", list_id)))
    }
}
