//! Contributor Manager service
//!
//! Owns the many-to-many relationship between lists and identities. This
//! service performs no visibility checks of its own; the caller's right to
//! touch a list must already have been established by the List Manager.

use std::sync::Arc;

use futures::future::join_all;

use crate::entities::{ContributorEntity, UserEntity};
use crate::error::{DbError, DbResult};
use crate::pagination::{Page, PageQuery};
use crate::repos::Database;

/// Contributor Manager
pub struct ContributorService {
    database: Arc<Database>,
}

impl ContributorService {
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }

    /// Global paginated search over contributor identities, independent of
    /// any single list. `filter` matches as a substring of username or email.
    pub async fn list_contributors(
        &self,
        filter: Option<&str>,
        page: &PageQuery,
    ) -> DbResult<Page<UserEntity>> {
        let (items, total) = self.database.users.search(filter, page).await?;
        Ok(Page::new(items, total, page))
    }

    /// Contributors of one list, paginated
    pub async fn list_for_list(
        &self,
        page: &PageQuery,
        list_id: i64,
    ) -> DbResult<Page<ContributorEntity>> {
        let (items, total) = self.database.contributors.page_for_list(list_id, page).await?;
        Ok(Page::new(items, total, page))
    }

    /// Add one contributor to a list.
    ///
    /// Not idempotent: a repeated add creates a second relationship row.
    pub async fn add(&self, list_id: i64, contributor_id: i64) -> DbResult<ContributorEntity> {
        if !self.database.users.exists(contributor_id).await? {
            return Err(DbError::InvalidInput(format!(
                "Contributor {} does not exist",
                contributor_id
            )));
        }

        self.database.contributors.create(list_id, contributor_id).await
    }

    /// Add several contributors, all-or-nothing on the result.
    ///
    /// All adds are issued concurrently and awaited; the first failure is
    /// propagated as the whole operation's failure. Adds that already
    /// succeeded stay committed; there is no compensating rollback.
    pub async fn add_bulk(
        &self,
        list_id: i64,
        contributor_ids: &[i64],
    ) -> DbResult<Vec<ContributorEntity>> {
        let attempts = contributor_ids.iter().map(|&id| self.add(list_id, id));
        join_all(attempts).await.into_iter().collect()
    }

    /// Remove one relationship by its own id, scoped to the given list
    pub async fn remove(&self, list_id: i64, relationship_id: i64) -> DbResult<()> {
        let removed = self
            .database
            .contributors
            .delete_scoped(list_id, relationship_id)
            .await?;

        if removed {
            Ok(())
        } else {
            Err(DbError::NotFound(format!(
                "Contributor relationship {} not found for list {}",
                relationship_id, list_id
            )))
        }
    }
}
