//! Pagination model shared by all paginated queries
//!
//! Pages are 1-based. A page past the last one is not an error: it yields
//! an empty item sequence with correct totals.

use serde::{Deserialize, Serialize};

use crate::error::{DbError, DbResult};

/// Hard upper bound for the per-page item limit
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Limit applied when the caller does not provide one
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Validated pagination options for a single query
#[derive(Debug, Clone)]
pub struct PageQuery {
    /// 1-based page number
    pub page: u32,
    /// Items per page, bounded by [`MAX_PAGE_LIMIT`]
    pub limit: u32,
    /// Requested sort field; checked against a per-query whitelist
    pub order_by: Option<String>,
    /// Sort direction
    pub order: SortOrder,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            order_by: None,
            order: SortOrder::Desc,
        }
    }
}

impl PageQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            ..Default::default()
        }
    }

    /// Check page/limit bounds
    pub fn validate(&self) -> DbResult<()> {
        if self.page == 0 {
            return Err(DbError::InvalidInput(
                "page must be a positive integer".to_string(),
            ));
        }
        if self.limit == 0 || self.limit > MAX_PAGE_LIMIT {
            return Err(DbError::InvalidInput(format!(
                "limit must be between 1 and {}",
                MAX_PAGE_LIMIT
            )));
        }
        Ok(())
    }

    /// Row offset for the requested page
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.limit)
    }

    /// Resolve the sort column against a whitelist of queryable fields.
    ///
    /// The resolved name is interpolated into SQL, so anything outside the
    /// whitelist is rejected as invalid input.
    pub fn order_column<'a>(
        &'a self,
        allowed: &[&'static str],
        default: &'static str,
    ) -> DbResult<&'a str> {
        match self.order_by.as_deref() {
            None => Ok(default),
            Some(field) if allowed.contains(&field) => Ok(field),
            Some(field) => Err(DbError::InvalidInput(format!(
                "cannot order by '{}'",
                field
            ))),
        }
    }
}

/// One page of results plus totals across all pages
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, query: &PageQuery) -> Self {
        let total_pages = total.div_ceil(u64::from(query.limit)) as u32;
        Self {
            items,
            total,
            page: query.page,
            total_pages,
        }
    }

    /// Map the item sequence, keeping the totals
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_bounds() {
        assert!(PageQuery::new(1, 20).validate().is_ok());
        assert!(PageQuery::new(0, 20).validate().is_err());
        assert!(PageQuery::new(1, 0).validate().is_err());
        assert!(PageQuery::new(1, MAX_PAGE_LIMIT).validate().is_ok());
        assert!(PageQuery::new(1, MAX_PAGE_LIMIT + 1).validate().is_err());
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageQuery::new(1, 10).offset(), 0);
        assert_eq!(PageQuery::new(2, 10).offset(), 10);
        assert_eq!(PageQuery::new(3, 25).offset(), 50);
    }

    #[test]
    fn test_order_column_whitelist() {
        let allowed = ["name", "created_at"];

        let query = PageQuery::default();
        assert_eq!(query.order_column(&allowed, "created_at").unwrap(), "created_at");

        let mut query = PageQuery::default();
        query.order_by = Some("name".to_string());
        assert_eq!(query.order_column(&allowed, "created_at").unwrap(), "name");

        query.order_by = Some("owner_id; DROP TABLE lists".to_string());
        assert!(query.order_column(&allowed, "created_at").is_err());
    }

    #[test]
    fn test_total_pages() {
        let query = PageQuery::new(2, 10);
        let page: Page<u32> = Page::new(vec![1, 2, 3, 4, 5], 15, &query);
        assert_eq!(page.total, 15);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 2);

        let empty: Page<u32> = Page::new(vec![], 0, &query);
        assert_eq!(empty.total_pages, 0);

        let exact: Page<u32> = Page::new(vec![], 20, &query);
        assert_eq!(exact.total_pages, 2);
    }
}
