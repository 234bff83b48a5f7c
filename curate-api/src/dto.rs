//! Data Transfer Objects for API requests and responses

use chrono::{DateTime, Utc};
use curate_db::{Page, PageQuery, SortOrder, DEFAULT_PAGE_LIMIT};
use serde::{Deserialize, Serialize};

// ============ List DTOs ============

/// Create list request
#[derive(Debug, Deserialize)]
pub struct CreateListRequest {
    pub name: String,
    #[serde(default)]
    pub is_public: bool,
    /// Contributor ids to seed; failures are tolerated per id
    #[serde(default)]
    pub contributors: Vec<i64>,
}

/// Partial list update request
#[derive(Debug, Deserialize)]
pub struct UpdateListRequest {
    pub name: Option<String>,
    pub is_public: Option<bool>,
}

/// List response
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

// ============ Contributor DTOs ============

/// Bulk contributor add request (all-or-nothing)
#[derive(Debug, Deserialize)]
pub struct AddContributorsRequest {
    pub contributors: Vec<i64>,
}

/// Contributor relationship response
#[derive(Debug, Serialize)]
pub struct ContributorResponse {
    pub id: i64,
    pub list_id: i64,
    pub contributor_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Contributor identity response
#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

// ============ Pagination ============

/// Paginated page envelope
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub total_pages: u32,
}

impl<T> PageResponse<T> {
    pub fn from_page(page: Page<T>) -> Self {
        Self {
            items: page.items,
            total: page.total,
            page: page.page,
            total_pages: page.total_pages,
        }
    }
}

/// Query parameters for paginated endpoints
#[derive(Debug, Deserialize, Default)]
pub struct PageParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    pub order_by: Option<String>,
    #[serde(default)]
    pub order: SortOrder,
}

impl PageParams {
    pub fn to_query(&self) -> PageQuery {
        PageQuery {
            page: self.page,
            limit: self.limit,
            order_by: self.order_by.clone(),
            order: self.order,
        }
    }
}

/// Query parameters for the global contributor search
#[derive(Debug, Deserialize, Default)]
pub struct ContributorSearchParams {
    /// Substring filter on username or email
    pub q: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    pub order_by: Option<String>,
    #[serde(default)]
    pub order: SortOrder,
}

impl ContributorSearchParams {
    pub fn to_query(&self) -> PageQuery {
        PageQuery {
            page: self.page,
            limit: self.limit,
            order_by: self.order_by.clone(),
            order: self.order,
        }
    }
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

// ============ Health DTOs ============

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
