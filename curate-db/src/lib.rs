//! Curate Database Layer
//!
//! Provides storage and domain services for user-curated lists and their
//! contributors, using SQLite (via sqlx) as the persistence layer.
//!
//! # Usage Example
//!
//! ```ignore
//! use curate_db::{Database, ListService};
//! use sqlx::sqlite::SqlitePoolOptions;
//! use std::sync::Arc;
//!
//! async fn example() {
//!     let pool = SqlitePoolOptions::new()
//!         .connect("sqlite::memory:")
//!         .await
//!         .unwrap();
//!     let db = Arc::new(Database::new(pool));
//!     db.init_schema().await.unwrap();
//! }
//! ```

pub mod entities;
pub mod error;
pub mod pagination;
pub mod repos;
pub mod schema;
pub mod services;

// Re-export main types
pub use entities::*;
pub use error::*;
pub use pagination::{Page, PageQuery, SortOrder, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
pub use repos::*;
pub use schema::CURATE_SCHEMA;
pub use services::{ContributorService, ListService, ListUpdate, NewList};
