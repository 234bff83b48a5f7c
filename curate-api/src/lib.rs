//! Curate API Server
//!
//! REST API for user-curated lists and their contributors.
//!
//! ## Endpoints
//!
//! ### List Management
//! - GET /lists - Page of the caller's lists
//! - POST /lists - Create a list (with best-effort contributor seeding)
//! - GET /lists/:list_id - Get a list (public or owned)
//! - PATCH /lists/:list_id - Update a list (owner only)
//! - DELETE /lists/:list_id - Delete a list (owner only)
//!
//! ### Contributor Management
//! - GET /lists/contributors - Search contributor identities
//! - GET /lists/:list_id/contributors - Page of a list's contributors
//! - POST /lists/:list_id/contributors - Bulk add, all-or-nothing
//! - DELETE /lists/:list_id/contributors/:relationship_id - Remove one
//!
//! All /lists routes require a Bearer JWT whose subject is the caller's
//! numeric user id. /health and /ready are open.

pub mod dto;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use middleware::auth::{AuthClaims, CallerId, JwtConfig};
pub use routes::create_router;
pub use server::{create_server, run_server, start_background_server};
pub use state::{ApiConfig, AppState};
