//! API route handlers

pub mod contributor;
pub mod health;
pub mod list;

use axum::{
    middleware,
    routing::{delete, get, patch, post},
    Router,
};

use crate::middleware::auth::require_auth;
use crate::state::AppState;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    // Everything under /lists requires an authenticated caller. The static
    // /lists/contributors segment must be registered alongside /lists/:list_id;
    // axum gives the static route priority.
    let protected = Router::new()
        // List endpoints
        .route("/lists", get(list::list_lists))
        .route("/lists", post(list::create_list))
        .route("/lists/:list_id", get(list::get_list))
        .route("/lists/:list_id", patch(list::update_list))
        .route("/lists/:list_id", delete(list::delete_list))
        // Contributor endpoints
        .route("/lists/contributors", get(contributor::search_contributors))
        .route(
            "/lists/:list_id/contributors",
            get(contributor::list_contributors),
        )
        .route(
            "/lists/:list_id/contributors",
            post(contributor::add_contributors),
        )
        .route(
            "/lists/:list_id/contributors/:relationship_id",
            delete(contributor::remove_contributor),
        )
        .layer(middleware::from_fn_with_state(
            state.auth.clone(),
            require_auth,
        ));

    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .merge(protected)
        // State
        .with_state(state)
}
