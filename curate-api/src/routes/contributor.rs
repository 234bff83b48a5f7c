//! Contributor management endpoints
//!
//! Per-list routes resolve the list through the List Manager first: reads
//! need visibility, mutations need ownership.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use curate_db::{ContributorEntity, UserEntity};

use crate::dto::{
    AddContributorsRequest, ContributorResponse, ContributorSearchParams, IdentityResponse,
    PageParams, PageResponse,
};
use crate::error::ApiResult;
use crate::middleware::auth::CallerId;
use crate::state::AppState;

/// Global paginated search over contributor identities
pub async fn search_contributors(
    State(state): State<AppState>,
    Query(params): Query<ContributorSearchParams>,
) -> ApiResult<Json<PageResponse<IdentityResponse>>> {
    let page = state
        .contributors
        .list_contributors(params.q.as_deref(), &params.to_query())
        .await?;

    Ok(Json(PageResponse::from_page(
        page.map(|e| identity_to_response(&e)),
    )))
}

/// Page of one list's contributors
pub async fn list_contributors(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path(list_id): Path<i64>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<PageResponse<ContributorResponse>>> {
    // Visibility check before touching the relationship table
    state.lists.get_one(caller.0, list_id).await?;

    let page = state
        .contributors
        .list_for_list(&params.to_query(), list_id)
        .await?;

    Ok(Json(PageResponse::from_page(
        page.map(|e| contributor_to_response(&e)),
    )))
}

/// Bulk add contributors to an owned list, all-or-nothing
pub async fn add_contributors(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path(list_id): Path<i64>,
    Json(req): Json<AddContributorsRequest>,
) -> ApiResult<(StatusCode, Json<Vec<ContributorResponse>>)> {
    state.lists.get_one_owned(caller.0, list_id).await?;

    let created = state
        .contributors
        .add_bulk(list_id, &req.contributors)
        .await?;

    let items = created.iter().map(contributor_to_response).collect();

    Ok((StatusCode::CREATED, Json(items)))
}

/// Remove one contributor relationship from an owned list
pub async fn remove_contributor(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path((list_id, relationship_id)): Path<(i64, i64)>,
) -> ApiResult<StatusCode> {
    state.lists.get_one_owned(caller.0, list_id).await?;

    state.contributors.remove(list_id, relationship_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// Helper functions

fn contributor_to_response(entity: &ContributorEntity) -> ContributorResponse {
    ContributorResponse {
        id: entity.id,
        list_id: entity.list_id,
        contributor_id: entity.contributor_id,
        created_at: entity.created_at,
    }
}

fn identity_to_response(entity: &UserEntity) -> IdentityResponse {
    IdentityResponse {
        id: entity.id,
        username: entity.username.clone(),
        email: entity.email.clone(),
        created_at: entity.created_at,
    }
}
