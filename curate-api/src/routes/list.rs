//! List management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use curate_db::{ListEntity, ListUpdate, NewList};

use crate::dto::{
    CreateListRequest, ListResponse, PageParams, PageResponse, UpdateListRequest,
};
use crate::error::ApiResult;
use crate::middleware::auth::CallerId;
use crate::state::AppState;

/// Page of lists owned by the caller
pub async fn list_lists(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<PageResponse<ListResponse>>> {
    let page = state
        .lists
        .list_for_user(caller.0, &params.to_query())
        .await?;

    Ok(Json(PageResponse::from_page(
        page.map(|e| list_to_response(&e)),
    )))
}

/// Create a list owned by the caller
pub async fn create_list(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Json(req): Json<CreateListRequest>,
) -> ApiResult<(StatusCode, Json<ListResponse>)> {
    let list = state
        .lists
        .create(
            caller.0,
            NewList {
                name: req.name,
                is_public: req.is_public,
                contributors: req.contributors,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(list_to_response(&list))))
}

/// Get a list the caller may observe
pub async fn get_list(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path(list_id): Path<i64>,
) -> ApiResult<Json<ListResponse>> {
    let list = state.lists.get_one(caller.0, list_id).await?;

    Ok(Json(list_to_response(&list)))
}

/// Update a list owned by the caller
pub async fn update_list(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path(list_id): Path<i64>,
    Json(req): Json<UpdateListRequest>,
) -> ApiResult<Json<ListResponse>> {
    let list = state
        .lists
        .update(
            caller.0,
            list_id,
            ListUpdate {
                name: req.name,
                is_public: req.is_public,
            },
        )
        .await?;

    Ok(Json(list_to_response(&list)))
}

/// Delete a list owned by the caller
pub async fn delete_list(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerId>,
    Path(list_id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.lists.delete(caller.0, list_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// Helper functions

pub(crate) fn list_to_response(entity: &ListEntity) -> ListResponse {
    ListResponse {
        id: entity.id,
        owner_id: entity.owner_id,
        name: entity.name.clone(),
        is_public: entity.is_public,
        created_at: entity.created_at,
    }
}
