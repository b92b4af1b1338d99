use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use cliniccare_core::models::branch::{Branch, BranchPatch, BranchSummary, NewBranch};
use cliniccare_store::filter::BranchFilter;

use crate::error::ApiError;
use crate::state::AppState;

/// The branch picker only needs `{id, name}`.
pub async fn list_branches(
    State(state): State<AppState>,
    query: Result<Query<BranchFilter>, QueryRejection>,
) -> Result<Json<Vec<BranchSummary>>, ApiError> {
    let Query(filter) = query?;
    let store = state.store.read().await;
    let summaries = store
        .list_branches(&filter)
        .iter()
        .map(BranchSummary::from)
        .collect();
    Ok(Json(summaries))
}

pub async fn get_branch(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<Branch>, ApiError> {
    let Path(id) = id?;
    let store = state.store.read().await;
    store
        .branches
        .get(id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn create_branch(
    State(state): State<AppState>,
    body: Result<Json<NewBranch>, JsonRejection>,
) -> Result<(StatusCode, Json<Branch>), ApiError> {
    let Json(input) = body?;
    let branch = state.store.write().await.branches.create(input)?;
    Ok((StatusCode::CREATED, Json(branch)))
}

pub async fn update_branch(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
    body: Result<Json<BranchPatch>, JsonRejection>,
) -> Result<Json<Branch>, ApiError> {
    let Path(id) = id?;
    let Json(patch) = body?;
    let branch = state.store.write().await.branches.update(id, patch)?;
    Ok(Json(branch))
}
