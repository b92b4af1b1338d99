use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use cliniccare_core::models::staff::{NewStaff, Staff, StaffPatch};
use cliniccare_store::filter::StaffFilter;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_staff(
    State(state): State<AppState>,
    query: Result<Query<StaffFilter>, QueryRejection>,
) -> Result<Json<Vec<Staff>>, ApiError> {
    let Query(filter) = query?;
    let store = state.store.read().await;
    Ok(Json(store.list_staff(&filter)))
}

pub async fn get_staff(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<Staff>, ApiError> {
    let Path(id) = id?;
    let store = state.store.read().await;
    store
        .staff
        .get(id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn create_staff(
    State(state): State<AppState>,
    body: Result<Json<NewStaff>, JsonRejection>,
) -> Result<(StatusCode, Json<Staff>), ApiError> {
    let Json(input) = body?;
    let member = state.store.write().await.staff.create(input)?;
    Ok((StatusCode::CREATED, Json(member)))
}

pub async fn update_staff(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
    body: Result<Json<StaffPatch>, JsonRejection>,
) -> Result<Json<Staff>, ApiError> {
    let Path(id) = id?;
    let Json(patch) = body?;
    let member = state.store.write().await.staff.update(id, patch)?;
    Ok(Json(member))
}
