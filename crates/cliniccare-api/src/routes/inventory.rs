use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use cliniccare_core::models::inventory::{InventoryItem, InventoryPatch, NewInventoryItem};
use cliniccare_store::filter::{BranchScope, InventoryFilter};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_inventory(
    State(state): State<AppState>,
    query: Result<Query<InventoryFilter>, QueryRejection>,
) -> Result<Json<Vec<InventoryItem>>, ApiError> {
    let Query(filter) = query?;
    let store = state.store.read().await;
    Ok(Json(store.list_inventory(&filter)))
}

pub async fn low_stock(
    State(state): State<AppState>,
    query: Result<Query<BranchScope>, QueryRejection>,
) -> Result<Json<Vec<InventoryItem>>, ApiError> {
    let Query(scope) = query?;
    let store = state.store.read().await;
    Ok(Json(store.low_stock(scope.branch_id)))
}

pub async fn get_item(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<InventoryItem>, ApiError> {
    let Path(id) = id?;
    let store = state.store.read().await;
    store
        .inventory
        .get(id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn create_item(
    State(state): State<AppState>,
    body: Result<Json<NewInventoryItem>, JsonRejection>,
) -> Result<(StatusCode, Json<InventoryItem>), ApiError> {
    let Json(input) = body?;
    let item = state.store.write().await.inventory.create(input)?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_item(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
    body: Result<Json<InventoryPatch>, JsonRejection>,
) -> Result<Json<InventoryItem>, ApiError> {
    let Path(id) = id?;
    let Json(patch) = body?;
    let item = state.store.write().await.inventory.update(id, patch)?;
    if item.is_low_stock() {
        tracing::warn!(
            item_id = item.id,
            quantity = item.quantity,
            threshold = item.reorder_threshold(),
            "inventory item at or below reorder level"
        );
    }
    Ok(Json(item))
}
