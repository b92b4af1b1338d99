use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use cliniccare_core::models::stats::DashboardSummary;
use cliniccare_store::filter::BranchScope;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn dashboard(
    State(state): State<AppState>,
    query: Result<Query<BranchScope>, QueryRejection>,
) -> Result<Json<DashboardSummary>, ApiError> {
    let Query(scope) = query?;
    let store = state.store.read().await;
    Ok(Json(store.dashboard(scope.branch_id)))
}
