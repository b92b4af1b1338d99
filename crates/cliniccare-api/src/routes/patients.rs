use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Serialize;

use cliniccare_core::models::patient::{NewPatient, Patient, PatientPatch};
use cliniccare_core::models::stats::PatientStats;
use cliniccare_store::filter::{BranchScope, PatientFilter};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct Deleted {
    pub ok: bool,
}

pub async fn list_patients(
    State(state): State<AppState>,
    query: Result<Query<PatientFilter>, QueryRejection>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    let Query(filter) = query?;
    let store = state.store.read().await;
    Ok(Json(store.list_patients(&filter)))
}

pub async fn patient_stats(
    State(state): State<AppState>,
    query: Result<Query<BranchScope>, QueryRejection>,
) -> Result<Json<PatientStats>, ApiError> {
    let Query(scope) = query?;
    let store = state.store.read().await;
    Ok(Json(store.patient_stats(scope.branch_id)))
}

pub async fn get_patient(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<Patient>, ApiError> {
    let Path(id) = id?;
    let store = state.store.read().await;
    store
        .patients
        .get(id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn create_patient(
    State(state): State<AppState>,
    body: Result<Json<NewPatient>, JsonRejection>,
) -> Result<(StatusCode, Json<Patient>), ApiError> {
    let Json(input) = body?;
    let patient = state.store.write().await.patients.create(input)?;
    tracing::info!(patient_id = patient.id, "patient registered");
    Ok((StatusCode::CREATED, Json(patient)))
}

/// Shallow merge of the body into the stored record.
pub async fn update_patient(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
    body: Result<Json<PatientPatch>, JsonRejection>,
) -> Result<Json<Patient>, ApiError> {
    let Path(id) = id?;
    let Json(patch) = body?;
    let patient = state.store.write().await.patients.update(id, patch)?;
    Ok(Json(patient))
}

/// Appointments that reference the patient are kept.
pub async fn delete_patient(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<Deleted>, ApiError> {
    let Path(id) = id?;
    state.store.write().await.patients.delete(id)?;
    tracing::info!(patient_id = id, "patient deleted");
    Ok(Json(Deleted { ok: true }))
}
