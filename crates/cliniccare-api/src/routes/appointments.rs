use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use cliniccare_core::models::appointment::{Appointment, AppointmentPatch, NewAppointment};
use cliniccare_core::models::stats::AppointmentStats;
use cliniccare_store::filter::{AppointmentFilter, BranchScope};

use crate::error::ApiError;
use crate::state::AppState;

/// Newest appointment first.
pub async fn list_appointments(
    State(state): State<AppState>,
    query: Result<Query<AppointmentFilter>, QueryRejection>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    let Query(filter) = query?;
    let store = state.store.read().await;
    Ok(Json(store.list_appointments(&filter)))
}

pub async fn appointment_stats(
    State(state): State<AppState>,
    query: Result<Query<BranchScope>, QueryRejection>,
) -> Result<Json<AppointmentStats>, ApiError> {
    let Query(scope) = query?;
    let store = state.store.read().await;
    Ok(Json(store.appointment_stats(scope.branch_id)))
}

pub async fn get_appointment(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<Appointment>, ApiError> {
    let Path(id) = id?;
    let store = state.store.read().await;
    store
        .appointments
        .get(id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn create_appointment(
    State(state): State<AppState>,
    body: Result<Json<NewAppointment>, JsonRejection>,
) -> Result<(StatusCode, Json<Appointment>), ApiError> {
    let Json(input) = body?;
    let appointment = state.store.write().await.appointments.create(input)?;
    tracing::info!(
        appointment_id = appointment.id,
        patient_id = appointment.patient_id,
        "appointment booked"
    );
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// Status changes go through the appointment state machine; a move out of
/// `completed` or `cancelled` is a 400.
pub async fn update_appointment(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
    body: Result<Json<AppointmentPatch>, JsonRejection>,
) -> Result<Json<Appointment>, ApiError> {
    let Path(id) = id?;
    let Json(patch) = body?;
    let appointment = state.store.write().await.appointments.update(id, patch)?;
    Ok(Json(appointment))
}
