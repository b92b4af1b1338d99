//! cliniccare-api
//!
//! REST surface of the ClinicCare console. Handlers are thin: they parse the
//! request, take the store lock, and map store results onto HTTP responses.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/dashboard", get(routes::dashboard::dashboard))
        // Branches
        .route(
            "/branches",
            get(routes::branches::list_branches).post(routes::branches::create_branch),
        )
        .route(
            "/branches/{id}",
            get(routes::branches::get_branch).put(routes::branches::update_branch),
        )
        // Patients
        .route(
            "/patients",
            get(routes::patients::list_patients).post(routes::patients::create_patient),
        )
        .route("/patients/stats", get(routes::patients::patient_stats))
        .route(
            "/patients/{id}",
            get(routes::patients::get_patient)
                .put(routes::patients::update_patient)
                .delete(routes::patients::delete_patient),
        )
        // Staff
        .route(
            "/staff",
            get(routes::staff::list_staff).post(routes::staff::create_staff),
        )
        .route(
            "/staff/{id}",
            get(routes::staff::get_staff).put(routes::staff::update_staff),
        )
        // Appointments
        .route(
            "/appointments",
            get(routes::appointments::list_appointments)
                .post(routes::appointments::create_appointment),
        )
        .route(
            "/appointments/stats",
            get(routes::appointments::appointment_stats),
        )
        .route(
            "/appointments/{id}",
            get(routes::appointments::get_appointment)
                .put(routes::appointments::update_appointment),
        )
        // Inventory
        .route(
            "/inventory",
            get(routes::inventory::list_inventory).post(routes::inventory::create_item),
        )
        .route("/inventory/low-stock", get(routes::inventory::low_stock))
        .route(
            "/inventory/{id}",
            get(routes::inventory::get_item).put(routes::inventory::update_item),
        )
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::audit::audit_log))
                .layer(cors)
                .layer(axum_mw::from_fn_with_state(
                    state.clone(),
                    middleware::latency::simulate_latency,
                )),
        )
        .with_state(state)
}
