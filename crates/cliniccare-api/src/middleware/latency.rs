use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::state::AppState;

/// Hold every request for the configured delay before it reaches a handler,
/// so the console can be exercised against network-like response times.
pub async fn simulate_latency(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if !state.simulated_latency.is_zero() {
        tokio::time::sleep(state.simulated_latency).await;
    }
    next.run(req).await
}
