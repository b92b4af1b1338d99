use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use cliniccare_store::ClinicStore;

/// Shared application state, injected into all route handlers via Axum state.
///
/// One store per process. Reads share the lock; every write takes it
/// exclusively, so concurrent updates to a record are serialized.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<ClinicStore>>,
    pub simulated_latency: Duration,
}

impl AppState {
    pub fn new(store: ClinicStore, simulated_latency: Duration) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            simulated_latency,
        }
    }
}
