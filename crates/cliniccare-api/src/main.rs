use tracing_subscriber::EnvFilter;

use cliniccare_api::config::ServerConfig;
use cliniccare_api::state::AppState;
use cliniccare_store::{ClinicStore, Fixtures};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServerConfig::from_env()?;

    let fixtures = match &config.fixtures_path {
        Some(path) => Fixtures::load(path).await?,
        None => {
            tracing::info!("no fixture file configured, using built-in demo data");
            Fixtures::builtin()?
        }
    };
    let store = ClinicStore::new(fixtures)?;

    let app = cliniccare_api::router(AppState::new(store, config.simulated_latency));

    if config.lambda {
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %config.bind, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
