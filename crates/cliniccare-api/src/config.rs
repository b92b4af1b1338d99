use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_BIND: &str = "0.0.0.0:3000";

/// Process configuration, read once from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Fixture file to seed from. Built-in fixtures when unset.
    pub fixtures_path: Option<PathBuf>,
    pub simulated_latency: Duration,
    /// Serve through the Lambda runtime instead of a TCP listener.
    pub lambda: bool,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = var("CLINICCARE_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| eyre::eyre!("CLINICCARE_BIND '{bind_raw}' is not a socket address: {e}"))?;

        let simulated_latency = match var("CLINICCARE_SIMULATED_LATENCY_MS") {
            Some(raw) => {
                let ms = raw.trim().parse::<u64>().map_err(|e| {
                    eyre::eyre!("CLINICCARE_SIMULATED_LATENCY_MS '{raw}' is not a number: {e}")
                })?;
                Duration::from_millis(ms)
            }
            None => Duration::ZERO,
        };

        Ok(Self {
            bind,
            fixtures_path: var("CLINICCARE_FIXTURES").map(PathBuf::from),
            simulated_latency,
            lambda: var("AWS_LAMBDA_RUNTIME_API").is_some(),
        })
    }
}
