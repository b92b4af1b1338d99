use std::path::PathBuf;

use thiserror::Error;

use cliniccare_core::CoreError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: u32 },

    #[error("duplicate {kind} id in fixtures: {id}")]
    DuplicateId { kind: &'static str, id: u32 },

    #[error("no {kind} ids left to assign")]
    IdsExhausted { kind: &'static str },

    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
