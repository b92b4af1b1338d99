use std::path::Path;

use serde::{Deserialize, Serialize};

use cliniccare_core::models::appointment::Appointment;
use cliniccare_core::models::branch::Branch;
use cliniccare_core::models::inventory::InventoryItem;
use cliniccare_core::models::patient::Patient;
use cliniccare_core::models::staff::Staff;

use crate::error::StoreError;

const BUILTIN: &str = include_str!("../fixtures/seed.json");

/// Initial contents of a [`ClinicStore`](crate::ClinicStore).
///
/// Fixture files hold fully-formed records, ids and timestamps included.
/// Any collection left out of the file starts empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixtures {
    pub branches: Vec<Branch>,
    pub patients: Vec<Patient>,
    pub staff: Vec<Staff>,
    pub appointments: Vec<Appointment>,
    pub inventory: Vec<InventoryItem>,
}

impl Fixtures {
    /// The demo data set compiled into the crate.
    pub fn builtin() -> Result<Self, StoreError> {
        Self::from_json(BUILTIN.as_bytes())
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, StoreError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Read a fixture file from disk.
    pub async fn load(path: &Path) -> Result<Self, StoreError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let fixtures = Self::from_json(&bytes)?;

        tracing::info!(
            path = %path.display(),
            branches = fixtures.branches.len(),
            patients = fixtures.patients.len(),
            staff = fixtures.staff.len(),
            appointments = fixtures.appointments.len(),
            inventory = fixtures.inventory.len(),
            "fixtures loaded"
        );
        Ok(fixtures)
    }
}
