//! cliniccare-store
//!
//! Volatile in-process storage for the five ClinicCare collections. Nothing
//! written here survives a restart; the store is rebuilt from fixtures.

pub mod collection;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod store;

pub use collection::Collection;
pub use error::StoreError;
pub use fixtures::Fixtures;
pub use store::ClinicStore;
