//! cliniccare-core
//!
//! Pure domain types for the ClinicCare console: stored records, validated
//! inputs, patches and derived statistics. No I/O lives here.

pub mod entity;
pub mod error;
pub mod models;
pub mod patch;
pub mod validate;

pub use entity::Entity;
pub use error::CoreError;
