//! Query filters. Every field is optional; an unset field does not narrow
//! the result. Field names match the query-string parameters the console
//! sends (`?branchId=2&search=doe`).

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::de::{self, Deserializer};
use serde::Deserialize;

use cliniccare_core::models::appointment::AppointmentStatus;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchFilter {
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientFilter {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub branch_id: Option<u32>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffFilter {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub branch_id: Option<u32>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentFilter {
    /// Matched through the appointment's patient.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub branch_id: Option<u32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub patient_id: Option<u32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub staff_id: Option<u32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub status: Option<AppointmentStatus>,
    /// Inclusive, by calendar day.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub date_from: Option<Date>,
    /// Inclusive, by calendar day.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub date_to: Option<Date>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryFilter {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub branch_id: Option<u32>,
    pub search: Option<String>,
    #[serde(default)]
    pub low_stock: bool,
}

/// Scope for the stats endpoints.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchScope {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub branch_id: Option<u32>,
}

/// Query values arrive as text. A blank value (`?branchId=`) is treated as
/// if the parameter were absent.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

/// Lowercased, trimmed search term. Blank terms mean "no text filter".
pub(crate) fn needle(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase)
}
