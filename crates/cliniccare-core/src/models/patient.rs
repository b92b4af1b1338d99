use jiff::Timestamp;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::entity::Entity;
use crate::error::CoreError;
use crate::validate::{self, Validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Patient {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<Date>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
    /// Home branch. Not checked against the branch collection.
    pub branch_id: Option<u32>,
    pub last_visit: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Registration payload. Only the name is required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<Date>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub branch_id: Option<u32>,
    #[serde(default)]
    pub last_visit: Option<Date>,
}

impl NewPatient {
    pub fn named(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }
}

impl Validate for NewPatient {
    fn validate(&self) -> Result<(), CoreError> {
        validate::required("firstName", &self.first_name)?;
        validate::required("lastName", &self.last_name)?;
        validate::email("email", self.email.as_deref())?;
        if let Some(branch_id) = self.branch_id {
            validate::id("branchId", branch_id)?;
        }
        Ok(())
    }
}

/// Shallow update. Optional fields take `Some(None)` (a JSON `null`) to
/// clear the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PatientPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "crate::patch::nullable")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::patch::nullable")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::patch::nullable")]
    pub date_of_birth: Option<Option<Date>>,
    #[serde(default, deserialize_with = "crate::patch::nullable")]
    pub gender: Option<Option<Gender>>,
    #[serde(default, deserialize_with = "crate::patch::nullable")]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::patch::nullable")]
    pub branch_id: Option<Option<u32>>,
    #[serde(default, deserialize_with = "crate::patch::nullable")]
    pub last_visit: Option<Option<Date>>,
}

impl Validate for PatientPatch {
    fn validate(&self) -> Result<(), CoreError> {
        validate::required_if_present("firstName", self.first_name.as_deref())?;
        validate::required_if_present("lastName", self.last_name.as_deref())?;
        validate::email("email", self.email.as_ref().and_then(|e| e.as_deref()))?;
        if let Some(Some(branch_id)) = self.branch_id {
            validate::id("branchId", branch_id)?;
        }
        Ok(())
    }
}

impl Entity for Patient {
    const KIND: &'static str = "patient";

    type New = NewPatient;
    type Patch = PatientPatch;

    fn id(&self) -> u32 {
        self.id
    }

    fn create(id: u32, input: NewPatient, now: Timestamp) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            date_of_birth: input.date_of_birth,
            gender: input.gender,
            address: input.address,
            branch_id: input.branch_id,
            last_visit: input.last_visit,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: PatientPatch, now: Timestamp) -> Result<(), CoreError> {
        patch.validate()?;

        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            self.date_of_birth = date_of_birth;
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(branch_id) = patch.branch_id {
            self.branch_id = branch_id;
        }
        if let Some(last_visit) = patch.last_visit {
            self.last_visit = last_visit;
        }
        self.updated_at = now;
        Ok(())
    }

    fn matches_search(&self, needle: &str) -> bool {
        validate::contains_folded(&self.full_name(), needle)
            || validate::opt_contains_folded(self.email.as_deref(), needle)
            || validate::opt_contains_folded(self.phone.as_deref(), needle)
    }
}
