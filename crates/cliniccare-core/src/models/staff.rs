use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::entity::Entity;
use crate::error::CoreError;
use crate::validate::{self, Validate};

/// A roster entry. `role` is free text ("Doctor", "Nurse", "Receptionist").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Staff {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub specialization: String,
    pub branch_id: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewStaff {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub role: String,
    #[serde(default)]
    pub specialization: String,
    pub branch_id: u32,
}

impl Validate for NewStaff {
    fn validate(&self) -> Result<(), CoreError> {
        validate::required("firstName", &self.first_name)?;
        validate::required("lastName", &self.last_name)?;
        validate::required("role", &self.role)?;
        validate::email("email", Some(self.email.as_str()))?;
        validate::id("branchId", self.branch_id)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StaffPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub specialization: Option<String>,
    pub branch_id: Option<u32>,
}

impl Validate for StaffPatch {
    fn validate(&self) -> Result<(), CoreError> {
        validate::required_if_present("firstName", self.first_name.as_deref())?;
        validate::required_if_present("lastName", self.last_name.as_deref())?;
        validate::required_if_present("role", self.role.as_deref())?;
        validate::email("email", self.email.as_deref())?;
        if let Some(branch_id) = self.branch_id {
            validate::id("branchId", branch_id)?;
        }
        Ok(())
    }
}

impl Entity for Staff {
    const KIND: &'static str = "staff";

    type New = NewStaff;
    type Patch = StaffPatch;

    fn id(&self) -> u32 {
        self.id
    }

    fn create(id: u32, input: NewStaff, now: Timestamp) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            role: input.role,
            specialization: input.specialization,
            branch_id: input.branch_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: StaffPatch, now: Timestamp) -> Result<(), CoreError> {
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
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(specialization) = patch.specialization {
            self.specialization = specialization;
        }
        if let Some(branch_id) = patch.branch_id {
            self.branch_id = branch_id;
        }
        self.updated_at = now;
        Ok(())
    }

    fn matches_search(&self, needle: &str) -> bool {
        let name = format!("{} {}", self.first_name, self.last_name);
        validate::contains_folded(&name, needle)
            || validate::contains_folded(&self.email, needle)
            || validate::contains_folded(&self.role, needle)
            || validate::contains_folded(&self.specialization, needle)
    }
}
