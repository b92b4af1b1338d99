use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::entity::Entity;
use crate::error::CoreError;
use crate::validate::{self, Validate};

/// A clinic location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Branch {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The `{id, name}` pair served to the branch picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BranchSummary {
    pub id: u32,
    pub name: String,
}

impl From<&Branch> for BranchSummary {
    fn from(branch: &Branch) -> Self {
        Self {
            id: branch.id,
            name: branch.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewBranch {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl Validate for NewBranch {
    fn validate(&self) -> Result<(), CoreError> {
        validate::required("name", &self.name)?;
        validate::email("email", Some(self.email.as_str()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BranchPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Validate for BranchPatch {
    fn validate(&self) -> Result<(), CoreError> {
        validate::required_if_present("name", self.name.as_deref())?;
        validate::email("email", self.email.as_deref())
    }
}

impl Entity for Branch {
    const KIND: &'static str = "branch";

    type New = NewBranch;
    type Patch = BranchPatch;

    fn id(&self) -> u32 {
        self.id
    }

    fn create(id: u32, input: NewBranch, now: Timestamp) -> Self {
        Self {
            id,
            name: input.name,
            address: input.address,
            phone: input.phone,
            email: input.email,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: BranchPatch, now: Timestamp) -> Result<(), CoreError> {
        patch.validate()?;

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        self.updated_at = now;
        Ok(())
    }

    fn matches_search(&self, needle: &str) -> bool {
        validate::contains_folded(&self.name, needle)
            || validate::contains_folded(&self.address, needle)
            || validate::contains_folded(&self.email, needle)
    }
}
