use jiff::Timestamp;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::entity::Entity;
use crate::error::CoreError;
use crate::validate::{self, Validate};

/// Threshold used when an item has no reorder level of its own.
pub const DEFAULT_REORDER_LEVEL: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub unit: String,
    pub reorder_level: Option<u32>,
    pub branch_id: u32,
    pub expiry_date: Option<Date>,
    pub supplier: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl InventoryItem {
    pub fn reorder_threshold(&self) -> u32 {
        self.reorder_level.unwrap_or(DEFAULT_REORDER_LEVEL)
    }

    /// Derived on read, never stored.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_threshold()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewInventoryItem {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub quantity: u32,
    pub unit: String,
    #[serde(default)]
    pub reorder_level: Option<u32>,
    pub branch_id: u32,
    #[serde(default)]
    pub expiry_date: Option<Date>,
    #[serde(default)]
    pub supplier: String,
}

impl Validate for NewInventoryItem {
    fn validate(&self) -> Result<(), CoreError> {
        validate::required("name", &self.name)?;
        validate::required("category", &self.category)?;
        validate::required("unit", &self.unit)?;
        validate::id("branchId", self.branch_id)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InventoryPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<u32>,
    pub unit: Option<String>,
    /// `Some(None)` drops back to the default threshold.
    #[serde(default, deserialize_with = "crate::patch::nullable")]
    pub reorder_level: Option<Option<u32>>,
    pub branch_id: Option<u32>,
    #[serde(default, deserialize_with = "crate::patch::nullable")]
    pub expiry_date: Option<Option<Date>>,
    pub supplier: Option<String>,
}

impl Validate for InventoryPatch {
    fn validate(&self) -> Result<(), CoreError> {
        validate::required_if_present("name", self.name.as_deref())?;
        validate::required_if_present("category", self.category.as_deref())?;
        validate::required_if_present("unit", self.unit.as_deref())?;
        if let Some(branch_id) = self.branch_id {
            validate::id("branchId", branch_id)?;
        }
        Ok(())
    }
}

impl Entity for InventoryItem {
    const KIND: &'static str = "inventory item";

    type New = NewInventoryItem;
    type Patch = InventoryPatch;

    fn id(&self) -> u32 {
        self.id
    }

    fn create(id: u32, input: NewInventoryItem, now: Timestamp) -> Self {
        Self {
            id,
            name: input.name,
            category: input.category,
            quantity: input.quantity,
            unit: input.unit,
            reorder_level: input.reorder_level,
            branch_id: input.branch_id,
            expiry_date: input.expiry_date,
            supplier: input.supplier,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: InventoryPatch, now: Timestamp) -> Result<(), CoreError> {
        patch.validate()?;

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(unit) = patch.unit {
            self.unit = unit;
        }
        if let Some(reorder_level) = patch.reorder_level {
            self.reorder_level = reorder_level;
        }
        if let Some(branch_id) = patch.branch_id {
            self.branch_id = branch_id;
        }
        if let Some(expiry_date) = patch.expiry_date {
            self.expiry_date = expiry_date;
        }
        if let Some(supplier) = patch.supplier {
            self.supplier = supplier;
        }
        self.updated_at = now;
        Ok(())
    }

    fn matches_search(&self, needle: &str) -> bool {
        validate::contains_folded(&self.name, needle)
            || validate::contains_folded(&self.category, needle)
            || validate::contains_folded(&self.supplier, needle)
    }
}
