use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;
use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::entity::Entity;
use crate::error::CoreError;
use crate::validate::{self, Validate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    /// `completed` and `cancelled` are terminal. Re-asserting the current
    /// status is always allowed.
    pub fn can_transition_to(self, next: AppointmentStatus) -> bool {
        self == next || self == AppointmentStatus::Scheduled
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(AppointmentStatus::Scheduled),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            other => Err(CoreError::InvalidField {
                field: "status",
                reason: format!("unknown status '{other}'"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Appointment {
    pub id: u32,
    pub patient_id: u32,
    pub staff_id: Option<u32>,
    #[ts(type = "string")]
    pub appointment_date: DateTime,
    pub reason: Option<String>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Booking payload. Status is not accepted here: every new appointment
/// starts out scheduled.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewAppointment {
    pub patient_id: u32,
    #[serde(default)]
    pub staff_id: Option<u32>,
    pub appointment_date: DateTime,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Validate for NewAppointment {
    fn validate(&self) -> Result<(), CoreError> {
        validate::id("patientId", self.patient_id)?;
        if let Some(staff_id) = self.staff_id {
            validate::id("staffId", staff_id)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AppointmentPatch {
    #[serde(default, deserialize_with = "crate::patch::nullable")]
    pub staff_id: Option<Option<u32>>,
    pub appointment_date: Option<DateTime>,
    #[serde(default, deserialize_with = "crate::patch::nullable")]
    pub reason: Option<Option<String>>,
    pub status: Option<AppointmentStatus>,
    #[serde(default, deserialize_with = "crate::patch::nullable")]
    pub notes: Option<Option<String>>,
}

impl AppointmentPatch {
    pub fn status(status: AppointmentStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl Validate for AppointmentPatch {
    fn validate(&self) -> Result<(), CoreError> {
        if let Some(Some(staff_id)) = self.staff_id {
            validate::id("staffId", staff_id)?;
        }
        Ok(())
    }
}

impl Entity for Appointment {
    const KIND: &'static str = "appointment";

    type New = NewAppointment;
    type Patch = AppointmentPatch;

    fn id(&self) -> u32 {
        self.id
    }

    fn create(id: u32, input: NewAppointment, now: Timestamp) -> Self {
        Self {
            id,
            patient_id: input.patient_id,
            staff_id: input.staff_id,
            appointment_date: input.appointment_date,
            reason: input.reason,
            status: AppointmentStatus::Scheduled,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: AppointmentPatch, now: Timestamp) -> Result<(), CoreError> {
        patch.validate()?;
        if let Some(next) = patch.status
            && !self.status.can_transition_to(next)
        {
            return Err(CoreError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }

        if let Some(staff_id) = patch.staff_id {
            self.staff_id = staff_id;
        }
        if let Some(appointment_date) = patch.appointment_date {
            self.appointment_date = appointment_date;
        }
        if let Some(reason) = patch.reason {
            self.reason = reason;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        self.updated_at = now;
        Ok(())
    }

    fn matches_search(&self, needle: &str) -> bool {
        validate::opt_contains_folded(self.reason.as_deref(), needle)
            || validate::opt_contains_folded(self.notes.as_deref(), needle)
    }
}
