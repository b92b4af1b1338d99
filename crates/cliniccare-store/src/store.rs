use cliniccare_core::Entity;
use cliniccare_core::models::appointment::{Appointment, AppointmentStatus};
use cliniccare_core::models::branch::{Branch, BranchSummary};
use cliniccare_core::models::inventory::InventoryItem;
use cliniccare_core::models::patient::{Gender, Patient};
use cliniccare_core::models::staff::Staff;
use cliniccare_core::models::stats::{AppointmentStats, DashboardSummary, PatientStats};

use crate::collection::Collection;
use crate::error::StoreError;
use crate::filter::{
    AppointmentFilter, BranchFilter, InventoryFilter, PatientFilter, StaffFilter, needle,
};
use crate::fixtures::Fixtures;

/// The five ClinicCare collections.
///
/// Each instance owns its data; build one per test or one per process and
/// share it behind a lock. Foreign keys between collections are never
/// enforced, so orphaned children are expected after deletes.
#[derive(Debug, Clone, Default)]
pub struct ClinicStore {
    pub branches: Collection<Branch>,
    pub patients: Collection<Patient>,
    pub staff: Collection<Staff>,
    pub appointments: Collection<Appointment>,
    pub inventory: Collection<InventoryItem>,
}

impl ClinicStore {
    pub fn new(fixtures: Fixtures) -> Result<Self, StoreError> {
        Ok(Self {
            branches: Collection::from_records(fixtures.branches)?,
            patients: Collection::from_records(fixtures.patients)?,
            staff: Collection::from_records(fixtures.staff)?,
            appointments: Collection::from_records(fixtures.appointments)?,
            inventory: Collection::from_records(fixtures.inventory)?,
        })
    }

    /// A store holding the built-in demo data.
    pub fn seeded() -> Result<Self, StoreError> {
        Self::new(Fixtures::builtin()?)
    }

    // =========================================================================
    // Branches
    // =========================================================================

    pub fn list_branches(&self, filter: &BranchFilter) -> Vec<Branch> {
        let term = needle(filter.search.as_deref());
        self.branches
            .iter()
            .filter(|b| term.as_deref().is_none_or(|t| b.matches_search(t)))
            .cloned()
            .collect()
    }

    pub fn branch_summaries(&self) -> Vec<BranchSummary> {
        self.branches.iter().map(BranchSummary::from).collect()
    }

    // =========================================================================
    // Patients
    // =========================================================================

    pub fn list_patients(&self, filter: &PatientFilter) -> Vec<Patient> {
        let term = needle(filter.search.as_deref());
        self.patients
            .iter()
            .filter(|p| filter.branch_id.is_none_or(|id| p.branch_id == Some(id)))
            .filter(|p| term.as_deref().is_none_or(|t| p.matches_search(t)))
            .cloned()
            .collect()
    }

    pub fn patient_stats(&self, branch_id: Option<u32>) -> PatientStats {
        let mut stats = PatientStats::default();
        for patient in self
            .patients
            .iter()
            .filter(|p| branch_id.is_none_or(|id| p.branch_id == Some(id)))
        {
            stats.total += 1;
            match patient.gender {
                Some(Gender::Male) => stats.male_count += 1,
                Some(Gender::Female) => stats.female_count += 1,
                Some(Gender::Other) => stats.other_count += 1,
                None => {}
            }
        }
        stats
    }

    // =========================================================================
    // Staff
    // =========================================================================

    pub fn list_staff(&self, filter: &StaffFilter) -> Vec<Staff> {
        let term = needle(filter.search.as_deref());
        self.staff
            .iter()
            .filter(|s| filter.branch_id.is_none_or(|id| s.branch_id == id))
            .filter(|s| term.as_deref().is_none_or(|t| s.matches_search(t)))
            .cloned()
            .collect()
    }

    // =========================================================================
    // Appointments
    // =========================================================================

    /// Branch an appointment belongs to, via its patient. `None` when the
    /// patient is unknown or unassigned.
    pub fn appointment_branch(&self, appointment: &Appointment) -> Option<u32> {
        self.patients
            .get(appointment.patient_id)
            .and_then(|p| p.branch_id)
    }

    fn in_branch(&self, appointment: &Appointment, branch_id: Option<u32>) -> bool {
        branch_id.is_none_or(|id| self.appointment_branch(appointment) == Some(id))
    }

    /// Matching appointments, newest `appointmentDate` first.
    pub fn list_appointments(&self, filter: &AppointmentFilter) -> Vec<Appointment> {
        let term = needle(filter.search.as_deref());
        let mut result: Vec<Appointment> = self
            .appointments
            .iter()
            .filter(|a| self.in_branch(a, filter.branch_id))
            .filter(|a| filter.patient_id.is_none_or(|id| a.patient_id == id))
            .filter(|a| filter.staff_id.is_none_or(|id| a.staff_id == Some(id)))
            .filter(|a| filter.status.is_none_or(|s| a.status == s))
            .filter(|a| filter.date_from.is_none_or(|d| a.appointment_date.date() >= d))
            .filter(|a| filter.date_to.is_none_or(|d| a.appointment_date.date() <= d))
            .filter(|a| term.as_deref().is_none_or(|t| a.matches_search(t)))
            .cloned()
            .collect();

        result.sort_by(|a, b| b.appointment_date.cmp(&a.appointment_date));
        result
    }

    pub fn appointment_stats(&self, branch_id: Option<u32>) -> AppointmentStats {
        let mut stats = AppointmentStats::default();
        for appointment in self
            .appointments
            .iter()
            .filter(|a| self.in_branch(a, branch_id))
        {
            stats.total += 1;
            match appointment.status {
                AppointmentStatus::Scheduled => stats.scheduled += 1,
                AppointmentStatus::Completed => stats.completed += 1,
                AppointmentStatus::Cancelled => stats.cancelled += 1,
            }
        }
        stats
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    pub fn list_inventory(&self, filter: &InventoryFilter) -> Vec<InventoryItem> {
        let term = needle(filter.search.as_deref());
        self.inventory
            .iter()
            .filter(|i| filter.branch_id.is_none_or(|id| i.branch_id == id))
            .filter(|i| !filter.low_stock || i.is_low_stock())
            .filter(|i| term.as_deref().is_none_or(|t| i.matches_search(t)))
            .cloned()
            .collect()
    }

    pub fn low_stock(&self, branch_id: Option<u32>) -> Vec<InventoryItem> {
        self.list_inventory(&InventoryFilter {
            branch_id,
            low_stock: true,
            ..InventoryFilter::default()
        })
    }

    // =========================================================================
    // Dashboard
    // =========================================================================

    pub fn dashboard(&self, branch_id: Option<u32>) -> DashboardSummary {
        let branch_count = match branch_id {
            Some(id) => usize::from(self.branches.contains(id)),
            None => self.branches.len(),
        };
        let staff_count = self
            .staff
            .iter()
            .filter(|s| branch_id.is_none_or(|id| s.branch_id == id))
            .count();
        let inventory: Vec<&InventoryItem> = self
            .inventory
            .iter()
            .filter(|i| branch_id.is_none_or(|id| i.branch_id == id))
            .collect();

        DashboardSummary {
            branch_count,
            patients: self.patient_stats(branch_id),
            appointments: self.appointment_stats(branch_id),
            staff_count,
            inventory_count: inventory.len(),
            low_stock_count: inventory.iter().filter(|i| i.is_low_stock()).count(),
        }
    }
}
