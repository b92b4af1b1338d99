use std::collections::BTreeSet;

use jiff::civil::date;

use cliniccare_core::models::appointment::{AppointmentPatch, AppointmentStatus, NewAppointment};
use cliniccare_core::models::inventory::InventoryPatch;
use cliniccare_core::models::patient::NewPatient;
use cliniccare_store::filter::{AppointmentFilter, InventoryFilter, PatientFilter, StaffFilter};
use cliniccare_store::{ClinicStore, Fixtures};

fn store() -> ClinicStore {
    ClinicStore::seeded().unwrap()
}

#[test]
fn builtin_fixtures_load() {
    let fixtures = Fixtures::builtin().unwrap();
    assert_eq!(fixtures.branches.len(), 3);
    assert_eq!(fixtures.patients.len(), 4);

    let store = store();
    let names: Vec<_> = store.branch_summaries().into_iter().map(|b| b.name).collect();
    assert_eq!(
        names,
        [
            "Boston Medical Center",
            "Cambridge Health Clinic",
            "Somerville Care Center"
        ]
    );
}

#[test]
fn listing_twice_is_stable() {
    let store = store();
    let filter = PatientFilter::default();
    assert_eq!(store.list_patients(&filter), store.list_patients(&filter));
    assert_eq!(store.list_patients(&filter).len(), store.patients.len());
}

#[test]
fn branch_filter_partitions_patients() {
    let mut store = store();
    store
        .patients
        .create(NewPatient::named("Walk", "In"))
        .unwrap();

    let mut seen = BTreeSet::new();
    for branch in store.branch_summaries() {
        let filter = PatientFilter {
            branch_id: Some(branch.id),
            ..PatientFilter::default()
        };
        for patient in store.list_patients(&filter) {
            assert_eq!(patient.branch_id, Some(branch.id));
            assert!(seen.insert(patient.id));
        }
    }
    for patient in store.patients.iter().filter(|p| p.branch_id.is_none()) {
        assert!(seen.insert(patient.id));
    }

    let all: BTreeSet<_> = store.patients.iter().map(|p| p.id).collect();
    assert_eq!(seen, all);
}

#[test]
fn patient_search_is_case_insensitive() {
    let store = store();
    let hits = store.list_patients(&PatientFilter {
        search: Some("  JOHN ".to_string()),
        ..PatientFilter::default()
    });
    let ids: Vec<_> = hits.iter().map(|p| p.id).collect();
    assert_eq!(ids, [1, 3]);

    let blank = store.list_patients(&PatientFilter {
        search: Some(String::new()),
        ..PatientFilter::default()
    });
    assert_eq!(blank.len(), 4);
}

#[test]
fn search_and_branch_combine() {
    let store = store();
    let hits = store.list_patients(&PatientFilter {
        branch_id: Some(1),
        search: Some("alice".to_string()),
    });
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].last_name, "Johnson");
}

#[test]
fn staff_search_covers_role_and_specialization() {
    let store = store();
    let doctors = store.list_staff(&StaffFilter {
        search: Some("doctor".to_string()),
        ..StaffFilter::default()
    });
    assert_eq!(doctors.len(), 2);

    let cardio = store.list_staff(&StaffFilter {
        search: Some("cardio".to_string()),
        ..StaffFilter::default()
    });
    assert_eq!(cardio[0].last_name, "Nguyen");
}

#[test]
fn appointments_come_back_newest_first() {
    let store = store();
    let ids: Vec<_> = store
        .list_appointments(&AppointmentFilter::default())
        .iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(ids, [3, 1, 2]);
}

#[test]
fn appointment_branch_goes_through_the_patient() {
    let store = store();
    let boston = store.list_appointments(&AppointmentFilter {
        branch_id: Some(1),
        ..AppointmentFilter::default()
    });
    assert_eq!(boston.len(), 1);
    assert_eq!(boston[0].patient_id, 1);
}

#[test]
fn appointment_date_range_is_inclusive() {
    let store = store();
    let july = store.list_appointments(&AppointmentFilter {
        date_from: Some(date(2024, 7, 15)),
        date_to: Some(date(2024, 7, 20)),
        ..AppointmentFilter::default()
    });
    let ids: Vec<_> = july.iter().map(|a| a.id).collect();
    assert_eq!(ids, [3, 1]);
}

#[test]
fn booking_then_completing_updates_stats() {
    let mut store = store();
    let booked = store
        .appointments
        .create(NewAppointment {
            patient_id: 3,
            staff_id: Some(1),
            appointment_date: date(2024, 8, 2).at(10, 0, 0, 0),
            reason: Some("Blood work".to_string()),
            notes: None,
        })
        .unwrap();
    assert_eq!(booked.id, 4);
    assert_eq!(booked.status, AppointmentStatus::Scheduled);

    let stats = store.appointment_stats(None);
    assert_eq!((stats.total, stats.scheduled), (4, 2));

    store
        .appointments
        .update(booked.id, AppointmentPatch::status(AppointmentStatus::Completed))
        .unwrap();

    let stats = store.appointment_stats(Some(1));
    assert_eq!(stats.total, 2);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.scheduled, 1);
}

#[test]
fn patient_stats_count_genders() {
    let store = store();
    let stats = store.patient_stats(None);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.male_count, 2);
    assert_eq!(stats.female_count, 2);
    assert_eq!(stats.other_count, 0);

    assert_eq!(store.patient_stats(Some(3)).total, 1);
}

#[test]
fn low_stock_uses_item_or_default_threshold() {
    let mut store = store();
    let ids: Vec<_> = store.low_stock(None).iter().map(|i| i.id).collect();
    assert_eq!(ids, [2, 3]);
    assert!(store.low_stock(Some(2)).is_empty());

    store
        .inventory
        .update(
            4,
            InventoryPatch {
                quantity: Some(100),
                ..InventoryPatch::default()
            },
        )
        .unwrap();
    assert_eq!(store.low_stock(Some(2)).len(), 1);

    let supplies = store.list_inventory(&InventoryFilter {
        search: Some("supplies".to_string()),
        low_stock: true,
        ..InventoryFilter::default()
    });
    let ids: Vec<_> = supplies.iter().map(|i| i.id).collect();
    assert_eq!(ids, [2, 4]);
}

#[test]
fn dashboard_scopes_to_branch() {
    let store = store();

    let all = store.dashboard(None);
    assert_eq!(all.branch_count, 3);
    assert_eq!(all.staff_count, 3);
    assert_eq!(all.inventory_count, 4);
    assert_eq!(all.low_stock_count, 2);

    let boston = store.dashboard(Some(1));
    assert_eq!(boston.branch_count, 1);
    assert_eq!(boston.patients.total, 2);
    assert_eq!(boston.appointments.total, 1);
    assert_eq!(boston.staff_count, 1);
    assert_eq!(boston.low_stock_count, 1);

    assert_eq!(store.dashboard(Some(99)).branch_count, 0);
}

#[tokio::test]
async fn fixtures_load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixtures.json");
    std::fs::write(
        &path,
        r#"{"branches":[{"id":7,"name":"Quincy","address":"","phone":"","email":"",
            "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}]}"#,
    )
    .unwrap();

    let fixtures = Fixtures::load(&path).await.unwrap();
    let store = ClinicStore::new(fixtures).unwrap();
    assert_eq!(store.branches.next_id().unwrap(), 8);
    assert!(store.patients.is_empty());
}

#[tokio::test]
async fn missing_fixture_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Fixtures::load(&dir.path().join("nope.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, cliniccare_store::StoreError::Io { .. }));
}
