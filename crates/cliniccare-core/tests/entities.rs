use jiff::Timestamp;
use jiff::civil::date;

use cliniccare_core::models::appointment::{
    Appointment, AppointmentPatch, AppointmentStatus, NewAppointment,
};
use cliniccare_core::models::inventory::{InventoryItem, InventoryPatch, NewInventoryItem};
use cliniccare_core::models::patient::{Gender, NewPatient, Patient, PatientPatch};
use cliniccare_core::{CoreError, Entity};

fn t(secs: i64) -> Timestamp {
    Timestamp::from_second(1_720_000_000 + secs).unwrap()
}

fn booking() -> Appointment {
    let input = NewAppointment {
        patient_id: 1,
        staff_id: Some(2),
        appointment_date: date(2024, 7, 10).at(9, 30, 0, 0),
        reason: Some("Annual checkup".to_string()),
        notes: None,
    };
    Appointment::create(5, input, t(0))
}

fn item(quantity: u32, reorder_level: Option<u32>) -> InventoryItem {
    let input = NewInventoryItem {
        name: "Amoxicillin".to_string(),
        category: "Medication".to_string(),
        quantity,
        unit: "box".to_string(),
        reorder_level,
        branch_id: 1,
        expiry_date: None,
        supplier: "MedSupply Co".to_string(),
    };
    InventoryItem::create(1, input, t(0))
}

#[test]
fn new_appointments_are_scheduled() {
    let appt = booking();
    assert_eq!(appt.id, 5);
    assert_eq!(appt.status, AppointmentStatus::Scheduled);
    assert_eq!(appt.created_at, appt.updated_at);
}

#[test]
fn scheduled_can_complete_or_cancel() {
    let mut appt = booking();
    appt.apply(AppointmentPatch::status(AppointmentStatus::Completed), t(60))
        .unwrap();
    assert_eq!(appt.status, AppointmentStatus::Completed);
    assert_eq!(appt.updated_at, t(60));
    assert_eq!(appt.created_at, t(0));

    let mut appt = booking();
    appt.apply(AppointmentPatch::status(AppointmentStatus::Cancelled), t(60))
        .unwrap();
    assert_eq!(appt.status, AppointmentStatus::Cancelled);
}

#[test]
fn terminal_statuses_do_not_move() {
    let mut appt = booking();
    appt.apply(AppointmentPatch::status(AppointmentStatus::Cancelled), t(60))
        .unwrap();

    let patch = AppointmentPatch {
        notes: Some(Some("rebooked".to_string())),
        ..AppointmentPatch::status(AppointmentStatus::Scheduled)
    };
    let err = appt.apply(patch, t(120)).unwrap_err();
    assert_eq!(
        err,
        CoreError::InvalidTransition {
            from: AppointmentStatus::Cancelled,
            to: AppointmentStatus::Scheduled,
        }
    );
    // rejected patch leaves the record as it was
    assert_eq!(appt.notes, None);
    assert_eq!(appt.updated_at, t(60));
}

#[test]
fn reasserting_a_terminal_status_is_a_no_op() {
    let mut appt = booking();
    appt.apply(AppointmentPatch::status(AppointmentStatus::Completed), t(60))
        .unwrap();
    appt.apply(AppointmentPatch::status(AppointmentStatus::Completed), t(90))
        .unwrap();
    assert_eq!(appt.status, AppointmentStatus::Completed);
}

#[test]
fn status_serializes_lowercase() {
    let json = serde_json::to_string(&AppointmentStatus::Cancelled).unwrap();
    assert_eq!(json, "\"cancelled\"");
    assert_eq!(AppointmentStatus::Scheduled.to_string(), "scheduled");
}

#[test]
fn patient_patch_is_a_shallow_merge() {
    let mut patient = Patient::create(1, NewPatient::named("John", "Doe"), t(0));
    patient
        .apply(
            PatientPatch {
                gender: Some(Some(Gender::Male)),
                last_visit: Some(Some(date(2024, 7, 1))),
                ..PatientPatch::default()
            },
            t(30),
        )
        .unwrap();

    assert_eq!(patient.first_name, "John");
    assert_eq!(patient.gender, Some(Gender::Male));
    assert_eq!(patient.last_visit, Some(date(2024, 7, 1)));
    assert_eq!(patient.updated_at, t(30));
}

#[test]
fn patient_patch_null_clears_and_absent_keeps() {
    let mut patient = Patient::create(
        1,
        NewPatient {
            email: Some("john@example.com".to_string()),
            phone: Some("1234567890".to_string()),
            last_visit: Some(date(2024, 7, 1)),
            ..NewPatient::named("John", "Doe")
        },
        t(0),
    );

    let patch: PatientPatch =
        serde_json::from_str(r#"{"email":null,"lastVisit":null}"#).unwrap();
    assert_eq!(patch.email, Some(None));
    assert_eq!(patch.phone, None);

    patient.apply(patch, t(30)).unwrap();
    assert_eq!(patient.email, None);
    assert_eq!(patient.last_visit, None);
    assert_eq!(patient.phone.as_deref(), Some("1234567890"));
}

#[test]
fn patient_wire_format_is_camel_case() {
    let patient = Patient::create(1, NewPatient::named("John", "Doe"), t(0));
    let value = serde_json::to_value(&patient).unwrap();
    assert_eq!(value["firstName"], "John");
    assert_eq!(value["branchId"], serde_json::Value::Null);
    assert!(value.get("createdAt").is_some());
}

#[test]
fn patient_search_spans_name_email_and_phone() {
    let mut patient = Patient::create(1, NewPatient::named("John", "Doe"), t(0));
    patient.email = Some("John@Example.com".to_string());
    patient.phone = Some("1234567890".to_string());

    assert!(patient.matches_search("john doe"));
    assert!(patient.matches_search("example.com"));
    assert!(patient.matches_search("4567"));
    assert!(!patient.matches_search("sarah"));
}

#[test]
fn low_stock_is_at_or_below_threshold() {
    assert!(item(5, Some(5)).is_low_stock());
    assert!(!item(6, Some(5)).is_low_stock());
    assert!(item(10, None).is_low_stock());
    assert!(!item(11, None).is_low_stock());
}

#[test]
fn inventory_patch_updates_quantity() {
    let mut stock = item(40, Some(20));
    stock
        .apply(
            InventoryPatch {
                quantity: Some(12),
                ..InventoryPatch::default()
            },
            t(10),
        )
        .unwrap();
    assert_eq!(stock.quantity, 12);
    assert!(stock.is_low_stock());
}
