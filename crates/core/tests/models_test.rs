use carealert_core::errors::CareError;
use carealert_core::models::alert::{
    Alert, AlertState, EngineSnapshot, HistoryEntry, OccurrenceKey, ReminderOccurrence, Resolution,
};
use carealert_core::models::contact::{CaretakerMessage, EmergencyContact, QuickAlert};
use carealert_core::models::medicine::{parse_time_of_day, Frequency, MedicineSchedule};
use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, to_string};
use uuid::Uuid;

fn sample_created_at() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

#[test]
fn test_schedule_times_sorted_and_parsed() {
    let schedule = MedicineSchedule::new(
        "Metformin",
        "500mg",
        Frequency::TwiceDaily,
        &["20:00", "08:00"],
        None,
        sample_created_at(),
    )
    .expect("valid schedule");

    assert_eq!(
        schedule.times,
        vec![
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        ]
    );
    assert_eq!(schedule.frequency, Frequency::TwiceDaily);
}

#[rstest]
#[case("", "500mg", &["08:00"])]
#[case("Metformin", "", &["08:00"])]
#[case("Metformin", "500mg", &[])]
#[case("Metformin", "500mg", &["08:00", "08:00"])]
#[case("Metformin", "500mg", &["25:00"])]
#[case("Metformin", "500mg", &["08:61"])]
#[case("Metformin", "500mg", &["eight"])]
fn test_schedule_validation_rejects(
    #[case] name: &str,
    #[case] dosage: &str,
    #[case] times: &[&str],
) {
    let result = MedicineSchedule::new(
        name,
        dosage,
        Frequency::Daily,
        times,
        None,
        sample_created_at(),
    );

    assert!(matches!(result, Err(CareError::InvalidSchedule(_))));
}

#[rstest]
#[case("08:00", 8, 0)]
#[case("00:00", 0, 0)]
#[case("23:59", 23, 59)]
fn test_parse_time_of_day(#[case] raw: &str, #[case] hour: u32, #[case] minute: u32) {
    let parsed = parse_time_of_day(raw).expect("valid time of day");
    assert_eq!(parsed, NaiveTime::from_hms_opt(hour, minute, 0).unwrap());
}

#[test]
fn test_schedule_serialization() {
    let schedule = MedicineSchedule::new(
        "Aspirin",
        "1 tablet",
        Frequency::Daily,
        &["08:00"],
        Some("Take with food".to_string()),
        sample_created_at(),
    )
    .expect("valid schedule");

    let json = to_string(&schedule).expect("Failed to serialize schedule");
    let deserialized: MedicineSchedule = from_str(&json).expect("Failed to deserialize schedule");

    assert_eq!(deserialized.id, schedule.id);
    assert_eq!(deserialized.name, schedule.name);
    assert_eq!(deserialized.dosage, schedule.dosage);
    assert_eq!(deserialized.times, schedule.times);
    assert_eq!(deserialized.notes, schedule.notes);
}

#[test]
fn test_occurrence_key_display_is_stable() {
    let schedule_id = Uuid::new_v4();
    let key = OccurrenceKey::new(
        schedule_id,
        NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    );

    assert_eq!(key.to_string(), format!("{schedule_id}-08:00-2024-03-01"));
    assert_eq!(
        key.scheduled_at(),
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    );
}

#[test]
fn test_occurrence_message_format() {
    let schedule = MedicineSchedule::new(
        "Aspirin",
        "1 tablet",
        Frequency::Daily,
        &["08:00"],
        None,
        sample_created_at(),
    )
    .expect("valid schedule");

    let occurrence = ReminderOccurrence::new(
        &schedule,
        schedule.times[0],
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    );

    assert_eq!(occurrence.message, "Time to take Aspirin - 1 tablet");
    assert_eq!(occurrence.key.schedule_id, schedule.id);
}

#[test]
fn test_alert_state_liveness() {
    assert!(AlertState::Active.is_live());
    assert!(
        AlertState::Snoozed {
            until: sample_created_at()
        }
        .is_live()
    );
    assert!(!AlertState::Acknowledged.is_live());
    assert!(!AlertState::Expired.is_live());
}

#[test]
fn test_snapshot_serialization_round_trip() {
    let schedule = MedicineSchedule::new(
        "Aspirin",
        "1 tablet",
        Frequency::Daily,
        &["08:00"],
        None,
        sample_created_at(),
    )
    .expect("valid schedule");
    let occurrence = ReminderOccurrence::new(
        &schedule,
        schedule.times[0],
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    );
    let alert = Alert::from_occurrence(&occurrence, sample_created_at());
    let entry = HistoryEntry::new(&alert, Resolution::Taken, sample_created_at());

    let snapshot = EngineSnapshot {
        alerts: vec![alert],
        history: vec![entry],
    };

    let json = to_string(&snapshot).expect("Failed to serialize snapshot");
    let deserialized: EngineSnapshot = from_str(&json).expect("Failed to deserialize snapshot");

    assert_eq!(deserialized, snapshot);
}

#[test]
fn test_contact_validation() {
    let contact = EmergencyContact::new(
        "Dr. Sharma",
        "+91-98765-43210",
        "Primary Doctor",
        Some("dr.sharma@clinic.com".to_string()),
    )
    .expect("valid contact");
    assert_eq!(contact.name, "Dr. Sharma");

    let missing_name = EmergencyContact::new("", "100", "Emergency Services", None);
    assert!(matches!(missing_name, Err(CareError::InvalidContact(_))));

    let missing_phone = EmergencyContact::new("Dr. Sharma", "  ", "Primary Doctor", None);
    assert!(matches!(missing_phone, Err(CareError::InvalidContact(_))));
}

#[test]
fn test_quick_alert_messages() {
    assert_eq!(QuickAlert::Help.message(), "I need help");
    assert_eq!(
        QuickAlert::Fall.message(),
        "I have fallen and need assistance"
    );
    assert_eq!(QuickAlert::ALL.len(), 6);
}

#[test]
fn test_caretaker_message_text() {
    let quick = CaretakerMessage::Quick(QuickAlert::Medicine);
    assert_eq!(quick.text(), "I forgot to take my medicine");

    let custom = CaretakerMessage::custom("Please call me").expect("valid message");
    assert_eq!(custom.text(), "Please call me");

    let empty = CaretakerMessage::custom("   ");
    assert!(matches!(empty, Err(CareError::InvalidContact(_))));
}
