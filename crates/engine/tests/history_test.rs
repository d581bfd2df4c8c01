use carealert_core::models::alert::{Alert, HistoryEntry, ReminderOccurrence, Resolution};
use carealert_core::models::medicine::{Frequency, MedicineSchedule};
use carealert_engine::history::HistoryLog;
use chrono::{Duration, NaiveDate};
use pretty_assertions::assert_eq;

fn entries(count: i64) -> Vec<HistoryEntry> {
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let schedule = MedicineSchedule::new(
        "Aspirin",
        "1 tablet",
        Frequency::Daily,
        &["08:00"],
        None,
        date.and_hms_opt(0, 0, 0).unwrap(),
    )
    .expect("valid schedule");

    (0..count)
        .map(|offset| {
            let fired_at = date.and_hms_opt(8, 0, 0).unwrap() + Duration::days(offset);
            let occurrence =
                ReminderOccurrence::new(&schedule, schedule.times[0], fired_at.date());
            let alert = Alert::from_occurrence(&occurrence, fired_at);
            HistoryEntry::new(&alert, Resolution::Taken, fired_at + Duration::minutes(2))
        })
        .collect()
}

#[test]
fn test_recent_is_most_recent_first() {
    let mut log = HistoryLog::new();
    for entry in entries(5) {
        log.append(entry);
    }

    let recent = log.recent(3);
    assert_eq!(recent.len(), 3);
    assert!(recent[0].resolved_at > recent[1].resolved_at);
    assert!(recent[1].resolved_at > recent[2].resolved_at);

    // The underlying log keeps insertion order
    let all = log.entries();
    assert_eq!(all.len(), 5);
    assert!(all[0].resolved_at < all[4].resolved_at);
}

#[test]
fn test_recent_with_limit_beyond_len() {
    let mut log = HistoryLog::new();
    for entry in entries(2) {
        log.append(entry);
    }

    assert_eq!(log.recent(10).len(), 2);
    assert_eq!(log.len(), 2);
    assert!(!log.is_empty());
}

#[test]
fn test_from_entries_round_trip() {
    let persisted = entries(4);
    let log = HistoryLog::from_entries(persisted.clone());

    assert_eq!(log.entries(), persisted.as_slice());
    assert_eq!(log.recent(1)[0], persisted[3]);
}

#[test]
fn test_empty_log() {
    let log = HistoryLog::new();
    assert!(log.is_empty());
    assert!(log.recent(10).is_empty());
}
