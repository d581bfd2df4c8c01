use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::medicine::MedicineSchedule;

/// Identity of one firing instance: a schedule's time-of-day entry on one
/// calendar day. At most one live alert exists per key at any moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OccurrenceKey {
    pub schedule_id: Uuid,
    pub time: NaiveTime,
    pub date: NaiveDate,
}

impl OccurrenceKey {
    pub fn new(schedule_id: Uuid, time: NaiveTime, date: NaiveDate) -> Self {
        Self {
            schedule_id,
            time,
            date,
        }
    }

    /// The instant this occurrence is scheduled for.
    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

impl fmt::Display for OccurrenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.schedule_id,
            self.time.format("%H:%M"),
            self.date.format("%Y-%m-%d")
        )
    }
}

/// One due firing of a schedule, as reported by the evaluator.
///
/// Derived data, never persisted. The lifecycle manager turns newly seen
/// occurrences into live alerts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderOccurrence {
    pub key: OccurrenceKey,
    pub medicine_name: String,
    pub dosage: String,
    pub message: String,
    pub scheduled_at: NaiveDateTime,
}

impl ReminderOccurrence {
    pub fn new(schedule: &MedicineSchedule, time: NaiveTime, date: NaiveDate) -> Self {
        let key = OccurrenceKey::new(schedule.id, time, date);
        Self {
            key,
            medicine_name: schedule.name.clone(),
            dosage: schedule.dosage.clone(),
            message: format!("Time to take {} - {}", schedule.name, schedule.dosage),
            scheduled_at: key.scheduled_at(),
        }
    }
}

/// Lifecycle state of a live alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum AlertState {
    Active,
    Snoozed { until: NaiveDateTime },
    Acknowledged,
    Expired,
}

impl AlertState {
    /// Whether the alert still occupies its occurrence key (not yet
    /// resolved by the user or by day rollover).
    pub fn is_live(&self) -> bool {
        matches!(self, AlertState::Active | AlertState::Snoozed { .. })
    }
}

/// A materialized reminder awaiting user action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub key: OccurrenceKey,
    pub message: String,
    pub scheduled_at: NaiveDateTime,
    pub fired_at: NaiveDateTime,
    pub state: AlertState,
}

impl Alert {
    pub fn from_occurrence(occurrence: &ReminderOccurrence, fired_at: NaiveDateTime) -> Self {
        Self {
            key: occurrence.key,
            message: occurrence.message.clone(),
            scheduled_at: occurrence.scheduled_at,
            fired_at,
            state: AlertState::Active,
        }
    }
}

/// How a finalized alert was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// Acknowledged by the user.
    Taken,
    /// Expired unacknowledged at day rollover.
    Missed,
}

/// Immutable record of a finalized alert, owned by the history log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub key: OccurrenceKey,
    pub message: String,
    pub fired_at: NaiveDateTime,
    pub resolution: Resolution,
    pub resolved_at: NaiveDateTime,
}

impl HistoryEntry {
    pub fn new(alert: &Alert, resolution: Resolution, resolved_at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            key: alert.key,
            message: alert.message.clone(),
            fired_at: alert.fired_at,
            resolution,
            resolved_at,
        }
    }
}

/// Serializable engine state handed to the persistence sink.
///
/// Restoring a snapshot must not re-fire occurrences the user already
/// acknowledged that day, so resolved same-day alerts are included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub alerts: Vec<Alert>,
    pub history: Vec<HistoryEntry>,
}
