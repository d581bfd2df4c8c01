use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CareError, CareResult};

/// How often a medicine is taken. Informational only: firing is driven
/// solely by the schedule's reminder times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Daily,
    TwiceDaily,
    ThreeTimes,
    AsNeeded,
}

impl Default for Frequency {
    fn default() -> Self {
        Frequency::Daily
    }
}

/// A medicine with its recurring daily reminder times.
///
/// Schedules are created and edited by the record-keeping collaborator and
/// are read-only to the scheduling engine. The constructor enforces the
/// invariants the engine relies on: at least one reminder time, no
/// duplicate times, times sorted ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicineSchedule {
    pub id: Uuid,
    pub name: String,
    pub dosage: String,
    pub frequency: Frequency,
    pub times: Vec<NaiveTime>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

impl MedicineSchedule {
    /// Builds a validated schedule from raw `HH:MM` time-of-day strings.
    ///
    /// # Errors
    ///
    /// Returns `CareError::InvalidSchedule` when the name or dosage is
    /// empty, no reminder times are given, a time string is not a valid
    /// `HH:MM` pair, or the same time appears twice.
    pub fn new(
        name: impl Into<String>,
        dosage: impl Into<String>,
        frequency: Frequency,
        times: &[&str],
        notes: Option<String>,
        created_at: NaiveDateTime,
    ) -> CareResult<Self> {
        let name = name.into();
        let dosage = dosage.into();

        if name.trim().is_empty() {
            return Err(CareError::InvalidSchedule(
                "medicine name must not be empty".to_string(),
            ));
        }
        if dosage.trim().is_empty() {
            return Err(CareError::InvalidSchedule(
                "dosage must not be empty".to_string(),
            ));
        }
        if times.is_empty() {
            return Err(CareError::InvalidSchedule(
                "at least one reminder time is required".to_string(),
            ));
        }

        let mut parsed = Vec::with_capacity(times.len());
        for raw in times {
            parsed.push(parse_time_of_day(raw)?);
        }
        parsed.sort();
        let before = parsed.len();
        parsed.dedup();
        if parsed.len() != before {
            return Err(CareError::InvalidSchedule(
                "reminder times must be unique within a schedule".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            dosage,
            frequency,
            times: parsed,
            notes,
            created_at,
        })
    }
}

/// Parses a `HH:MM` time-of-day string (24-hour clock, seconds zeroed).
pub fn parse_time_of_day(raw: &str) -> CareResult<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").map_err(|_| {
        CareError::InvalidSchedule(format!("'{raw}' is not a valid HH:MM time of day"))
    })
}
