use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CareError, CareResult};

/// Systolic/diastolic pair, mmHg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: u32,
    pub diastolic: u32,
}

impl BloodPressure {
    /// Parses the conventional `"120/80"` notation.
    pub fn parse(raw: &str) -> CareResult<Self> {
        let invalid = || {
            CareError::InvalidVital(format!(
                "'{raw}' is not a valid blood pressure (expected systolic/diastolic)"
            ))
        };
        let (systolic, diastolic) = raw.trim().split_once('/').ok_or_else(invalid)?;
        Ok(Self {
            systolic: systolic.trim().parse().map_err(|_| invalid())?,
            diastolic: diastolic.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// Classification of a measurement against its normal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VitalStatus {
    Low,
    Normal,
    High,
}

/// One recorded set of measurements. All measurements are optional; a
/// reading must carry at least one of blood pressure, heart rate, or
/// temperature to be worth keeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalReading {
    pub id: Uuid,
    pub recorded_at: NaiveDateTime,
    pub blood_pressure: Option<BloodPressure>,
    pub heart_rate_bpm: Option<u32>,
    pub temperature_c: Option<f64>,
    pub weight_kg: Option<f64>,
    pub blood_sugar_mg_dl: Option<u32>,
    pub notes: Option<String>,
}

impl VitalReading {
    pub fn new(recorded_at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at,
            blood_pressure: None,
            heart_rate_bpm: None,
            temperature_c: None,
            weight_kg: None,
            blood_sugar_mg_dl: None,
            notes: None,
        }
    }

    /// Rejects readings with none of the three primary measurements.
    pub fn validate(&self) -> CareResult<()> {
        if self.blood_pressure.is_none()
            && self.heart_rate_bpm.is_none()
            && self.temperature_c.is_none()
        {
            return Err(CareError::InvalidVital(
                "a reading needs blood pressure, heart rate, or temperature".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn classify_blood_pressure(bp: BloodPressure) -> VitalStatus {
    if bp.systolic > 140 || bp.diastolic > 90 {
        VitalStatus::High
    } else if bp.systolic < 90 || bp.diastolic < 60 {
        VitalStatus::Low
    } else {
        VitalStatus::Normal
    }
}

pub fn classify_heart_rate(bpm: u32) -> VitalStatus {
    if bpm > 100 {
        VitalStatus::High
    } else if bpm < 60 {
        VitalStatus::Low
    } else {
        VitalStatus::Normal
    }
}

pub fn classify_temperature(celsius: f64) -> VitalStatus {
    if celsius > 37.5 {
        VitalStatus::High
    } else if celsius < 36.0 {
        VitalStatus::Low
    } else {
        VitalStatus::Normal
    }
}
