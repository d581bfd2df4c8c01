//! In-memory reference implementations of the store traits.
//!
//! These back the daemon out of the box and stand in for the durable
//! collaborators in tests. All of them are cheap to clone and share via
//! an inner `Arc`.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use carealert_core::models::alert::EngineSnapshot;
use carealert_core::models::contact::EmergencyContact;
use carealert_core::models::medicine::MedicineSchedule;
use carealert_core::models::vitals::VitalReading;
use eyre::{eyre, Result};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{AlertStateStore, ContactStore, ScheduleStore, VitalStore};

#[derive(Debug, Default, Clone)]
pub struct MemoryScheduleStore {
    schedules: Arc<RwLock<HashMap<Uuid, MedicineSchedule>>>,
}

impl MemoryScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScheduleStore for MemoryScheduleStore {
    async fn list_schedules(&self) -> Result<Vec<MedicineSchedule>> {
        let schedules = self.schedules.read().await;
        let mut all: Vec<_> = schedules.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(all)
    }

    async fn get_schedule(&self, id: Uuid) -> Result<Option<MedicineSchedule>> {
        let schedules = self.schedules.read().await;
        Ok(schedules.get(&id).cloned())
    }

    async fn add_schedule(&self, schedule: MedicineSchedule) -> Result<()> {
        tracing::debug!("Adding schedule: id={}, name={}", schedule.id, schedule.name);
        let mut schedules = self.schedules.write().await;
        schedules.insert(schedule.id, schedule);
        Ok(())
    }

    async fn replace_schedule(&self, schedule: MedicineSchedule) -> Result<()> {
        tracing::debug!("Replacing schedule: id={}", schedule.id);
        let mut schedules = self.schedules.write().await;
        if !schedules.contains_key(&schedule.id) {
            return Err(eyre!("Schedule {} not found", schedule.id));
        }
        schedules.insert(schedule.id, schedule);
        Ok(())
    }

    async fn remove_schedule(&self, id: Uuid) -> Result<()> {
        tracing::debug!("Removing schedule: id={}", id);
        let mut schedules = self.schedules.write().await;
        schedules
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| eyre!("Schedule {} not found", id))
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryAlertStateStore {
    snapshot: Arc<RwLock<Option<EngineSnapshot>>>,
}

impl MemoryAlertStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AlertStateStore for MemoryAlertStateStore {
    async fn save_snapshot(&self, snapshot: EngineSnapshot) -> Result<()> {
        tracing::debug!(
            "Saving snapshot: {} alerts, {} history entries",
            snapshot.alerts.len(),
            snapshot.history.len()
        );
        let mut slot = self.snapshot.write().await;
        *slot = Some(snapshot);
        Ok(())
    }

    async fn load_snapshot(&self) -> Result<Option<EngineSnapshot>> {
        let slot = self.snapshot.read().await;
        Ok(slot.clone())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryContactStore {
    contacts: Arc<RwLock<Vec<EmergencyContact>>>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-populated with the given contacts.
    pub fn with_contacts(contacts: Vec<EmergencyContact>) -> Self {
        Self {
            contacts: Arc::new(RwLock::new(contacts)),
        }
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn list_contacts(&self) -> Result<Vec<EmergencyContact>> {
        let contacts = self.contacts.read().await;
        Ok(contacts.clone())
    }

    async fn add_contact(&self, contact: EmergencyContact) -> Result<()> {
        tracing::debug!("Adding contact: id={}, name={}", contact.id, contact.name);
        let mut contacts = self.contacts.write().await;
        contacts.insert(0, contact);
        Ok(())
    }

    async fn remove_contact(&self, id: Uuid) -> Result<()> {
        tracing::debug!("Removing contact: id={}", id);
        let mut contacts = self.contacts.write().await;
        let before = contacts.len();
        contacts.retain(|contact| contact.id != id);
        if contacts.len() == before {
            return Err(eyre!("Contact {} not found", id));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryVitalStore {
    readings: Arc<RwLock<Vec<VitalReading>>>,
}

impl MemoryVitalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VitalStore for MemoryVitalStore {
    async fn add_reading(&self, reading: VitalReading) -> Result<()> {
        tracing::debug!("Recording vitals: id={}", reading.id);
        let mut readings = self.readings.write().await;
        readings.insert(0, reading);
        Ok(())
    }

    async fn recent_readings(&self, limit: usize) -> Result<Vec<VitalReading>> {
        let readings = self.readings.read().await;
        Ok(readings.iter().take(limit).cloned().collect())
    }
}
