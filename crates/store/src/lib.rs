//! # CareAlert Store
//!
//! Collaborator interfaces for the scheduling engine, expressed as async
//! traits:
//!
//! - [`ScheduleStore`]: the record-keeping collaborator that owns
//!   medicine schedules. The engine only ever takes a read-only snapshot
//!   per evaluation tick.
//! - [`AlertStateStore`]: the persistence sink for alert state and
//!   history, so a restart does not re-fire occurrences already
//!   acknowledged that day.
//! - [`ContactStore`]: the emergency-contact directory backing the
//!   caretaker notifier.
//! - [`VitalStore`]: the vital-sign log.
//!
//! Durable backends are out of scope; the [`memory`] module provides
//! `RwLock`-based reference implementations used by the daemon and the
//! tests, and [`mock`] provides mockall doubles for the traits.

/// In-memory reference implementations
pub mod memory;
/// Mock implementations for testing
pub mod mock;

use async_trait::async_trait;
use carealert_core::models::alert::EngineSnapshot;
use carealert_core::models::contact::EmergencyContact;
use carealert_core::models::medicine::MedicineSchedule;
use carealert_core::models::vitals::VitalReading;
use eyre::Result;
use uuid::Uuid;

/// Source of medicine schedules. Validation happens at construction time
/// in `carealert-core`; stores only hold already-valid schedules.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Read-only snapshot of all schedules, taken once per poll tick.
    async fn list_schedules(&self) -> Result<Vec<MedicineSchedule>>;

    async fn get_schedule(&self, id: Uuid) -> Result<Option<MedicineSchedule>>;

    async fn add_schedule(&self, schedule: MedicineSchedule) -> Result<()>;

    /// Replaces an existing schedule in full. Edits take effect on the
    /// next evaluation tick; there is no retroactive firing.
    async fn replace_schedule(&self, schedule: MedicineSchedule) -> Result<()>;

    async fn remove_schedule(&self, id: Uuid) -> Result<()>;
}

/// Persistence sink for engine state across restarts.
#[async_trait]
pub trait AlertStateStore: Send + Sync {
    async fn save_snapshot(&self, snapshot: EngineSnapshot) -> Result<()>;

    async fn load_snapshot(&self) -> Result<Option<EngineSnapshot>>;
}

/// Directory of people to reach when the user needs help.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn list_contacts(&self) -> Result<Vec<EmergencyContact>>;

    async fn add_contact(&self, contact: EmergencyContact) -> Result<()>;

    async fn remove_contact(&self, id: Uuid) -> Result<()>;
}

/// Log of recorded vital signs, newest first.
#[async_trait]
pub trait VitalStore: Send + Sync {
    async fn add_reading(&self, reading: VitalReading) -> Result<()>;

    async fn recent_readings(&self, limit: usize) -> Result<Vec<VitalReading>>;
}
