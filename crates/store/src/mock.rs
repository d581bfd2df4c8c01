use async_trait::async_trait;
use carealert_core::models::alert::EngineSnapshot;
use carealert_core::models::contact::EmergencyContact;
use carealert_core::models::medicine::MedicineSchedule;
use carealert_core::models::vitals::VitalReading;
use mockall::mock;
use uuid::Uuid;

use crate::{AlertStateStore, ContactStore, ScheduleStore, VitalStore};

// Mock stores for testing
mock! {
    pub ScheduleStore {}

    #[async_trait]
    impl ScheduleStore for ScheduleStore {
        async fn list_schedules(&self) -> eyre::Result<Vec<MedicineSchedule>>;

        async fn get_schedule(&self, id: Uuid) -> eyre::Result<Option<MedicineSchedule>>;

        async fn add_schedule(&self, schedule: MedicineSchedule) -> eyre::Result<()>;

        async fn replace_schedule(&self, schedule: MedicineSchedule) -> eyre::Result<()>;

        async fn remove_schedule(&self, id: Uuid) -> eyre::Result<()>;
    }
}

mock! {
    pub AlertStateStore {}

    #[async_trait]
    impl AlertStateStore for AlertStateStore {
        async fn save_snapshot(&self, snapshot: EngineSnapshot) -> eyre::Result<()>;

        async fn load_snapshot(&self) -> eyre::Result<Option<EngineSnapshot>>;
    }
}

mock! {
    pub ContactStore {}

    #[async_trait]
    impl ContactStore for ContactStore {
        async fn list_contacts(&self) -> eyre::Result<Vec<EmergencyContact>>;

        async fn add_contact(&self, contact: EmergencyContact) -> eyre::Result<()>;

        async fn remove_contact(&self, id: Uuid) -> eyre::Result<()>;
    }
}

mock! {
    pub VitalStore {}

    #[async_trait]
    impl VitalStore for VitalStore {
        async fn add_reading(&self, reading: VitalReading) -> eyre::Result<()>;

        async fn recent_readings(&self, limit: usize) -> eyre::Result<Vec<VitalReading>>;
    }
}
