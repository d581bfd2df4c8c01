use std::sync::Arc;

use carealert_core::clock::SystemClock;
use carealert_core::models::contact::EmergencyContact;
use carealert_engine::config::EngineConfig;
use carealert_engine::history::HistoryLog;
use carealert_engine::notify::AlertEvent;
use carealert_store::memory::{MemoryAlertStateStore, MemoryContactStore, MemoryScheduleStore};
use carealert_store::{AlertStateStore, ContactStore};
use color_eyre::eyre::Result;
use dotenv::dotenv;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = EngineConfig::from_env()?;

    // Collaborator stores: in-memory reference implementations
    let schedules = Arc::new(MemoryScheduleStore::new());
    let contacts = MemoryContactStore::with_contacts(default_contacts()?);
    let alert_state = MemoryAlertStateStore::new();

    // Reload alert state from the previous run so occurrences already
    // acknowledged today are not re-fired
    let snapshot = alert_state.load_snapshot().await?;

    // Start the scheduling engine
    let engine = carealert_engine::start_engine(
        &config,
        schedules,
        Arc::new(SystemClock),
        snapshot,
    )
    .await?;
    info!(
        "Caretaker circle has {} contact(s)",
        contacts.list_contacts().await?.len()
    );

    // Mirror alert transitions into the log until shutdown; a real
    // display collaborator would re-render from these events
    let mut events = engine.subscribe();
    let display = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(AlertEvent::Raised(alert)) | Ok(AlertEvent::Resurfaced(alert)) => {
                    info!(
                        "Reminder due: {} (scheduled {})",
                        alert.message,
                        alert.scheduled_at.format("%H:%M")
                    );
                }
                Ok(AlertEvent::Snoozed(alert)) => info!("Snoozed: {}", alert.message),
                Ok(AlertEvent::Acknowledged(alert)) => info!("Taken: {}", alert.message),
                Ok(AlertEvent::Expired(alert)) => info!("Missed: {}", alert.message),
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Display fell behind by {skipped} event(s)");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    // Run until interrupted
    tokio::signal::ctrl_c().await?;
    info!("Shutting down");

    let snapshot = engine.shutdown().await;

    // Today's outcomes, newest first
    let history = HistoryLog::from_entries(snapshot.history.clone());
    for entry in history.recent(config.history_recent_limit) {
        info!(
            "History: {} resolved {:?} at {}",
            entry.message,
            entry.resolution,
            entry.resolved_at.format("%H:%M")
        );
    }

    alert_state.save_snapshot(snapshot).await?;
    display.abort();

    Ok(())
}

/// Seed contacts shipped with the assistant; the directory is editable
/// through the contact store at runtime.
fn default_contacts() -> Result<Vec<EmergencyContact>> {
    Ok(vec![
        EmergencyContact::new(
            "Dr. Sharma",
            "+91-98765-43210",
            "Primary Doctor",
            Some("dr.sharma@clinic.com".to_string()),
        )?,
        EmergencyContact::new(
            "Family Member",
            "+91-98765-43211",
            "Son/Daughter",
            Some("family@example.com".to_string()),
        )?,
        EmergencyContact::new("Police Emergency", "100", "Emergency Services", None)?,
        EmergencyContact::new("Fire Emergency", "101", "Emergency Services", None)?,
        EmergencyContact::new("Ambulance", "108", "Emergency Services", None)?,
    ])
}
