//! # CareAlert Engine
//!
//! The reminder scheduling and alert engine: given recurring medication
//! schedules and the current time, it determines which reminders are due,
//! materializes them as alerts, and manages their lifecycle (acknowledge,
//! snooze, expire) without duplicate or missed firings.
//!
//! ## Architecture
//!
//! The engine is built from four small components, leaf first:
//!
//! - **Evaluator**: pure `(schedules, now) -> due occurrences` function
//! - **Lifecycle manager**: exclusive owner of the live alert map
//! - **Poller**: periodic driver invoking evaluate-then-reconcile
//! - **History log**: append-only record of finalized alerts
//!
//! Everything shares a single-owner concurrency model: the lifecycle
//! manager sits behind one async mutex, the poller is the only autonomous
//! task, and user actions serialize with poll ticks on that lock. The
//! current time always comes from an injected [`carealert_core::clock::Clock`].

/// Engine configuration from environment variables
pub mod config;
/// Pure due-reminder evaluation
pub mod evaluator;
/// Append-only alert history
pub mod history;
/// Alert lifecycle state machine
pub mod lifecycle;
/// Display events and caretaker delivery seams
pub mod notify;
/// Periodic evaluation driver
pub mod poller;

use std::sync::Arc;

use carealert_core::clock::Clock;
use carealert_core::models::alert::EngineSnapshot;
use carealert_store::ScheduleStore;
use eyre::Result;
use tokio::sync::{broadcast, Mutex};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use crate::config::EngineConfig;
use crate::lifecycle::AlertManager;
use crate::notify::AlertEvent;
use crate::poller::PollerHandle;

/// A running engine: the shared lifecycle manager plus the poller task
/// driving it.
pub struct EngineHandle {
    manager: Arc<Mutex<AlertManager>>,
    events: broadcast::Sender<AlertEvent>,
    poller: PollerHandle,
}

impl EngineHandle {
    /// The shared lifecycle manager, for user actions
    /// (acknowledge/snooze) and state queries.
    pub fn manager(&self) -> Arc<Mutex<AlertManager>> {
        Arc::clone(&self.manager)
    }

    /// Subscribes to alert state-change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<AlertEvent> {
        self.events.subscribe()
    }

    /// Stops the poller and returns a final state snapshot for the
    /// persistence sink.
    pub async fn shutdown(self) -> EngineSnapshot {
        self.poller.shutdown().await;
        let manager = self.manager.lock().await;
        manager.snapshot()
    }
}

/// Starts the engine: initializes logging, restores persisted alert
/// state, and spawns the polling loop.
///
/// # Arguments
///
/// * `config` - Engine configuration (intervals, tolerance, log level)
/// * `store` - Schedule source, snapshotted read-only on every tick
/// * `clock` - Time source; the system clock in production
/// * `snapshot` - Persisted alert state from a previous run, if any
///
/// # Errors
///
/// Returns an error when the global tracing subscriber is already set.
pub async fn start_engine(
    config: &EngineConfig,
    store: Arc<dyn ScheduleStore>,
    clock: Arc<dyn Clock>,
    snapshot: Option<EngineSnapshot>,
) -> Result<EngineHandle> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut manager = AlertManager::new();
    if let Some(snapshot) = snapshot {
        info!(
            "Restoring {} alert(s) from previous run",
            snapshot.alerts.len()
        );
        manager.restore(snapshot);
    }
    let events = manager.event_sender();
    let manager = Arc::new(Mutex::new(manager));

    let poller = poller::spawn(
        store,
        Arc::clone(&manager),
        clock,
        config.poll_interval(),
        config.tolerance(),
    );
    info!(
        "Engine started (poll every {}s, tolerance {}m)",
        config.poll_interval_seconds, config.tolerance_minutes
    );

    Ok(EngineHandle {
        manager,
        events,
        poller,
    })
}
