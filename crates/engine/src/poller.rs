//! # Poller
//!
//! The only source of autonomous execution in the engine: a tokio task
//! that runs one evaluation tick immediately at startup and then repeats
//! on a fixed interval until shut down.
//!
//! Each tick takes a read-only snapshot of the schedules, evaluates the
//! due set against the injected clock, and hands it to the lifecycle
//! manager. The next sleep is scheduled only after the previous tick has
//! completed, so ticks never overlap and no drift accumulates against a
//! fixed epoch. User actions and ticks serialize on the manager's lock,
//! which gives the ordering guarantee the UI relies on: an acknowledge
//! that lands between two ticks is fully applied before the next
//! reconcile runs.
//!
//! Shutdown is observed only at the sleep point. A tick that is already
//! running completes in full (reconcile is synchronous and atomic), and
//! once [`PollerHandle::shutdown`] returns, no further reconcile call
//! will occur.

use std::sync::Arc;

use carealert_core::clock::Clock;
use carealert_store::ScheduleStore;
use chrono::Duration;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::evaluator::due_occurrences;
use crate::lifecycle::AlertManager;

pub struct PollerHandle {
    stop: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stops the polling loop and waits for the task to finish. Any tick
    /// in flight completes first; none starts afterwards.
    pub async fn shutdown(self) {
        let _ = self.stop.send(true);
        let _ = self.task.await;
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawns the polling loop. The first tick runs immediately.
pub fn spawn(
    store: Arc<dyn ScheduleStore>,
    manager: Arc<Mutex<AlertManager>>,
    clock: Arc<dyn Clock>,
    interval: std::time::Duration,
    tolerance: Duration,
) -> PollerHandle {
    let (stop, mut stopped) = watch::channel(false);

    let task = tokio::spawn(async move {
        debug!("Poller started (interval {:?})", interval);
        loop {
            tick(store.as_ref(), &manager, clock.as_ref(), tolerance).await;

            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                // Shutdown requested, or the handle was dropped
                _ = stopped.changed() => break,
            }
        }
        debug!("Poller stopped");
    });

    PollerHandle { stop, task }
}

async fn tick(
    store: &dyn ScheduleStore,
    manager: &Mutex<AlertManager>,
    clock: &dyn Clock,
    tolerance: Duration,
) {
    let schedules = match store.list_schedules().await {
        Ok(schedules) => schedules,
        Err(error) => {
            warn!("Skipping tick: failed to read schedules: {error}");
            return;
        }
    };

    let now = clock.now();
    let due = due_occurrences(&schedules, now, tolerance);
    debug!("Tick at {}: {} occurrence(s) due", now, due.len());

    let mut manager = manager.lock().await;
    manager.reconcile(&due, now);
}
