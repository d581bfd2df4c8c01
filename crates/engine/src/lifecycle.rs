//! # Alert Lifecycle Manager
//!
//! The single owner of the live alert set. Every mutation of alert state
//! goes through [`AlertManager`]: the poller feeds it newly due
//! occurrences via [`AlertManager::reconcile`], user actions arrive as
//! [`AlertManager::acknowledge`] / [`AlertManager::snooze`] calls, and
//! each transition is broadcast to subscribers so the display layer can
//! re-render.
//!
//! ## Idempotent reconciliation
//!
//! Alerts are keyed by occurrence identity (schedule + time-of-day +
//! calendar date), and `reconcile` only creates an alert for a key it has
//! never seen that day. Repeated poll ticks over the same due window
//! therefore cannot duplicate an alert or reset its state, and resolved
//! alerts stay in the map as same-day tombstones so an acknowledged
//! occurrence is never re-raised, including after a restart restores a
//! snapshot taken earlier the same day.
//!
//! ## Day rollover and clock skew
//!
//! Keys from a previous calendar day are swept at the start of every
//! reconcile: live leftovers are expired with a `Missed` history entry,
//! and spent tombstones are dropped. A clock that moves backward between
//! ticks is logged and treated defensively: no new alerts are created
//! until the clock catches up again, so nothing double-fires.

use std::collections::HashMap;

use carealert_core::errors::{CareError, CareResult};
use carealert_core::models::alert::{
    Alert, AlertState, EngineSnapshot, HistoryEntry, OccurrenceKey, ReminderOccurrence, Resolution,
};
use chrono::{Duration, NaiveDateTime};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::history::HistoryLog;
use crate::notify::AlertEvent;

const EVENT_CHANNEL_CAPACITY: usize = 64;

pub struct AlertManager {
    alerts: HashMap<OccurrenceKey, Alert>,
    history: HistoryLog,
    events: broadcast::Sender<AlertEvent>,
    last_tick: Option<NaiveDateTime>,
}

impl Default for AlertManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertManager {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            alerts: HashMap::new(),
            history: HistoryLog::new(),
            events,
            last_tick: None,
        }
    }

    /// Subscribes to state-change notifications. This is the sole
    /// coupling to the display collaborator.
    pub fn subscribe(&self) -> broadcast::Receiver<AlertEvent> {
        self.events.subscribe()
    }

    pub(crate) fn event_sender(&self) -> broadcast::Sender<AlertEvent> {
        self.events.clone()
    }

    /// Merges the evaluator's due set into the live alert map.
    ///
    /// In order: expired leftovers from previous days are finalized as
    /// `Missed`, elapsed snoozes are resurfaced as `Active` (the same
    /// alert under the same key, not a new occurrence), and due
    /// occurrences whose key is unknown are raised as new `Active`
    /// alerts. Keys already tracked in any state are left untouched,
    /// which makes repeated calls with the same due set idempotent.
    pub fn reconcile(&mut self, due: &[ReminderOccurrence], now: NaiveDateTime) {
        let clock_went_backward = match self.last_tick {
            Some(last) if now < last => {
                warn!(
                    "Clock moved backward (now={}, last tick={}); suppressing new alerts this tick",
                    now, last
                );
                true
            }
            _ => {
                self.last_tick = Some(now);
                false
            }
        };

        self.sweep_previous_days(now);
        self.resurface_elapsed_snoozes(now);

        if clock_went_backward {
            return;
        }

        for occurrence in due {
            if self.alerts.contains_key(&occurrence.key) {
                // Already fired for this occurrence today (live or resolved)
                continue;
            }
            let alert = Alert::from_occurrence(occurrence, now);
            info!("Raising alert: {}", alert.key);
            self.alerts.insert(alert.key, alert.clone());
            self.emit(AlertEvent::Raised(alert));
        }
    }

    /// Marks an alert as taken and finalizes it.
    ///
    /// The key remains tombstoned for the rest of its calendar day, so
    /// later reconcile ticks cannot re-raise the same occurrence.
    ///
    /// # Errors
    ///
    /// Returns `CareError::NotFound` when no live alert exists for the
    /// key. Callers log and ignore this; it is never fatal.
    pub fn acknowledge(&mut self, key: &OccurrenceKey, now: NaiveDateTime) -> CareResult<()> {
        let alert = self.live_alert_mut(key)?;
        alert.state = AlertState::Acknowledged;
        let alert = alert.clone();
        info!("Alert acknowledged: {}", key);
        self.history
            .append(HistoryEntry::new(&alert, Resolution::Taken, now));
        self.emit(AlertEvent::Acknowledged(alert));
        Ok(())
    }

    /// Hides an alert until `now + duration`, at which point the next
    /// reconcile resurfaces the same alert instead of raising a new one.
    ///
    /// # Errors
    ///
    /// Returns `CareError::NotFound` when no live alert exists for the
    /// key.
    pub fn snooze(
        &mut self,
        key: &OccurrenceKey,
        duration: Duration,
        now: NaiveDateTime,
    ) -> CareResult<()> {
        let alert = self.live_alert_mut(key)?;
        let until = now + duration;
        alert.state = AlertState::Snoozed { until };
        let alert = alert.clone();
        info!("Alert snoozed until {}: {}", until, key);
        self.emit(AlertEvent::Snoozed(alert));
        Ok(())
    }

    /// Finalizes an unacknowledged alert as missed.
    ///
    /// Reconcile does this automatically once the alert's day has passed;
    /// the method exists for collaborators that decide to expire earlier.
    ///
    /// # Errors
    ///
    /// Returns `CareError::NotFound` when no live alert exists for the
    /// key.
    pub fn expire(&mut self, key: &OccurrenceKey, now: NaiveDateTime) -> CareResult<()> {
        let alert = self.live_alert_mut(key)?;
        alert.state = AlertState::Expired;
        let alert = alert.clone();
        info!("Alert expired: {}", key);
        self.history
            .append(HistoryEntry::new(&alert, Resolution::Missed, now));
        self.emit(AlertEvent::Expired(alert));
        Ok(())
    }

    /// Currently ringing alerts (`Active` only), soonest first.
    pub fn active_alerts(&self) -> Vec<Alert> {
        let mut active: Vec<_> = self
            .alerts
            .values()
            .filter(|alert| alert.state == AlertState::Active)
            .cloned()
            .collect();
        active.sort_by_key(|alert| alert.scheduled_at);
        active
    }

    /// Live alerts including snoozed ones, for status views.
    pub fn visible_alerts(&self) -> Vec<Alert> {
        let mut visible: Vec<_> = self
            .alerts
            .values()
            .filter(|alert| alert.state.is_live())
            .cloned()
            .collect();
        visible.sort_by_key(|alert| alert.scheduled_at);
        visible
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Exports the full state for the persistence sink.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            alerts: self.alerts.values().cloned().collect(),
            history: self.history.entries().to_vec(),
        }
    }

    /// Reloads persisted state. Resolved same-day alerts come back as
    /// tombstones, so occurrences already acknowledged today are not
    /// re-fired. Emits no events.
    pub fn restore(&mut self, snapshot: EngineSnapshot) {
        debug!(
            "Restoring snapshot: {} alerts, {} history entries",
            snapshot.alerts.len(),
            snapshot.history.len()
        );
        self.alerts = snapshot
            .alerts
            .into_iter()
            .map(|alert| (alert.key, alert))
            .collect();
        self.history = HistoryLog::from_entries(snapshot.history);
        self.last_tick = None;
    }

    fn live_alert_mut(&mut self, key: &OccurrenceKey) -> CareResult<&mut Alert> {
        match self.alerts.get_mut(key) {
            Some(alert) if alert.state.is_live() => Ok(alert),
            _ => Err(CareError::NotFound(format!("no live alert for {key}"))),
        }
    }

    fn sweep_previous_days(&mut self, now: NaiveDateTime) {
        let today = now.date();
        let leftovers: Vec<OccurrenceKey> = self
            .alerts
            .keys()
            .filter(|key| key.date < today)
            .copied()
            .collect();

        for key in leftovers {
            let Some(mut alert) = self.alerts.remove(&key) else {
                continue;
            };
            if alert.state.is_live() {
                alert.state = AlertState::Expired;
                info!("Alert expired at day rollover: {}", key);
                self.history
                    .append(HistoryEntry::new(&alert, Resolution::Missed, now));
                self.emit(AlertEvent::Expired(alert));
            }
        }
    }

    fn resurface_elapsed_snoozes(&mut self, now: NaiveDateTime) {
        let elapsed: Vec<OccurrenceKey> = self
            .alerts
            .iter()
            .filter_map(|(key, alert)| match alert.state {
                AlertState::Snoozed { until } if until <= now => Some(*key),
                _ => None,
            })
            .collect();

        for key in elapsed {
            let Some(alert) = self.alerts.get_mut(&key) else {
                continue;
            };
            alert.state = AlertState::Active;
            let alert = alert.clone();
            info!("Snoozed alert resurfaced: {}", key);
            self.emit(AlertEvent::Resurfaced(alert));
        }
    }

    fn emit(&self, event: AlertEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }
}
