//! Notification seams.
//!
//! Two distinct audiences are notified from here:
//!
//! - The display collaborator subscribes to [`AlertEvent`]s broadcast by
//!   the lifecycle manager and re-renders the active alert view.
//! - The caretaker circle receives outbound [`CaretakerMessage`]s through
//!   a [`CaretakerNotifier`]. Actual phone/SMS/email delivery is an
//!   external collaborator (best-effort, unverified by this engine), so
//!   the default implementation just records the attempt.

use async_trait::async_trait;
use carealert_core::models::alert::Alert;
use carealert_core::models::contact::{CaretakerMessage, EmergencyContact};
use tracing::{info, warn};

/// State-change notification emitted on every alert transition.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertEvent {
    /// A newly due occurrence was materialized as an alert.
    Raised(Alert),
    /// An elapsed snooze brought an existing alert back.
    Resurfaced(Alert),
    Snoozed(Alert),
    Acknowledged(Alert),
    Expired(Alert),
}

impl AlertEvent {
    pub fn alert(&self) -> &Alert {
        match self {
            AlertEvent::Raised(alert)
            | AlertEvent::Resurfaced(alert)
            | AlertEvent::Snoozed(alert)
            | AlertEvent::Acknowledged(alert)
            | AlertEvent::Expired(alert) => alert,
        }
    }
}

/// Outbound delivery channel to a single caretaker.
#[async_trait]
pub trait CaretakerNotifier: Send + Sync {
    async fn deliver(
        &self,
        contact: &EmergencyContact,
        message: &CaretakerMessage,
    ) -> eyre::Result<()>;
}

/// Stub notifier that records deliveries in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotifier;

#[async_trait]
impl CaretakerNotifier for LoggingNotifier {
    async fn deliver(
        &self,
        contact: &EmergencyContact,
        message: &CaretakerMessage,
    ) -> eyre::Result<()> {
        info!(
            "Caretaker alert to {} ({}): {}",
            contact.name,
            contact.phone,
            message.text()
        );
        Ok(())
    }
}

/// Sends `message` to every contact, best-effort. Failures are logged and
/// skipped; returns how many deliveries succeeded.
pub async fn notify_caretakers(
    notifier: &dyn CaretakerNotifier,
    contacts: &[EmergencyContact],
    message: &CaretakerMessage,
) -> usize {
    let mut delivered = 0;
    for contact in contacts {
        match notifier.deliver(contact, message).await {
            Ok(()) => delivered += 1,
            Err(error) => {
                warn!("Failed to notify {}: {error}", contact.name);
            }
        }
    }
    delivered
}
