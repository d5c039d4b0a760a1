//! Contact submission relay service.

use std::sync::Arc;

use chrono::Utc;

use crate::application::notification::{EmailAddresses, build_notification};
use crate::domain::entities::ContactSubmission;
use crate::domain::gateways::{DeliveryError, EmailSender};

/// Acknowledgement returned to the visitor once a submission is received.
pub const ACKNOWLEDGEMENT: &str = "Thank you for your message! We will get back to you soon.";

/// What happened to the notification email for a submission.
///
/// Never shown to the visitor; used for logging and metrics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Sent,
    Skipped,
    Failed,
}

impl DeliveryOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Skipped => "skipped",
            Self::Failed => "failed",
        }
    }
}

/// Forwards contact submissions to the team's inbox.
///
/// Delivery is a single fire-and-forget attempt: failures are logged and
/// absorbed so the visitor's acknowledgement never depends on the provider.
pub struct ContactService {
    sender: Arc<dyn EmailSender>,
    addresses: EmailAddresses,
}

impl ContactService {
    pub fn new(sender: Arc<dyn EmailSender>, addresses: EmailAddresses) -> Self {
        Self { sender, addresses }
    }

    /// Whether submissions are relayed by email at all.
    pub fn is_relay_enabled(&self) -> bool {
        self.sender.is_enabled()
    }

    /// Relays a submission by email.
    ///
    /// Skips delivery when the sender is disabled. Any [`DeliveryError`] is
    /// logged and reported as [`DeliveryOutcome::Failed`]; this method never
    /// fails.
    pub async fn relay(&self, submission: &ContactSubmission) -> DeliveryOutcome {
        let outcome = if !self.sender.is_enabled() {
            tracing::info!("Email relay disabled, submission not forwarded");
            DeliveryOutcome::Skipped
        } else {
            match self.deliver(submission).await {
                Ok(()) => {
                    tracing::info!(to = %self.addresses.to, "Contact notification sent");
                    DeliveryOutcome::Sent
                }
                Err(e @ DeliveryError::Rejected { .. }) => {
                    tracing::warn!(error = %e, "Email provider rejected contact notification");
                    DeliveryOutcome::Failed
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to send contact notification");
                    DeliveryOutcome::Failed
                }
            }
        };

        metrics::counter!("contact_deliveries_total", "outcome" => outcome.as_str()).increment(1);

        outcome
    }

    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), DeliveryError> {
        let message = build_notification(submission, &self.addresses, Utc::now())?;
        self.sender.send(&message).await
    }
}
