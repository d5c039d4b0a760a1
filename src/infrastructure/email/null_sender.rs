//! No-op email sender for deployments without a provider credential.

use crate::domain::entities::EmailMessage;
use crate::domain::gateways::{DeliveryError, EmailSender};
use async_trait::async_trait;
use tracing::debug;

/// An email sender that drops every message.
///
/// Used when `RESEND_API_KEY` is unset or empty. The relay checks
/// [`EmailSender::is_enabled`] and skips rendering entirely, so `send` is only
/// reached by callers that ignore that flag.
pub struct NullEmailSender;

impl NullEmailSender {
    pub fn new() -> Self {
        debug!("Using NullEmailSender (email relay disabled)");
        Self
    }
}

impl Default for NullEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailSender for NullEmailSender {
    async fn send(&self, message: &EmailMessage) -> Result<(), DeliveryError> {
        debug!(subject = %message.subject, "Email relay disabled, dropping message");
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
