//! Email delivery gateway.

use crate::domain::entities::EmailMessage;
use async_trait::async_trait;
use thiserror::Error;

/// Failure to hand a message to the email provider.
///
/// Delivery errors are logged by the caller and never reach the visitor.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("email provider request failed: {0}")]
    Transport(String),

    #[error("email provider responded with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("failed to render email: {0}")]
    Render(String),
}

/// Sends transactional email.
///
/// # Implementations
///
/// - [`crate::infrastructure::email::ResendEmailSender`] - Resend-compatible HTTP API
/// - [`crate::infrastructure::email::NullEmailSender`] - No-op used when no credential is configured
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Sends one message. A single attempt; no retry.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Transport`] on network failure and
    /// [`DeliveryError::Rejected`] on a non-success status.
    async fn send(&self, message: &EmailMessage) -> Result<(), DeliveryError>;

    /// Whether this sender actually delivers anything.
    fn is_enabled(&self) -> bool;
}
