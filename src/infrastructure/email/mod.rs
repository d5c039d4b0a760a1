//! Email delivery backends.
//!
//! Provides two [`EmailSender`](crate::domain::gateways::EmailSender) implementations:
//! - [`ResendEmailSender`] - Resend-compatible HTTP API
//! - [`NullEmailSender`] - No-op used when no API key is configured

mod null_sender;
mod resend_sender;

pub use null_sender::NullEmailSender;
pub use resend_sender::ResendEmailSender;
