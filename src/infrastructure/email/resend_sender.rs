//! Resend-compatible transactional email sender.

use crate::domain::entities::EmailMessage;
use crate::domain::gateways::{DeliveryError, EmailSender};
use async_trait::async_trait;
use std::time::Duration;

/// Sends email through a Resend-compatible HTTP API.
///
/// # Request
///
/// ```text
/// POST {api_url}/emails
/// Content-Type: application/json
/// Authorization: Bearer <api_key>
///
/// {"from": "...", "to": ["..."], "subject": "...", "html": "...", "reply_to": "..."}
/// ```
///
/// Only the response status is inspected. The body of a failed response is
/// carried in [`DeliveryError::Rejected`] for logging.
pub struct ResendEmailSender {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl ResendEmailSender {
    /// Creates a sender with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Transport`] if the HTTP client cannot be built
    /// (e.g. TLS backend initialisation failure).
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.api_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, message: &EmailMessage) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(message)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(status = status.as_u16(), "Email accepted by provider");
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let sender =
            ResendEmailSender::new("https://api.resend.com/", "key", Duration::from_secs(1))
                .unwrap();
        assert_eq!(sender.endpoint(), "https://api.resend.com/emails");
    }
}
