//! Transport that carries a validated submission to the relay endpoint.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

use crate::api::dto::contact::ContactResponse;
use crate::domain::FieldErrors;
use crate::domain::entities::ContactSubmission;

/// Why a submission did not reach a successful acknowledgement.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The server re-validated the submission and rejected these fields.
    #[error("server rejected {} field(s)", .0.len())]
    InvalidFields(FieldErrors),

    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}

/// Sends one submission and returns the server's acknowledgement message.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// # Errors
    ///
    /// Returns [`TransportError`] when the call cannot complete, the server
    /// answers with a non-success status, or the body reports `success: false`.
    async fn submit(&self, submission: &ContactSubmission) -> Result<String, TransportError>;
}

/// Posts submissions as JSON to `<base_url>/api/contact`.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/contact", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
    async fn submit(&self, submission: &ContactSubmission) -> Result<String, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let body: Option<ContactResponse> = serde_json::from_str(&text).ok();

        if !status.is_success() {
            return Err(match body {
                Some(body) if status == StatusCode::BAD_REQUEST && !body.errors.is_empty() => {
                    TransportError::InvalidFields(body.errors)
                }
                Some(body) => TransportError::Rejected {
                    status: status.as_u16(),
                    message: body.message,
                },
                None => TransportError::Rejected {
                    status: status.as_u16(),
                    message: text,
                },
            });
        }

        match body {
            Some(ContactResponse {
                success: true,
                message,
                ..
            }) => Ok(message),
            Some(ContactResponse { message, .. }) => Err(TransportError::Rejected {
                status: status.as_u16(),
                message,
            }),
            None => Err(TransportError::InvalidResponse(text)),
        }
    }
}
