//! Outbound notification email.

use serde::Serialize;

/// A transactional email ready to hand to an [`crate::domain::gateways::EmailSender`].
///
/// Serializes to the provider's request body:
///
/// ```json
/// {
///   "from": "Snappy MCP <onboarding@resend.dev>",
///   "to": ["hello@snappymcp.com"],
///   "subject": "New Contact Form Submission from Jo Li",
///   "html": "<h2>...</h2>",
///   "reply_to": "a@b.com"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}
