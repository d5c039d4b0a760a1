//! # Snappy Site
//!
//! Server for the Snappy MCP marketing site: serves the pre-built single-page
//! application and relays the contact form to the team's inbox.
//!
//! ## Architecture
//!
//! Layers follow the same split as the rest of our services:
//!
//! - **Domain Layer** ([`domain`]) - Contact submission, validation rules, gateway traits
//! - **Application Layer** ([`application`]) - Relay service and notification rendering
//! - **Infrastructure Layer** ([`infrastructure`]) - Email provider client, asset store
//! - **API Layer** ([`api`]) - Contact and health handlers, middleware
//! - **Web Layer** ([`web`]) - Static asset fallback
//! - **Client** ([`client`]) - Form state machine and HTTP transport used by the `contact` CLI
//!
//! ## Contact flow
//!
//! 1. The form validates locally and posts JSON to `POST /api/contact`
//! 2. The server logs the payload, re-validates it and, if `RESEND_API_KEY` is
//!    set, sends an HTML notification email
//! 3. The visitor always gets a success acknowledgement once the body parses;
//!    delivery failures are logged and absorbed
//!
//! ## Quick Start
//!
//! ```bash
//! export STATIC_DIR=dist
//! export RESEND_API_KEY=re_...   # optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod client;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ContactService, DeliveryOutcome};
    pub use crate::client::{ContactForm, FormState, SubmitError};
    pub use crate::domain::entities::{ContactField, ContactSubmission};
    pub use crate::domain::FieldErrors;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
