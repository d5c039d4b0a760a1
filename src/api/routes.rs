//! API route configuration.

use crate::api::handlers::contact_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Public API routes.
///
/// # Endpoints
///
/// - `POST /contact` - Relay a contact form submission
pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/contact", post(contact_handler))
}
