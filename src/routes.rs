//! Top-level router configuration combining API and site routes.
//!
//! # Route Structure
//!
//! - `POST /api/contact` - Contact form relay (public, rate limited)
//! - `GET  /health`      - Health check: email relay, asset store
//! - everything else     - Static asset fallback (`/` → `/index.html`)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the contact endpoint

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web::assets::static_asset_handler;
use axum::{Router, routing::get};

/// Router switches derived from [`crate::config::Config`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RouterOptions {
    pub rate_limit: bool,
    /// When `true`, rate limiting reads client IP from forwarding headers
    /// instead of the peer socket address.
    pub behind_proxy: bool,
}

/// Constructs the application router with all routes and middleware.
///
/// With `options.rate_limit` set, the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()` so the limiter can
/// key on the peer address.
pub fn app_router(state: AppState, options: RouterOptions) -> Router {
    let contact = api::routes::contact_routes();
    let contact = match (options.rate_limit, options.behind_proxy) {
        (false, _) => contact,
        (true, false) => contact.layer(rate_limit::layer()),
        (true, true) => contact.layer(rate_limit::proxied_layer()),
    };

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", contact)
        .fallback(static_asset_handler)
        .with_state(state)
        .layer(tracing::layer())
}
