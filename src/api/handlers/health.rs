//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Site bundle present
/// - **503 Service Unavailable**: `index.html` missing from the asset store
///
/// A disabled email relay is reported but does not degrade the service.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "email": { "status": "ok", "message": "Relay enabled" },
///     "assets": { "status": "ok", "message": "index.html present" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let email_check = check_email(&state);

    let assets_check = check_assets(&state).await;

    let healthy = assets_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            email: email_check,
            assets: assets_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reports whether submissions are relayed by email.
fn check_email(state: &AppState) -> CheckStatus {
    if state.contact_service.is_relay_enabled() {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Relay enabled".to_string()),
        }
    } else {
        CheckStatus {
            status: "disabled".to_string(),
            message: Some("No email provider credential configured".to_string()),
        }
    }
}

/// Checks that the SPA entry document can be served.
async fn check_assets(state: &AppState) -> CheckStatus {
    match state.asset_store.fetch("/index.html").await {
        Ok(_) => CheckStatus {
            status: "ok".to_string(),
            message: Some("index.html present".to_string()),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Asset store error: {}", e)),
        },
    }
}
