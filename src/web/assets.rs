//! Static asset fallback for the single-page application bundle.

use axum::{
    extract::State,
    http::{Uri, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Entry document served for the site root.
pub const ENTRY_DOCUMENT: &str = "/index.html";

/// Maps a request path to its asset key: `/` becomes the entry document,
/// everything else is passed through unchanged.
pub fn asset_path(path: &str) -> &str {
    if path == "/" { ENTRY_DOCUMENT } else { path }
}

/// Serves a file from the asset store.
///
/// Used as the router fallback, so it sees every request no other route
/// matched. Any lookup error yields `404 Not Found` with a plain-text body.
/// No conditional requests, caching headers or ranges.
pub async fn static_asset_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let path = asset_path(uri.path());

    match state.asset_store.fetch(path).await {
        Ok(asset) => ([(header::CONTENT_TYPE, asset.content_type)], asset.body).into_response(),
        Err(e) => {
            tracing::debug!(path, error = %e, "Asset lookup failed");
            AppError::NotFound.into_response()
        }
    }
}
