//! HTTP server initialization and runtime setup.
//!
//! Builds the email sender and asset store from configuration, then runs the
//! Axum server until a shutdown signal arrives.

use crate::application::notification::EmailAddresses;
use crate::application::services::ContactService;
use crate::config::Config;
use crate::domain::gateways::{AssetStore, EmailSender};
use crate::infrastructure::assets::DirAssetStore;
use crate::infrastructure::email::{NullEmailSender, ResendEmailSender};
use crate::routes::{RouterOptions, app_router};
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

/// Picks the email sender for the configured credential.
///
/// # Errors
///
/// Returns an error if the HTTP client for the provider cannot be built.
pub fn build_email_sender(config: &Config) -> Result<Arc<dyn EmailSender>> {
    match &config.resend_api_key {
        Some(key) => {
            let sender =
                ResendEmailSender::new(&config.email_api_url, key, config.email_timeout())
                    .context("Failed to build email client")?;
            tracing::info!("Email relay enabled ({})", config.email_api_url);
            Ok(Arc::new(sender))
        }
        None => {
            tracing::info!("Email relay disabled (no RESEND_API_KEY)");
            Ok(Arc::new(NullEmailSender::new()))
        }
    }
}

/// Assembles application state from configuration.
pub fn build_state(config: &Config) -> Result<AppState> {
    let sender = build_email_sender(config)?;
    let contact_service = Arc::new(ContactService::new(
        sender,
        EmailAddresses {
            from: config.contact_from_email.clone(),
            to: config.contact_to_email.clone(),
        },
    ));

    let asset_store: Arc<dyn AssetStore> = Arc::new(DirAssetStore::new(&config.static_dir));

    Ok(AppState::new(contact_service, asset_store))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The email client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    if !std::path::Path::new(&config.static_dir).is_dir() {
        tracing::warn!(
            "Static dir '{}' does not exist; every asset request will 404",
            config.static_dir
        );
    }

    let app = app_router(
        state,
        RouterOptions {
            rate_limit: config.rate_limit_enabled,
            behind_proxy: config.behind_proxy,
        },
    );

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
