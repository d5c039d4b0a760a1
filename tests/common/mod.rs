#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use serde_json::{Value, json};
use snappy_site::config::Config;
use snappy_site::routes::{RouterOptions, app_router};
use snappy_site::server::build_state;
use std::net::SocketAddr;
use std::path::Path;
use tempfile::TempDir;

pub const INDEX_HTML: &str = "<!doctype html><html><body><div id=\"root\"></div></body></html>";

/// Scenario A payload from the contact form.
pub fn valid_payload() -> Value {
    json!({
        "firstName": "Jo",
        "lastName": "Li",
        "email": "a@b.com",
        "company": "Ac",
        "role": "CTO",
        "companySize": "1-10",
        "projectTimeline": "immediate",
        "budget": "<50k",
        "message": "Need help fast"
    })
}

/// Creates a site bundle with an entry document and a stylesheet.
pub fn create_site() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::create_dir(dir.path().join("assets")).unwrap();
    std::fs::write(dir.path().join("assets/app.css"), "body{margin:0}").unwrap();
    dir
}

/// Configuration pointing at `static_dir`, with the email relay enabled only
/// when `email_api_url` is given.
pub fn test_config(static_dir: &Path, email_api_url: Option<&str>) -> Config {
    let mut config = Config {
        static_dir: static_dir.to_string_lossy().into_owned(),
        contact_from_email: "Site <noreply@example.com>".to_string(),
        contact_to_email: "team@example.com".to_string(),
        email_timeout_seconds: 5,
        rate_limit_enabled: false,
        ..Config::default()
    };

    if let Some(url) = email_api_url {
        config.resend_api_key = Some("test-key".to_string());
        config.email_api_url = url.to_string();
    }

    config
}

pub fn create_test_app(config: &Config) -> Router {
    let state = build_state(config).unwrap();
    app_router(state, RouterOptions::default())
}

pub fn create_test_server(config: &Config) -> TestServer {
    TestServer::new(create_test_app(config)).unwrap()
}

/// Serves the app on an ephemeral local port with peer addresses attached,
/// as `server::run` does, and returns its base URL.
pub async fn spawn_server(config: &Config, options: RouterOptions) -> String {
    let app = app_router(build_state(config).unwrap(), options);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    format!("http://{addr}")
}
