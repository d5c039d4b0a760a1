//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export STATIC_DIR="dist"
//! export RESEND_API_KEY="re_123..."            # optional, enables the email relay
//! export CONTACT_TO_EMAIL="hello@snappymcp.com"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `STATIC_DIR` - Directory holding the built site (default: `dist`)
//! - `RESEND_API_KEY` - Email provider credential; unset or empty disables the relay
//! - `EMAIL_API_URL` - Email provider base URL (default: `https://api.resend.com`)
//! - `CONTACT_FROM_EMAIL` - Sender address (default: `Snappy MCP <onboarding@resend.dev>`)
//! - `CONTACT_TO_EMAIL` - Recipient address (default: `hello@snappymcp.com`)
//! - `EMAIL_TIMEOUT_SECONDS` - Outbound request timeout (default: 10, range: 1-120)
//! - `RATE_LIMIT_ENABLED` - Per-IP rate limit on the contact endpoint (default: `true`)
//! - `BEHIND_PROXY` - Read client IP from forwarding headers (default: `false`)

use anyhow::Result;
use std::env;
use std::time::Duration;

pub const DEFAULT_EMAIL_API_URL: &str = "https://api.resend.com";
pub const DEFAULT_FROM_EMAIL: &str = "Snappy MCP <onboarding@resend.dev>";
pub const DEFAULT_TO_EMAIL: &str = "hello@snappymcp.com";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub static_dir: String,
    /// Email provider credential. `None` disables the relay without failing requests.
    pub resend_api_key: Option<String>,
    pub email_api_url: String,
    pub contact_from_email: String,
    pub contact_to_email: String,
    pub email_timeout_seconds: u64,
    pub rate_limit_enabled: bool,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            static_dir: "dist".to_string(),
            resend_api_key: None,
            email_api_url: DEFAULT_EMAIL_API_URL.to_string(),
            contact_from_email: DEFAULT_FROM_EMAIL.to_string(),
            contact_to_email: DEFAULT_TO_EMAIL.to_string(),
            email_timeout_seconds: 10,
            rate_limit_enabled: true,
            behind_proxy: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable optional values fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let static_dir = env::var("STATIC_DIR").unwrap_or(defaults.static_dir);

        let resend_api_key = Self::load_api_key();

        let email_api_url = env::var("EMAIL_API_URL").unwrap_or(defaults.email_api_url);
        let contact_from_email =
            env::var("CONTACT_FROM_EMAIL").unwrap_or(defaults.contact_from_email);
        let contact_to_email = env::var("CONTACT_TO_EMAIL").unwrap_or(defaults.contact_to_email);

        let email_timeout_seconds = env::var("EMAIL_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.email_timeout_seconds);

        let rate_limit_enabled = env::var("RATE_LIMIT_ENABLED")
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.rate_limit_enabled);

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.behind_proxy);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            static_dir,
            resend_api_key,
            email_api_url,
            contact_from_email,
            contact_to_email,
            email_timeout_seconds,
            rate_limit_enabled,
            behind_proxy,
        })
    }

    /// Reads `RESEND_API_KEY`, treating an empty or blank value as unset.
    fn load_api_key() -> Option<String> {
        env::var("RESEND_API_KEY")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `email_api_url` is not an http(s) URL
    /// - `email_timeout_seconds` is outside 1..=120
    /// - either contact address is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.email_api_url.starts_with("http://") && !self.email_api_url.starts_with("https://")
        {
            anyhow::bail!(
                "EMAIL_API_URL must start with 'http://' or 'https://', got '{}'",
                self.email_api_url
            );
        }

        if self.email_timeout_seconds == 0 || self.email_timeout_seconds > 120 {
            anyhow::bail!(
                "EMAIL_TIMEOUT_SECONDS must be between 1 and 120, got {}",
                self.email_timeout_seconds
            );
        }

        if self.contact_from_email.trim().is_empty() {
            anyhow::bail!("CONTACT_FROM_EMAIL must not be empty");
        }

        if self.contact_to_email.trim().is_empty() {
            anyhow::bail!("CONTACT_TO_EMAIL must not be empty");
        }

        Ok(())
    }

    pub fn email_timeout(&self) -> Duration {
        Duration::from_secs(self.email_timeout_seconds)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Static dir: {}", self.static_dir);

        if let Some(ref key) = self.resend_api_key {
            tracing::info!(
                "  Email relay: enabled ({}, key {})",
                self.email_api_url,
                mask_secret(key)
            );
            tracing::info!("  From: {}", self.contact_from_email);
            tracing::info!("  To: {}", self.contact_to_email);
        } else {
            tracing::info!("  Email relay: disabled");
        }

        tracing::info!(
            "  Rate limit: {}{}",
            if self.rate_limit_enabled { "enabled" } else { "disabled" },
            if self.behind_proxy { " (behind proxy)" } else { "" }
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

/// Masks a secret for logging, keeping only a short prefix.
///
/// - `re_123456789` → `re_***`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    let prefix: String = secret.chars().take(3).collect();
    if secret.chars().count() <= 6 {
        "***".to_string()
    } else {
        format!("{prefix}***")
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
