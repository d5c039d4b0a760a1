//! Static asset store gateway.

use async_trait::async_trait;
use thiserror::Error;

/// A file from the site bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub content_type: String,
    pub body: Vec<u8>,
}

/// Asset lookup failure. Every variant is served as `404 Not Found`.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),

    #[error("invalid asset path: {0}")]
    InvalidPath(String),

    #[error("asset read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Key-value store of pre-built static files, keyed by request path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Looks up an asset by its URL path (leading `/` included).
    ///
    /// # Errors
    ///
    /// Returns [`AssetError`] when the path is unknown, escapes the store, or
    /// cannot be read.
    async fn fetch(&self, path: &str) -> Result<Asset, AssetError>;
}
