//! Filesystem-backed asset store.

use crate::domain::gateways::{Asset, AssetError, AssetStore};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Serves the pre-built site bundle from a directory.
///
/// Request paths are percent-decoded and then map directly onto files below
/// `root`. Paths with `..`, absolute or prefix components are rejected after
/// decoding, before touching the filesystem. Directories are not listed and do not resolve to an index.
#[derive(Debug, Clone)]
pub struct DirAssetStore {
    root: PathBuf,
}

impl DirAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves a URL path to a file below the root.
    fn resolve(&self, path: &str) -> Result<PathBuf, AssetError> {
        let decoded =
            urlencoding::decode(path).map_err(|_| AssetError::InvalidPath(path.to_string()))?;
        let relative = Path::new(decoded.trim_start_matches('/'));

        if relative.as_os_str().is_empty() {
            return Err(AssetError::NotFound(path.to_string()));
        }

        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(AssetError::InvalidPath(path.to_string()));
        }

        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl AssetStore for DirAssetStore {
    async fn fetch(&self, path: &str) -> Result<Asset, AssetError> {
        let file = self.resolve(path)?;

        let body = tokio::fs::read(&file).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => AssetError::NotFound(path.to_string()),
            _ => AssetError::Io(e),
        })?;

        let content_type = mime_guess::from_path(&file)
            .first_or_octet_stream()
            .to_string();

        Ok(Asset { content_type, body })
    }
}
