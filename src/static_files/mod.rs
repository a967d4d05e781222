//! Static file lookup under a fixed document root.
//!
//! Turns a request target into file bytes plus a content type, applying the
//! directory index and custom error page conventions:
//!
//! - `/` and any directory resolve to the `index.html` inside them
//! - `<root>/404.html`, when present, is the body of every 404
//! - anything that cannot be read is reported as not found

pub mod resolver;

use std::io;
use std::path::{Path, PathBuf};

use crate::http::error::RequestError;
use crate::http::mime::MimeTypes;

pub const INDEX_FILE: &str = "index.html";
pub const NOT_FOUND_PAGE: &str = "404.html";

/// A file read into memory, ready to become a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFile {
    pub path: PathBuf,
    pub content_type: String,
    pub body: Vec<u8>,
}

/// Read-only view of the document root shared by all connections.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
    mime: MimeTypes,
}

impl StaticFiles {
    /// Creates a lookup rooted at `root`.
    ///
    /// A relative root is taken relative to the current directory. The root
    /// is normalized lexically; symlinks are not resolved.
    pub fn new(root: impl AsRef<Path>, mime: MimeTypes) -> io::Result<Self> {
        let absolute = std::path::absolute(root.as_ref())?;
        Ok(Self {
            root: resolver::normalize(&absolute),
            mime,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `url_path` and reads the file it names.
    pub async fn lookup(&self, url_path: &str) -> Result<StaticFile, RequestError> {
        let mut path = resolver::resolve(&self.root, url_path).ok_or_else(|| {
            tracing::warn!(path = %url_path, "rejected path outside document root");
            RequestError::PathTraversalRejected
        })?;

        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|_| RequestError::NotFound)?;

        if metadata.is_dir() {
            let index = path.join(INDEX_FILE);
            if !is_file(&index).await {
                tracing::debug!(dir = %path.display(), "directory has no index");
                return Err(RequestError::NotFound);
            }
            path = index;
        }

        self.read(path).await.map_err(|e| {
            tracing::debug!(error = %e, "failed to read file");
            RequestError::NotFound
        })
    }

    /// The custom 404 page, if the document root provides a readable one.
    pub async fn not_found_page(&self) -> Option<StaticFile> {
        let path = self.root.join(NOT_FOUND_PAGE);
        if !is_file(&path).await {
            return None;
        }
        self.read(path).await.ok()
    }

    async fn read(&self, path: PathBuf) -> io::Result<StaticFile> {
        let body = tokio::fs::read(&path).await?;
        let content_type = self.mime.guess(&path);
        Ok(StaticFile {
            path,
            content_type,
            body,
        })
    }
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}
