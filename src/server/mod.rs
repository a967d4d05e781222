//! Process-level server setup: document root preparation and the listener.

pub mod listener;

use anyhow::Context;
use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::http::handler::RequestHandler;
use crate::http::mime::MimeTypes;
use crate::static_files::StaticFiles;

/// Creates the document root (and parents) if it does not exist yet.
pub async fn prepare_document_root(root: &Path) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(root)
        .await
        .with_context(|| format!("failed to create document root {}", root.display()))
}

/// Builds the shared, read-only request handler for `cfg`.
pub async fn build_handler(cfg: &Config) -> anyhow::Result<Arc<RequestHandler>> {
    prepare_document_root(&cfg.static_files.root).await?;

    let files = StaticFiles::new(&cfg.static_files.root, MimeTypes::new())
        .context("failed to resolve document root")?;

    Ok(Arc::new(RequestHandler::new(
        files,
        cfg.server.server_name.clone(),
    )))
}
