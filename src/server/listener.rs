use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpSocket};
use tracing::{Instrument, info};

use crate::config::{Config, MIN_BACKLOG, ServerConfig};
use crate::http::connection::Connection;
use crate::http::framer::FrameLimits;
use crate::http::handler::RequestHandler;

/// Pause after a failed accept so persistent errors (e.g. fd exhaustion) don't spin.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Prepares the document root, binds, and serves until the process stops.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let handler = super::build_handler(cfg).await?;
    let listener = bind(&cfg.server).await?;

    info!(
        "Serving HTTP/1.0 on http://{} (doc root: {})",
        listener.local_addr()?,
        handler.files().root().display()
    );

    serve(listener, handler, FrameLimits::from(&cfg.server)).await
}

/// Binds a listening socket with address reuse enabled.
pub async fn bind(cfg: &ServerConfig) -> anyhow::Result<TcpListener> {
    let listen_addr = cfg.listen_addr();
    let addr = tokio::net::lookup_host(&listen_addr)
        .await
        .with_context(|| format!("failed to resolve {}", listen_addr))?
        .next()
        .with_context(|| format!("no address for {}", listen_addr))?;

    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    socket
        .bind(addr)
        .with_context(|| format!("failed to bind {}", addr))?;

    let listener = socket.listen(cfg.backlog.max(MIN_BACKLOG))?;
    Ok(listener)
}

/// Accept loop. Each connection runs on its own task; nothing flows back here.
pub async fn serve(
    listener: TcpListener,
    handler: Arc<RequestHandler>,
    limits: FrameLimits,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::warn!(error = %e, "accept failed");
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        tracing::debug!(%peer, "accepted connection");

        let handler = handler.clone();
        let span = tracing::info_span!("conn", %peer);
        tokio::spawn(
            async move {
                let conn = Connection::new(socket, handler, limits);
                match conn.run().await {
                    Ok(outcome) => {
                        tracing::debug!(
                            status = ?outcome.status,
                            bytes = outcome.bytes_written,
                            "connection closed"
                        );
                    }
                    Err(e) => {
                        tracing::warn!("Connection error from {}: {}", peer, e);
                    }
                }
            }
            .instrument(span),
        );
    }
}
