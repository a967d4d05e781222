//! Request framing.
//!
//! Accumulates bytes from a connection until the end of the header block is
//! seen, the byte cap is reached, the peer closes, or a read stalls past the
//! per-read timeout. The framer never fails: whatever has been collected is
//! handed to the parser, which decides whether it is a valid request.

use bytes::BytesMut;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::time::timeout;

use crate::config::ServerConfig;

const HEADERS_END: &[u8] = b"\r\n\r\n";

/// Bounds applied while framing one request.
#[derive(Debug, Clone, Copy)]
pub struct FrameLimits {
    /// Deadline for each individual read
    pub read_timeout: Duration,
    /// Stop reading once the buffer holds at least this many bytes
    pub max_bytes: usize,
    /// Size of each read
    pub chunk_size: usize,
}

impl Default for FrameLimits {
    fn default() -> Self {
        Self {
            read_timeout: Duration::from_secs(2),
            max_bytes: 65536,
            chunk_size: 4096,
        }
    }
}

impl From<&ServerConfig> for FrameLimits {
    fn from(cfg: &ServerConfig) -> Self {
        Self {
            read_timeout: Duration::from_millis(cfg.read_timeout_ms),
            max_bytes: cfg.max_request_bytes,
            chunk_size: cfg.read_chunk_bytes.max(1),
        }
    }
}

/// Reads one request head off `stream`.
///
/// An empty result means the peer closed (or went silent) before sending
/// anything. Bytes after the end-of-headers marker may be included if they
/// arrived in the same read; the body is never read on purpose.
pub async fn frame<R>(stream: &mut R, limits: FrameLimits) -> BytesMut
where
    R: AsyncRead + Unpin,
{
    let mut buffer = BytesMut::with_capacity(limits.chunk_size);
    let mut chunk = vec![0u8; limits.chunk_size];

    while buffer.len() < limits.max_bytes {
        let n = match timeout(limits.read_timeout, stream.read(&mut chunk)).await {
            Ok(Ok(0)) => break,
            Ok(Ok(n)) => n,
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Ok(Err(e)) => {
                tracing::debug!(error = %e, "read failed while framing request");
                break;
            }
            Err(_) => {
                tracing::debug!(
                    received = buffer.len(),
                    "read timed out while framing request"
                );
                break;
            }
        };

        // The marker may straddle the previous chunk boundary.
        let search_from = buffer.len().saturating_sub(HEADERS_END.len() - 1);
        buffer.extend_from_slice(&chunk[..n]);

        if buffer[search_from..]
            .windows(HEADERS_END.len())
            .any(|w| w == HEADERS_END)
        {
            break;
        }
    }

    buffer
}
