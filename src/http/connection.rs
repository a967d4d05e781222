use bytes::BytesMut;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::http::error::RequestError;
use crate::http::framer::{FrameLimits, frame};
use crate::http::handler::RequestHandler;
use crate::http::parser::parse_http_request;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// One client connection, handling exactly one request.
///
/// The connection owns its stream. `run` consumes the connection, so the
/// stream is dropped (and the socket closed) exactly once on every path,
/// including errors and task cancellation.
pub struct Connection<S = TcpStream> {
    stream: S,
    handler: Arc<RequestHandler>,
    limits: FrameLimits,
    state: ConnectionState,
}

pub enum ConnectionState {
    Framing,
    Parsing(BytesMut),
    Dispatching(Request),
    Responding(ResponseWriter),
    Closed,
}

/// What happened on a connection, for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: Option<u16>,
    pub bytes_written: usize,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, handler: Arc<RequestHandler>, limits: FrameLimits) -> Self {
        Self {
            stream,
            handler,
            limits,
            state: ConnectionState::Framing,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<Outcome> {
        let mut outcome = Outcome {
            status: None,
            bytes_written: 0,
        };

        let result = self.drive(&mut outcome).await;

        // Flush the FIN; the socket itself closes when `self` drops.
        let _ = self.stream.shutdown().await;

        result.map(|_| outcome)
    }

    async fn drive(&mut self, outcome: &mut Outcome) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Framing => {
                    let raw = frame(&mut self.stream, self.limits).await;
                    if raw.is_empty() {
                        tracing::debug!("peer closed before sending a request");
                        self.state = ConnectionState::Closed;
                    } else {
                        self.state = ConnectionState::Parsing(raw);
                    }
                }

                ConnectionState::Parsing(raw) => match parse_http_request(&raw) {
                    Ok(req) => {
                        self.state = ConnectionState::Dispatching(req);
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, bytes = raw.len(), "malformed request");
                        let response = self
                            .handler
                            .error_response(&RequestError::Malformed(e))
                            .await;
                        self.respond(&response, "-", "-", outcome);
                    }
                },

                ConnectionState::Dispatching(req) => {
                    let response = self.handler.handle(&req).await;
                    self.respond(&response, req.method.as_str(), &req.path, outcome);
                }

                ConnectionState::Responding(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    outcome.bytes_written = writer.len();
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    fn respond(&mut self, response: &Response, method: &str, path: &str, outcome: &mut Outcome) {
        let status = response.status.as_u16();
        tracing::info!(
            method = %method,
            path = %path,
            status = status,
            bytes = response.body.len(),
            "response"
        );
        outcome.status = Some(status);
        self.state = ConnectionState::Responding(ResponseWriter::new(response));
    }
}
