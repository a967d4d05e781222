//! HTTP/1.0 protocol implementation.
//!
//! One request per connection, GET only, no request bodies, and every
//! response carries `Connection: close`.
//!
//! # Architecture
//!
//! - **`framer`**: Reads raw bytes until the header block is complete or a limit is hit
//! - **`parser`**: Parses the framed bytes into a [`request::Request`]
//! - **`request`**: HTTP request representation
//! - **`handler`**: Chooses the response for a request (200/400/404/405)
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//! - **`error`**: Request failure taxonomy and its status mapping
//! - **`connection`**: The per-connection state machine tying the above together
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Framing   │ ← Read until CRLFCRLF, cap, EOF or timeout
//!        └──────┬──────┘
//!               ├─ nothing received → Closed
//!               ▼
//!        ┌─────────────┐
//!        │   Parsing   │ ── malformed ──┐
//!        └──────┬──────┘                │
//!               ▼                       │
//!        ┌──────────────────┐           │
//!        │   Dispatching    │ ← method check, resolve, read
//!        └──────┬───────────┘           │
//!               ▼                       ▼
//!        ┌──────────────────────────────────┐
//!        │            Responding            │ ← 200 / 400 / 404 / 405
//!        └──────┬───────────────────────────┘
//!               ▼
//!        ┌─────────────┐
//!        │   Closed    │
//!        └─────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use statica::http::connection::Connection;
//! use statica::http::framer::FrameLimits;
//! use tokio::net::TcpListener;
//!
//! let listener = TcpListener::bind("127.0.0.1:8080").await?;
//! loop {
//!     let (socket, _addr) = listener.accept().await?;
//!     let handler = handler.clone();
//!     tokio::spawn(async move {
//!         let conn = Connection::new(socket, handler, FrameLimits::default());
//!         if let Err(e) = conn.run().await {
//!             eprintln!("Connection error: {}", e);
//!         }
//!     });
//! }
//! ```

pub mod connection;
pub mod error;
pub mod framer;
pub mod handler;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
