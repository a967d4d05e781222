use crate::http::request::{Method, Request};
use std::collections::HashMap;
use std::fmt;

const HEADERS_END: &[u8] = b"\r\n\r\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing before the end-of-headers marker
    MissingRequestLine,
    /// The header block never reached its terminating blank line
    Incomplete,
    /// The request line did not split into method, target and version
    InvalidRequestLine { tokens: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingRequestLine => write!(f, "missing request line"),
            ParseError::Incomplete => write!(f, "header block not terminated"),
            ParseError::InvalidRequestLine { tokens } => {
                write!(f, "request line has {} tokens, expected 3", tokens)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses a framed request head.
///
/// The head is everything before the first `CRLFCRLF`; anything after it is
/// ignored since no request body is ever read. Bytes are decoded as Latin-1,
/// so decoding itself cannot fail.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let head = latin1_decode(&buf[..headers_end]);

    let mut lines = head.split("\r\n");

    let request_line = lines
        .next()
        .filter(|line| !line.is_empty())
        .ok_or(ParseError::MissingRequestLine)?;

    let parts: Vec<&str> = request_line.split(' ').collect();
    let [method, path, version] = parts.as_slice() else {
        return Err(ParseError::InvalidRequestLine { tokens: parts.len() });
    };

    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        // Lines without a colon are not headers; skip them.
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        headers.insert(key.trim().to_lowercase(), value.trim().to_string());
    }

    Ok(Request {
        method: Method::from_token(method),
        path: path.to_string(),
        version: version.to_string(),
        headers,
    })
}

/// Position of the first `CRLFCRLF` in `buf`, if any.
pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(HEADERS_END.len())
        .position(|w| w == HEADERS_END)
}

fn latin1_decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
