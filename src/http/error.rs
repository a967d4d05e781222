use std::fmt;

use crate::http::parser::ParseError;
use crate::http::response::StatusCode;

/// Why a request could not be answered with the file it asked for.
///
/// Every variant maps to a 4xx status; there is no server-error category.
/// A peer that closes before sending anything is not represented here: the
/// connection just closes without a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Unparseable request head
    Malformed(ParseError),
    /// Any method other than GET
    UnsupportedMethod(String),
    /// Target resolves outside the document root
    PathTraversalRejected,
    /// Missing file, directory without index, or unreadable file
    NotFound,
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::Malformed(_) => StatusCode::BadRequest,
            RequestError::UnsupportedMethod(_) => StatusCode::MethodNotAllowed,
            RequestError::PathTraversalRejected | RequestError::NotFound => StatusCode::NotFound,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Malformed(e) => write!(f, "malformed request: {}", e),
            RequestError::UnsupportedMethod(m) => write!(f, "method {} not allowed", m),
            RequestError::PathTraversalRejected => write!(f, "path escapes document root"),
            RequestError::NotFound => write!(f, "not found"),
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestError::Malformed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for RequestError {
    fn from(e: ParseError) -> Self {
        RequestError::Malformed(e)
    }
}
