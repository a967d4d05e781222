use crate::http::error::RequestError;
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode, http_date};
use crate::static_files::{StaticFile, StaticFiles};

pub const BAD_REQUEST_BODY: &[u8] = b"Bad Request\n";
pub const METHOD_NOT_ALLOWED_BODY: &[u8] = b"Method Not Allowed\n";
pub const NOT_FOUND_BODY: &[u8] = b"File Not Found.\n";

/// Turns parsed requests (or request failures) into responses.
///
/// Shared by every connection behind an `Arc`; holds only read-only state.
#[derive(Debug, Clone)]
pub struct RequestHandler {
    files: StaticFiles,
    server_name: String,
}

impl RequestHandler {
    pub fn new(files: StaticFiles, server_name: impl Into<String>) -> Self {
        Self {
            files,
            server_name: server_name.into(),
        }
    }

    pub fn files(&self) -> &StaticFiles {
        &self.files
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    /// Method check, then resolve and read the target.
    pub async fn handle(&self, req: &Request) -> Response {
        match self.serve(req).await {
            Ok(file) => {
                tracing::debug!(file = %file.path.display(), "serving file");
                self.file_response(StatusCode::Ok, file)
            }
            Err(e) => self.error_response(&e).await,
        }
    }

    async fn serve(&self, req: &Request) -> Result<StaticFile, RequestError> {
        if !req.is_get() {
            return Err(RequestError::UnsupportedMethod(req.method.to_string()));
        }
        self.files.lookup(&req.path).await
    }

    /// Response for a request that could not be served.
    pub async fn error_response(&self, err: &RequestError) -> Response {
        match err {
            RequestError::Malformed(_) => self.text_response(err.status(), BAD_REQUEST_BODY),
            RequestError::UnsupportedMethod(_) => self
                .base(err.status())
                .header("Allow", "GET")
                .header("Content-Type", "text/plain")
                .body(METHOD_NOT_ALLOWED_BODY.to_vec())
                .build(),
            RequestError::PathTraversalRejected | RequestError::NotFound => self.not_found().await,
        }
    }

    /// 404 with the custom page when present, plain text otherwise.
    pub async fn not_found(&self) -> Response {
        match self.files.not_found_page().await {
            Some(page) => self.file_response(StatusCode::NotFound, page),
            None => self.text_response(StatusCode::NotFound, NOT_FOUND_BODY),
        }
    }

    fn file_response(&self, status: StatusCode, file: StaticFile) -> Response {
        self.base(status)
            .header("Content-Type", file.content_type)
            .body(file.body)
            .build()
    }

    fn text_response(&self, status: StatusCode, body: &[u8]) -> Response {
        self.base(status)
            .header("Content-Type", "text/plain")
            .body(body.to_vec())
            .build()
    }

    fn base(&self, status: StatusCode) -> ResponseBuilder {
        ResponseBuilder::new(status)
            .header("Date", http_date())
            .header("Server", self.server_name.as_str())
    }
}
