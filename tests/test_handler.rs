use statica::http::error::RequestError;
use statica::http::handler::{NOT_FOUND_BODY, RequestHandler};
use statica::http::mime::MimeTypes;
use statica::http::parser::ParseError;
use statica::http::request::{Method, RequestBuilder};
use statica::http::response::StatusCode;
use statica::static_files::StaticFiles;

fn handler(root: &std::path::Path) -> RequestHandler {
    RequestHandler::new(StaticFiles::new(root, MimeTypes::new()).unwrap(), "unit/1")
}

#[tokio::test]
async fn test_handle_get_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("app.js"), b"let x = 1;").unwrap();

    let req = RequestBuilder::new()
        .method(Method::GET)
        .path("/app.js")
        .build()
        .unwrap();
    let resp = handler(dir.path()).handle(&req).await;

    assert_eq!(resp.status, StatusCode::Ok);
    assert_eq!(resp.header("Content-Type"), Some("application/javascript"));
    assert_eq!(resp.header("Server"), Some("unit/1"));
    assert_eq!(resp.body, b"let x = 1;");
}

#[tokio::test]
async fn test_handle_non_get_methods() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), b"x").unwrap();
    let handler = handler(dir.path());

    for method in [Method::POST, Method::HEAD, Method::Other("BREW".to_string())] {
        let req = RequestBuilder::new().method(method).path("/").build().unwrap();
        let resp = handler.handle(&req).await;

        assert_eq!(resp.status, StatusCode::MethodNotAllowed);
        assert_eq!(resp.header("Allow"), Some("GET"));
    }
}

#[tokio::test]
async fn test_unreadable_target_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let handler = handler(dir.path());

    let req = RequestBuilder::new()
        .method(Method::GET)
        .path("/bad%00name")
        .build()
        .unwrap();
    let resp = handler.handle(&req).await;

    assert_eq!(resp.status, StatusCode::NotFound);
    assert_eq!(resp.body, NOT_FOUND_BODY);
}

#[tokio::test]
async fn test_error_response_for_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let resp = handler(dir.path())
        .error_response(&RequestError::Malformed(ParseError::MissingRequestLine))
        .await;

    assert_eq!(resp.status, StatusCode::BadRequest);
    assert_eq!(resp.header("Content-Type"), Some("text/plain"));
    assert_eq!(resp.header("Content-Length"), Some("12"));
}

#[tokio::test]
async fn test_lookup_reports_traversal() {
    let dir = tempfile::tempdir().unwrap();
    let files = StaticFiles::new(dir.path(), MimeTypes::new()).unwrap();

    assert_eq!(
        files.lookup("/../../etc/passwd").await.unwrap_err(),
        RequestError::PathTraversalRejected
    );
    assert_eq!(files.lookup("/absent").await.unwrap_err(), RequestError::NotFound);
}
