use statica::http::error::RequestError;
use statica::http::parser::{ParseError, find_headers_end, parse_http_request};
use statica::http::request::{Method, RequestBuilder};
use statica::http::response::StatusCode;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.0\r\nHost: example.com\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.0");
    assert_eq!(parsed.headers.get("host").unwrap(), "example.com");
}

#[test]
fn test_parse_multiple_headers() {
    let req = b"GET /path HTTP/1.0\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.len(), 3);
    assert_eq!(parsed.header("User-Agent"), Some("test-client"));
    assert_eq!(parsed.header("accept"), Some("*/*"));
}

#[test]
fn test_parse_header_names_lowercased_and_values_trimmed() {
    let req = b"GET / HTTP/1.0\r\n  Content-Type  :   text/html  \r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.get("content-type").unwrap(), "text/html");
    assert!(!parsed.headers.contains_key("Content-Type"));
}

#[test]
fn test_parse_duplicate_header_last_wins() {
    let req = b"GET / HTTP/1.0\r\nX-Token: first\r\nx-token: second\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("X-Token"), Some("second"));
}

#[test]
fn test_parse_value_keeps_later_colons() {
    let req = b"GET / HTTP/1.0\r\nHost: localhost:8080\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("host"), Some("localhost:8080"));
}

#[test]
fn test_parse_line_without_colon_is_ignored() {
    let req = b"GET / HTTP/1.0\r\nBrokenHeader\r\nHost: a\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.len(), 1);
    assert_eq!(parsed.header("host"), Some("a"));
}

#[test]
fn test_parse_request_with_path_and_query_string() {
    let req = b"GET /search?q=rust#top HTTP/1.0\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/search?q=rust#top");
}

#[test]
fn test_parse_unknown_method_is_not_malformed() {
    let req = b"BREW /pot HTTP/1.0\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::Other("BREW".to_string()));
    assert!(!parsed.is_get());
}

#[test]
fn test_parse_post_ignores_body() {
    let req = b"POST /api HTTP/1.0\r\nContent-Length: 5\r\n\r\nhello";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::POST);
    assert_eq!(parsed.header("content-length"), Some("5"));
}

#[test]
fn test_parse_various_http_methods() {
    let methods = vec![
        ("GET", Method::GET),
        ("POST", Method::POST),
        ("PUT", Method::PUT),
        ("DELETE", Method::DELETE),
        ("HEAD", Method::HEAD),
        ("OPTIONS", Method::OPTIONS),
    ];

    for (method_str, expected_method) in methods {
        let req = format!("{} / HTTP/1.0\r\n\r\n", method_str);
        let parsed = parse_http_request(req.as_bytes()).unwrap();
        assert_eq!(parsed.method, expected_method);
        assert_eq!(parsed.method.as_str(), method_str);
    }
}

#[test]
fn test_parse_missing_terminator_is_incomplete() {
    let req = b"GET / HTTP/1.0\r\nHost: example.com\r\n";
    let result = parse_http_request(req);

    assert_eq!(result.unwrap_err(), ParseError::Incomplete);
}

#[test]
fn test_parse_empty_request_line() {
    let result = parse_http_request(b"\r\n\r\n");

    assert_eq!(result.unwrap_err(), ParseError::MissingRequestLine);
}

#[test]
fn test_parse_request_line_token_counts() {
    let cases: Vec<(&[u8], usize)> = vec![
        (b"GET /\r\n\r\n", 2),
        (b"GET / HTTP/1.0 extra\r\n\r\n", 4),
        (b"GET  / HTTP/1.0\r\n\r\n", 4),
        (b"GARBAGE\r\n\r\n", 1),
    ];

    for (raw, tokens) in cases {
        let result = parse_http_request(raw);
        assert_eq!(result.unwrap_err(), ParseError::InvalidRequestLine { tokens });
    }
}

#[test]
fn test_parse_latin1_bytes_never_fail() {
    let req = b"GET /caf\xe9 HTTP/1.0\r\nX-Name: \xff\xfe\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/caf\u{e9}");
    assert_eq!(parsed.header("x-name"), Some("\u{ff}\u{fe}"));
}

#[test]
fn test_find_headers_end() {
    assert_eq!(find_headers_end(b"GET / HTTP/1.0\r\n\r\n"), Some(14));
    assert_eq!(find_headers_end(b"GET / HTTP/1.0\r\n"), None);
    assert_eq!(find_headers_end(b""), None);
}

#[test]
fn test_request_builder_normalizes_headers() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .path("/index.html")
        .header("Content-Type", " text/plain ")
        .build()
        .unwrap();

    assert_eq!(req.version, "HTTP/1.0");
    assert_eq!(req.headers.get("content-type").unwrap(), "text/plain");
    assert_eq!(req.header("CONTENT-TYPE"), Some("text/plain"));
}

#[test]
fn test_request_builder_requires_method_and_path() {
    assert!(RequestBuilder::new().path("/").build().is_err());
    assert!(RequestBuilder::new().method(Method::GET).build().is_err());
}

#[test]
fn test_request_error_status_mapping() {
    assert_eq!(
        RequestError::from(ParseError::Incomplete).status(),
        StatusCode::BadRequest
    );
    assert_eq!(
        RequestError::UnsupportedMethod("POST".to_string()).status(),
        StatusCode::MethodNotAllowed
    );
    assert_eq!(RequestError::PathTraversalRejected.status(), StatusCode::NotFound);
    assert_eq!(RequestError::NotFound.status(), StatusCode::NotFound);
}
