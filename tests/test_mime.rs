use statica::http::mime::{DEFAULT_MIME, MimeTypes};
use std::path::Path;

#[test]
fn test_pinned_types() {
    let mime = MimeTypes::new();

    assert_eq!(mime.guess(Path::new("site.css")), "text/css");
    assert_eq!(mime.guess(Path::new("app.js")), "application/javascript");
    assert_eq!(mime.guess(Path::new("logo.svg")), "image/svg+xml");
    assert_eq!(mime.guess(Path::new("photo.webp")), "image/webp");
    assert_eq!(mime.guess(Path::new("index.html")), "text/html");
}

#[test]
fn test_standard_types_from_database() {
    let mime = MimeTypes::new();

    assert_eq!(mime.guess(Path::new("image.png")), "image/png");
    assert_eq!(mime.guess(Path::new("image.jpg")), "image/jpeg");
    assert_eq!(mime.guess(Path::new("data.json")), "application/json");
    assert_eq!(mime.guess(Path::new("doc.pdf")), "application/pdf");
}

#[test]
fn test_extension_is_case_insensitive() {
    let mime = MimeTypes::new();

    assert_eq!(mime.guess(Path::new("STYLE.CSS")), "text/css");
    assert_eq!(mime.guess(Path::new("Photo.PNG")), "image/png");
}

#[test]
fn test_unknown_and_missing_extensions() {
    let mime = MimeTypes::new();

    assert_eq!(mime.guess(Path::new("blob.qqqzzz")), DEFAULT_MIME);
    assert_eq!(mime.guess(Path::new("Makefile")), DEFAULT_MIME);
}

#[test]
fn test_extra_overrides() {
    let mime = MimeTypes::with_overrides([(".md", "text/markdown"), ("PNG", "image/x-test")]);

    assert_eq!(mime.guess(Path::new("README.md")), "text/markdown");
    assert_eq!(mime.guess(Path::new("a.png")), "image/x-test");
    assert_eq!(mime.guess(Path::new("a.css")), "text/css");
}
