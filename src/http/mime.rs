//! MIME type detection based on file extensions.

use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_MIME: &str = "application/octet-stream";

/// Extensions whose type is pinned regardless of what the mime database says.
const OVERRIDES: &[(&str, &str)] = &[
    ("css", "text/css"),
    ("js", "application/javascript"),
    ("svg", "image/svg+xml"),
    ("webp", "image/webp"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("txt", "text/plain"),
];

/// Extension to content-type table.
///
/// Built once at startup and only read afterwards, so a single instance can be
/// shared by every connection without locking.
#[derive(Debug, Clone)]
pub struct MimeTypes {
    overrides: HashMap<String, String>,
}

impl MimeTypes {
    pub fn new() -> Self {
        let overrides = OVERRIDES
            .iter()
            .map(|(ext, mime)| (ext.to_string(), mime.to_string()))
            .collect();
        Self { overrides }
    }

    /// Builds a table with extra entries on top of the built-in overrides.
    pub fn with_overrides<I, K, V>(extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = Self::new();
        for (ext, mime) in extra {
            let ext = ext.as_ref().trim_start_matches('.').to_ascii_lowercase();
            table.overrides.insert(ext, mime.into());
        }
        table
    }

    /// Content type for `path`, falling back to `application/octet-stream`.
    pub fn guess(&self, path: &Path) -> String {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return DEFAULT_MIME.to_string();
        };
        let ext = ext.to_ascii_lowercase();

        if let Some(mime) = self.overrides.get(&ext) {
            return mime.clone();
        }

        mime_guess::from_ext(&ext)
            .first_raw()
            .unwrap_or(DEFAULT_MIME)
            .to_string()
    }
}

impl Default for MimeTypes {
    fn default() -> Self {
        Self::new()
    }
}
