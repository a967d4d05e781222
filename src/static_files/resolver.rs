//! URL path to filesystem path resolution, sandboxed to the document root.
//!
//! Resolution is purely lexical: `.` and `..` are collapsed without consulting
//! the filesystem, and the result must stay at or below the root.

use percent_encoding::percent_decode_str;
use std::path::{Component, Path, PathBuf};

/// Maps a raw request target to a path inside `doc_root`.
///
/// `doc_root` must already be absolute and normalized (see [`normalize`]).
/// Returns `None` when the target would land outside the root.
///
/// ```
/// # use std::path::Path;
/// # use statica::static_files::resolver::resolve;
/// let root = Path::new("/srv/www");
/// assert_eq!(resolve(root, "/"), Some("/srv/www/index.html".into()));
/// assert_eq!(resolve(root, "/a/../b.css?v=1"), Some("/srv/www/b.css".into()));
/// assert_eq!(resolve(root, "/%2e%2e/etc/passwd"), None);
/// ```
pub fn resolve(doc_root: &Path, url_path: &str) -> Option<PathBuf> {
    let path = strip_query_and_fragment(url_path);
    let decoded = percent_decode_str(path).decode_utf8_lossy();

    let path: &str = if decoded == "/" { "/index.html" } else { &decoded };
    let rel = path.strip_prefix('/').unwrap_or(path);

    let candidate = normalize(&doc_root.join(rel));
    if candidate.starts_with(doc_root) {
        Some(candidate)
    } else {
        None
    }
}

/// Lexically collapses `.` and `..` components.
///
/// `..` at the filesystem root stays at the root, matching POSIX semantics.
/// A relative input stays relative; leading `..` components that cannot be
/// popped are kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(p) => out.push(p.as_os_str()),
            Component::RootDir => out.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            Component::Normal(name) => out.push(name),
        }
    }

    out
}

fn strip_query_and_fragment(url_path: &str) -> &str {
    let path = url_path.split('?').next().unwrap_or(url_path);
    path.split('#').next().unwrap_or(path)
}
