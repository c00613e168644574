//! Site-wide trailing slash convention.

use serde::{Deserialize, Serialize};

/// How resolved paths end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingSlash {
    /// Strip a trailing `/` (the root stays `/`).
    #[default]
    Never,
    /// Add a trailing `/`, except after a file-like last segment.
    Always,
    /// Leave paths exactly as written.
    Manual,
}

fn remove_trailing_slash(path: &str) -> &str {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Last segment has an extension, e.g. `/feed.xml` or `/feed.xml/`.
fn looks_like_file(pathname: &str) -> bool {
    let trimmed = pathname.strip_suffix('/').unwrap_or(pathname);
    let last = trimmed.rsplit('/').next().unwrap_or(trimmed);
    last.char_indices()
        .any(|(i, c)| c == '.' && i + 1 < last.len())
}

/// Applies `policy` to the pathname of `path`, keeping any search and fragment.
/// Paths that do not start with `/` are returned unchanged.
pub fn normalize_path_trailing_slash(path: &str, policy: TrailingSlash) -> String {
    if !path.starts_with('/') || policy == TrailingSlash::Manual {
        return path.to_string();
    }
    let split = path.find(|c| c == '?' || c == '#').unwrap_or(path.len());
    let (pathname, suffix) = path.split_at(split);

    match policy {
        TrailingSlash::Always if looks_like_file(pathname) => {
            format!("{}{suffix}", remove_trailing_slash(pathname))
        }
        TrailingSlash::Always if pathname.ends_with('/') => path.to_string(),
        TrailingSlash::Always => format!("{pathname}/{suffix}"),
        _ => format!("{}{suffix}", remove_trailing_slash(pathname)),
    }
}
