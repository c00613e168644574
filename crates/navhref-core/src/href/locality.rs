//! Decide whether an href is one the router can navigate to itself.

use url::Url;

/// True if `s` starts with a URL scheme (`letter *(letter / digit / + / - / .) :`).
pub fn is_absolute_url(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() => {}
        _ => return false,
    }
    bytes
        .iter()
        .find(|&&b| !(b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')))
        .is_some_and(|&b| b == b':')
}

/// True if `path` is `base_path` or lies under it. An empty base path
/// accepts every rooted path.
pub fn has_base_path(path: &str, base_path: &str) -> bool {
    path == base_path
        || path
            .strip_prefix(base_path)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// True if the router owns `url`.
///
/// Relative URLs are always local. Absolute URLs are local only when they
/// share `origin` and sit under `base_path`; with no origin, every absolute
/// URL is foreign.
pub fn is_local_url(url: &str, origin: Option<&Url>, base_path: &str) -> bool {
    if !is_absolute_url(url) {
        return true;
    }
    let Some(origin) = origin else {
        return false;
    };
    match origin.join(url) {
        Ok(resolved) => {
            resolved.origin() == origin.origin() && has_base_path(resolved.path(), base_path)
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Url {
        Url::parse("http://localhost:3000").unwrap()
    }

    #[test]
    fn absolute_detection() {
        assert!(is_absolute_url("https://example.com"));
        assert!(is_absolute_url("mailto:x@y.z"));
        assert!(!is_absolute_url("/about"));
        assert!(!is_absolute_url("//cdn.example.com/x"));
        assert!(!is_absolute_url("#top"));
        assert!(!is_absolute_url("a/b:c"));
    }

    #[test]
    fn relative_is_local() {
        assert!(is_local_url("/about", None, ""));
        assert!(is_local_url("?page=2", None, ""));
        assert!(is_local_url("#top", Some(&origin()), "/docs"));
    }

    #[test]
    fn absolute_needs_same_origin() {
        let o = origin();
        assert!(is_local_url("http://localhost:3000/about", Some(&o), ""));
        assert!(!is_local_url("https://localhost:3000/about", Some(&o), ""));
        assert!(!is_local_url("https://example.com/x", Some(&o), ""));
        assert!(!is_local_url("mailto:x@y.z", Some(&o), ""));
        assert!(!is_local_url("http://localhost:3000/about", None, ""));
    }

    #[test]
    fn absolute_needs_base_path() {
        let o = origin();
        assert!(is_local_url("http://localhost:3000/docs", Some(&o), "/docs"));
        assert!(is_local_url("http://localhost:3000/docs/intro", Some(&o), "/docs"));
        assert!(!is_local_url("http://localhost:3000/docsx", Some(&o), "/docs"));
        assert!(!is_local_url("http://localhost:3000/blog", Some(&o), "/docs"));
    }
}
