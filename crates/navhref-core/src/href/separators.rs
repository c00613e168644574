//! Scheme prefix detection and repeated-separator repair.

/// Byte length of a leading `scheme://`, if the string has one.
pub fn scheme_prefix_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if !bytes.first()?.is_ascii_alphabetic() {
        return None;
    }
    let end = bytes
        .iter()
        .position(|&b| !(b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')))?;
    s[end..].starts_with("://").then_some(end + 3)
}

/// True if the part before the first `?` contains `//` or `\`.
pub fn has_repeated_separators(s: &str) -> bool {
    let path = s.split('?').next().unwrap_or(s);
    path.contains("//") || path.contains('\\')
}

/// Turns backslashes into `/` and collapses runs of `/` in the part before
/// the first `?`. The search part is kept verbatim; an empty one is dropped.
pub fn normalize_repeated_slashes(s: &str) -> String {
    let (path, search) = match s.split_once('?') {
        Some((p, rest)) => (p, Some(rest)),
        None => (s, None),
    };

    let mut out = String::with_capacity(s.len());
    let mut prev_slash = false;
    for c in path.chars() {
        let c = if c == '\\' { '/' } else { c };
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(c);
    }

    if let Some(search) = search.filter(|r| !r.is_empty() && !r.starts_with('?')) {
        out.push('?');
        out.push_str(search);
    }
    out
}

/// Repairs `href` if its scheme-free path part has repeated separators.
///
/// Returns `None` when no repair is needed. The scheme prefix, if any, is
/// re-attached unchanged.
pub fn repair_separators(href: &str) -> Option<String> {
    let prefix_len = scheme_prefix_len(href).unwrap_or(0);
    let (prefix, rest) = href.split_at(prefix_len);
    if !has_repeated_separators(rest) {
        return None;
    }
    Some(format!("{prefix}{}", normalize_repeated_slashes(rest)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_prefix() {
        assert_eq!(scheme_prefix_len("https://example.com/x"), Some(8));
        assert_eq!(scheme_prefix_len("git+ssh://host"), Some(10));
        assert_eq!(scheme_prefix_len("mailto:a@b.c"), None);
        assert_eq!(scheme_prefix_len("/path"), None);
        assert_eq!(scheme_prefix_len("1http://x"), None);
        assert_eq!(scheme_prefix_len(""), None);
    }

    #[test]
    fn detection_ignores_search() {
        assert!(has_repeated_separators("/a//b"));
        assert!(has_repeated_separators("/a\\b"));
        assert!(!has_repeated_separators("/a/b?next=//x"));
        assert!(!has_repeated_separators("/a/b"));
    }

    #[test]
    fn collapses_runs_and_backslashes() {
        assert_eq!(normalize_repeated_slashes("//evil.com\\path"), "/evil.com/path");
        assert_eq!(normalize_repeated_slashes("/a///b\\\\c"), "/a/b/c");
        assert_eq!(normalize_repeated_slashes("/a//b?x=//y"), "/a/b?x=//y");
        assert_eq!(normalize_repeated_slashes("/a//b?"), "/a/b");
    }

    #[test]
    fn repair_keeps_scheme() {
        assert_eq!(
            repair_separators("https://example.com//x").as_deref(),
            Some("https://example.com/x")
        );
        assert_eq!(repair_separators("https://example.com/x"), None);
        assert_eq!(repair_separators("/fine?q=a//b"), None);
    }
}
