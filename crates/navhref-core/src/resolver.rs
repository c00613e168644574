//! Inputs and outputs of href resolution.
//!
//! Router state is always passed in explicitly; the resolver never reads
//! ambient location state.

use serde::Serialize;
use url::Url;

use crate::href::TrailingSlash;

/// Snapshot of the router's current location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouterState {
    /// Matched route pattern, e.g. `/posts/[id]`.
    pub pathname: String,
    /// Browser-visible path, e.g. `/posts/5?tab=comments`.
    pub as_path: String,
}

impl RouterState {
    pub fn new(pathname: impl Into<String>, as_path: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            as_path: as_path.into(),
        }
    }
}

/// Whether an interpolated as-path is wanted alongside the href.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolveMode {
    #[default]
    HrefOnly,
    WithAs,
}

/// Resolution result.
///
/// `as_path` is `None` in [`ResolveMode::HrefOnly`] and whenever the input was
/// returned unchanged (foreign URL or failed resolution). When present it is
/// never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedHref {
    pub href: String,
    #[serde(rename = "as", skip_serializing_if = "Option::is_none")]
    pub as_path: Option<String>,
}

impl ResolvedHref {
    pub(crate) fn unresolved(href: String) -> Self {
        Self {
            href,
            as_path: None,
        }
    }

    /// The as-path when present, else the href.
    pub fn as_or_href(&self) -> &str {
        self.as_path.as_deref().unwrap_or(&self.href)
    }
}

/// Site settings the resolver needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Location origin used to decide whether absolute URLs are local.
    pub origin: Option<Url>,
    /// Site base path, `""` for none.
    pub base_path: String,
    pub trailing_slash: TrailingSlash,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_or_href_prefers_as_path() {
        let with_as = ResolvedHref {
            href: "/posts/[id]?id=1".into(),
            as_path: Some("/posts/1".into()),
        };
        assert_eq!(with_as.as_or_href(), "/posts/1");
        assert_eq!(ResolvedHref::unresolved("/x".into()).as_or_href(), "/x");
    }

    #[test]
    fn serializes_as_key_only_when_present() {
        let only = ResolvedHref::unresolved("https://example.com/".into());
        assert_eq!(
            serde_json::to_string(&only).unwrap(),
            r#"{"href":"https://example.com/"}"#
        );
        let pair = ResolvedHref {
            href: "/a".into(),
            as_path: Some("/a".into()),
        };
        assert_eq!(
            serde_json::to_string(&pair).unwrap(),
            r#"{"href":"/a","as":"/a"}"#
        );
    }
}
