//! Route pattern parsing and matching.

use crate::url_model::{decode_uri_component, QueryValue, UrlQuery};

/// One `/`-separated piece of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, matched exactly.
    Static(String),
    /// `[name]`: exactly one non-empty segment.
    Dynamic(String),
    /// `[...name]`: one or more segments.
    CatchAll(String),
    /// `[[...name]]`: zero or more segments.
    OptionalCatchAll(String),
}

impl Segment {
    fn parse(raw: &str) -> Segment {
        if let Some(name) = raw
            .strip_prefix("[[...")
            .and_then(|s| s.strip_suffix("]]"))
            .filter(|n| is_param_name(n))
        {
            return Segment::OptionalCatchAll(name.to_string());
        }
        if let Some(inner) = raw.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            if let Some(name) = inner.strip_prefix("...").filter(|n| is_param_name(n)) {
                return Segment::CatchAll(name.to_string());
            }
            if is_param_name(inner) {
                return Segment::Dynamic(inner.to_string());
            }
        }
        Segment::Static(raw.to_string())
    }

    /// Param name, or `None` for static segments.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Static(_) => None,
            Segment::Dynamic(n) | Segment::CatchAll(n) | Segment::OptionalCatchAll(n) => Some(n),
        }
    }

    /// The literal placeholder text as written in the route.
    pub fn placeholder(&self) -> Option<String> {
        match self {
            Segment::Static(_) => None,
            Segment::Dynamic(n) => Some(format!("[{n}]")),
            Segment::CatchAll(n) => Some(format!("[...{n}]")),
            Segment::OptionalCatchAll(n) => Some(format!("[[...{n}]]")),
        }
    }
}

fn is_param_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(|c| c == '[' || c == ']')
}

/// Parsed route such as `/posts/[id]` or `/docs/[[...slug]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
}

/// Splits a path into its segments, ignoring the leading and one trailing `/`.
fn split_segments(path: &str) -> Vec<&str> {
    let body = path.strip_prefix('/').unwrap_or(path);
    let body = body.strip_suffix('/').unwrap_or(body);
    if body.is_empty() {
        Vec::new()
    } else {
        body.split('/').collect()
    }
}

impl RoutePattern {
    pub fn parse(route: &str) -> Self {
        Self {
            segments: split_segments(route).into_iter().map(Segment::parse).collect(),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True if any segment is a placeholder.
    pub fn is_dynamic(&self) -> bool {
        self.segments.iter().any(|s| s.param_name().is_some())
    }

    /// Placeholder names in route order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::param_name)
    }

    /// Extracts params from a concrete path, or `None` if it does not match.
    ///
    /// Values are percent-decoded; a segment that does not decode to UTF-8 is
    /// a mismatch. Catch-all values are lists; an absent optional catch-all
    /// sets no key.
    pub fn match_path(&self, path: &str) -> Option<UrlQuery> {
        if !path.starts_with('/') {
            return None;
        }
        let parts = split_segments(path);
        let mut rest = parts.as_slice();
        let mut params = UrlQuery::new();

        for segment in &self.segments {
            match segment {
                Segment::Static(text) => {
                    let (first, tail) = rest.split_first()?;
                    if *first != text.as_str() {
                        return None;
                    }
                    rest = tail;
                }
                Segment::Dynamic(name) => {
                    let (first, tail) = rest.split_first()?;
                    if first.is_empty() {
                        return None;
                    }
                    params.insert(name.as_str(), decode_uri_component(first)?);
                    rest = tail;
                }
                Segment::CatchAll(name) | Segment::OptionalCatchAll(name) => {
                    if rest.is_empty() {
                        if matches!(segment, Segment::CatchAll(_)) {
                            return None;
                        }
                        continue;
                    }
                    let values = rest
                        .iter()
                        .map(|p| decode_uri_component(p))
                        .collect::<Option<Vec<_>>>()?;
                    params.insert(name.as_str(), QueryValue::Multiple(values));
                    rest = &[];
                }
            }
        }

        rest.is_empty().then_some(params)
    }
}
