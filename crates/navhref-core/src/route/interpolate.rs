//! Fill route placeholders with concrete param values.

use crate::url_model::{encode_uri_component, QueryValue, UrlQuery};

use super::pattern::{RoutePattern, Segment};

/// Outcome of [`interpolate_as`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpolation {
    /// Concrete path, or `None` when a required param had no value.
    pub result: Option<String>,
    /// Every param name of the route, in route order. Callers drop these keys
    /// from the query once they have been moved into the path.
    pub params: Vec<String>,
}

fn replacement(segment: &Segment, value: Option<&QueryValue>) -> String {
    let repeat = matches!(segment, Segment::CatchAll(_) | Segment::OptionalCatchAll(_));
    match (repeat, value) {
        (_, None) => String::new(),
        (true, Some(v)) => v
            .values()
            .into_iter()
            .map(encode_uri_component)
            .collect::<Vec<_>>()
            .join("/"),
        (false, Some(QueryValue::Single(s))) => encode_uri_component(s),
        (false, Some(QueryValue::Multiple(v))) => encode_uri_component(&v.join(",")),
    }
}

/// Substitutes the placeholders of `route` with values taken from
/// `as_pathname` (when it differs from `route` and matches it) or from `query`.
///
/// - `interpolate_as("/posts/[id]", "/posts/[id]", {id: "5"})` → `/posts/5`
/// - `interpolate_as("/docs/[...slug]", "/docs/a/b", {})` → `/docs/a/b`
/// - `interpolate_as("/docs/[[...slug]]", "/docs/[[...slug]]", {})` → `/docs`
pub fn interpolate_as(route: &str, as_pathname: &str, query: &UrlQuery) -> Interpolation {
    let pattern = RoutePattern::parse(route);
    let matched = if as_pathname != route {
        pattern.match_path(as_pathname)
    } else {
        None
    };
    let source = matched.as_ref().unwrap_or(query);
    let params: Vec<String> = pattern.param_names().map(String::from).collect();

    let mut interpolated = route.to_string();
    for segment in pattern.segments() {
        let (Some(name), Some(placeholder)) = (segment.param_name(), segment.placeholder()) else {
            continue;
        };
        let optional = matches!(segment, Segment::OptionalCatchAll(_));
        let value = source.get(name);
        if value.is_none() && !optional {
            return Interpolation {
                result: None,
                params,
            };
        }

        let blank = value.map_or(true, QueryValue::is_blank);
        let target = if optional && blank {
            format!("/{placeholder}")
        } else {
            placeholder
        };
        interpolated = interpolated.replacen(&target, &replacement(segment, value), 1);
        if interpolated.is_empty() {
            interpolated.push('/');
        }
    }

    Interpolation {
        result: Some(interpolated),
        params,
    }
}
