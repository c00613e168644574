//! Dynamic route patterns: detection, matching and interpolation.
//!
//! Placeholders take a whole path segment: `[id]`, `[...slug]` (catch-all)
//! or `[[...slug]]` (optional catch-all).

mod interpolate;
mod pattern;

pub use interpolate::{interpolate_as, Interpolation};
pub use pattern::{RoutePattern, Segment};

/// True if `path` contains at least one placeholder segment.
pub fn is_dynamic_route(path: &str) -> bool {
    RoutePattern::parse(path).is_dynamic()
}
