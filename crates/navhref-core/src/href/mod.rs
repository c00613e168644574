//! Router-relative href resolution.
//!
//! [`HrefResolver`] turns a navigation target into the canonical href the
//! router pushes into history, and optionally an as-path with dynamic route
//! params filled in. Resolution never fails from the caller's point of view:
//! foreign URLs and anything that cannot be resolved come back unchanged.

mod error;
mod locality;
mod separators;
mod trailing_slash;

pub use error::ResolveError;
pub use locality::{has_base_path, is_absolute_url, is_local_url};
pub use separators::{
    has_repeated_separators, normalize_repeated_slashes, repair_separators, scheme_prefix_len,
};
pub use trailing_slash::{normalize_path_trailing_slash, TrailingSlash};

use url::{Position, Url};

use crate::resolver::{ResolveMode, ResolvedHref, ResolverOptions, RouterState};
use crate::route::{interpolate_as, is_dynamic_route, Interpolation};
use crate::url_model::{format_url, NavigationTarget, UrlObject, UrlQuery};

/// Authority used only to make relative URL algebra possible. It never
/// appears in a relative result.
const PLACEHOLDER_ORIGIN: &str = "http://n";

/// Resolves navigation targets against router state.
#[derive(Debug, Clone, Default)]
pub struct HrefResolver {
    options: ResolverOptions,
}

impl HrefResolver {
    pub fn new(options: ResolverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Canonical href only.
    pub fn resolve_href(&self, state: &RouterState, target: impl Into<NavigationTarget>) -> String {
        self.resolve(state, target, ResolveMode::HrefOnly).href
    }

    /// Canonical href plus as-path.
    pub fn resolve_with_as(
        &self,
        state: &RouterState,
        target: impl Into<NavigationTarget>,
    ) -> ResolvedHref {
        self.resolve(state, target, ResolveMode::WithAs)
    }

    /// Resolves `target` relative to `state`.
    ///
    /// Repeated `//` or `\` in the path are collapsed (with an error-level
    /// diagnostic) before anything else looks at the href. Targets the router
    /// does not own are returned as-is.
    pub fn resolve(
        &self,
        state: &RouterState,
        target: impl Into<NavigationTarget>,
        mode: ResolveMode,
    ) -> ResolvedHref {
        let mut href = target.into().to_href_string();

        if let Some(repaired) = repair_separators(&href) {
            tracing::error!(
                href = %href,
                page = %state.pathname,
                "invalid href passed to router: repeated forward-slashes (//) or backslashes (\\) are not valid in the href"
            );
            href = repaired;
        }

        if !is_local_url(&href, self.options.origin.as_ref(), &self.options.base_path) {
            tracing::trace!(href = %href, "href is not local; leaving unchanged");
            return ResolvedHref::unresolved(href);
        }

        match self.resolve_local(state, &href, mode) {
            Ok(resolved) => resolved,
            Err(err) => {
                tracing::debug!(href = %href, error = %err, "href resolution failed; using input");
                ResolvedHref::unresolved(href)
            }
        }
    }

    fn resolve_local(
        &self,
        state: &RouterState,
        href: &str,
        mode: ResolveMode,
    ) -> Result<ResolvedHref, ResolveError> {
        let base = resolution_base(state, href)?;
        let mut resolved = base.join(href).map_err(ResolveError::Join)?;

        let path = normalize_path_trailing_slash(resolved.path(), self.options.trailing_slash);
        resolved.set_path(&path);

        let href = if resolved.origin() == base.origin() {
            resolved[Position::BeforePath..].to_string()
        } else {
            resolved.to_string()
        };

        let as_path = match mode {
            ResolveMode::HrefOnly => None,
            ResolveMode::WithAs => Some(
                interpolated_as_path(&resolved)
                    .filter(|a| !a.is_empty())
                    .unwrap_or_else(|| href.clone()),
            ),
        };

        Ok(ResolvedHref { href, as_path })
    }
}

/// Base URL for resolving `href`: the displayed path for fragment-only
/// targets, the route pattern otherwise. Falls back to the root.
fn resolution_base(state: &RouterState, href: &str) -> Result<Url, ResolveError> {
    let placeholder = Url::parse(PLACEHOLDER_ORIGIN).map_err(ResolveError::Base)?;
    let relative = if href.starts_with('#') {
        &state.as_path
    } else {
        &state.pathname
    };
    match placeholder.join(relative) {
        Ok(base) => Ok(base),
        Err(err) => {
            tracing::debug!(base = %relative, error = %err, "invalid router path; basing on /");
            placeholder.join("/").map_err(ResolveError::Base)
        }
    }
}

/// As-path for a resolved dynamic route, with the params it consumed moved
/// from the query into the path. `None` if the path is static or a param is
/// missing.
fn interpolated_as_path(resolved: &Url) -> Option<String> {
    let pathname = resolved.path();
    if !is_dynamic_route(pathname) {
        return None;
    }
    let query = UrlQuery::from_url(resolved);
    let Interpolation { result, params } = interpolate_as(pathname, pathname, &query);
    let as_pathname = result?;

    let mut as_url = UrlObject::path(as_pathname).with_query(query.without(&params));
    if let Some(fragment) = resolved.fragment().filter(|f| !f.is_empty()) {
        as_url = as_url.with_hash(format!("#{fragment}"));
    }
    Some(format_url(&as_url))
}
