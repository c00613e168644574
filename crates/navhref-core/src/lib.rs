pub mod config;
pub mod logging;

pub mod href;
pub mod resolver;
pub mod route;
pub mod url_model;

pub use href::HrefResolver;
pub use resolver::{ResolveMode, ResolvedHref, ResolverOptions, RouterState};
pub use url_model::{NavigationTarget, UrlObject, UrlQuery};
