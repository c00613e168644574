//! Internal resolution failures. The resolver recovers from all of them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// The placeholder base URL could not be built.
    #[error("cannot build resolution base: {0}")]
    Base(#[source] url::ParseError),
    /// The href could not be joined onto the base.
    #[error("cannot resolve href against base: {0}")]
    Join(#[source] url::ParseError),
}
