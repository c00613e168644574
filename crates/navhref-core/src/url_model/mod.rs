//! Navigation targets and URL formatting.
//!
//! A target is either a raw href string or a structured [`UrlObject`]; both
//! become a string through [`NavigationTarget::to_href_string`] before
//! resolution.

mod encode;
mod format;
mod query;

pub use encode::{decode_uri_component, encode_uri_component};
pub use format::{format_url, UrlObject};
pub use query::{QueryValue, UrlQuery};

use serde::Deserialize;

/// What the caller wants to navigate to.
///
/// Deserializes from a JSON string (`Href`) or a JSON object (`Object`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NavigationTarget {
    Href(String),
    Object(UrlObject),
}

impl NavigationTarget {
    /// String form of the target. Structured targets go through [`format_url`].
    pub fn to_href_string(&self) -> String {
        match self {
            NavigationTarget::Href(s) => s.clone(),
            NavigationTarget::Object(obj) => format_url(obj),
        }
    }
}

impl From<&str> for NavigationTarget {
    fn from(s: &str) -> Self {
        NavigationTarget::Href(s.to_string())
    }
}

impl From<String> for NavigationTarget {
    fn from(s: String) -> Self {
        NavigationTarget::Href(s)
    }
}

impl From<&String> for NavigationTarget {
    fn from(s: &String) -> Self {
        NavigationTarget::Href(s.clone())
    }
}

impl From<UrlObject> for NavigationTarget {
    fn from(obj: UrlObject) -> Self {
        NavigationTarget::Object(obj)
    }
}
