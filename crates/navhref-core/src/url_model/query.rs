//! Ordered query maps: the structured form of a URL search string.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use url::{form_urlencoded, Url};

/// Value of one query key: a single string, or every value of a repeated key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Single(String),
    Multiple(Vec<String>),
}

impl QueryValue {
    /// True for an empty single value. A list, even an empty one, is never blank.
    pub fn is_blank(&self) -> bool {
        matches!(self, QueryValue::Single(s) if s.is_empty())
    }

    /// All values in order.
    pub fn values(&self) -> Vec<&str> {
        match self {
            QueryValue::Single(s) => vec![s.as_str()],
            QueryValue::Multiple(v) => v.iter().map(String::as_str).collect(),
        }
    }

    fn push(&mut self, value: String) {
        match self {
            QueryValue::Single(first) => {
                let first = std::mem::take(first);
                *self = QueryValue::Multiple(vec![first, value]);
            }
            QueryValue::Multiple(v) => v.push(value),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Single(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Single(s)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(v: Vec<String>) -> Self {
        QueryValue::Multiple(v)
    }
}

/// Insertion-ordered query map. Keys are unique; repeated keys in a search
/// string collapse into [`QueryValue::Multiple`] in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlQuery {
    entries: Vec<(String, QueryValue)>,
}

impl UrlQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the query map of a parsed URL's search params.
    pub fn from_url(url: &Url) -> Self {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// Parses a search string, with or without its leading `?`.
    pub fn from_search(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        form_urlencoded::parse(search.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Sets `key`, replacing an existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Adds one value under `key`, turning an existing single value into a list.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => existing.push(value),
            None => self.entries.push((key, QueryValue::Single(value))),
        }
    }

    /// Copy of this query without the given keys.
    pub fn without<S: AsRef<str>>(&self, keys: &[S]) -> UrlQuery {
        UrlQuery {
            entries: self
                .entries
                .iter()
                .filter(|(k, _)| !keys.iter().any(|omit| omit.as_ref() == k))
                .cloned()
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serializes as `application/x-www-form-urlencoded`, without a leading `?`.
    /// List values emit one pair per element.
    pub fn to_search_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.entries {
            for v in value.values() {
                serializer.append_pair(key, v);
            }
        }
        serializer.finish()
    }
}

impl FromIterator<(String, String)> for UrlQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut query = UrlQuery::new();
        for (k, v) in iter {
            query.append(k, v);
        }
        query
    }
}

impl<'de> Deserialize<'de> for UrlQuery {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct QueryVisitor;

        impl<'de> Visitor<'de> for QueryVisitor {
            type Value = UrlQuery;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of query keys to a string or a list of strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<UrlQuery, A::Error> {
                let mut query = UrlQuery::new();
                while let Some((key, value)) = map.next_entry::<String, QueryValue>()? {
                    query.insert(key, value);
                }
                Ok(query)
            }
        }

        deserializer.deserialize_map(QueryVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_keys_collapse_into_list() {
        let q = UrlQuery::from_search("?a=1&b=2&a=3");
        assert_eq!(q.len(), 2);
        assert_eq!(
            q.get("a"),
            Some(&QueryValue::Multiple(vec!["1".into(), "3".into()]))
        );
        assert_eq!(q.get("b"), Some(&QueryValue::Single("2".into())));
    }

    #[test]
    fn search_string_keeps_insertion_order() {
        let mut q = UrlQuery::new();
        q.insert("z", "last");
        q.insert("a", "first");
        q.append("z", "again");
        assert_eq!(q.to_search_string(), "z=last&z=again&a=first");
    }

    #[test]
    fn search_string_is_form_encoded() {
        let mut q = UrlQuery::new();
        q.insert("q", "a b&c");
        assert_eq!(q.to_search_string(), "q=a+b%26c");
    }

    #[test]
    fn without_drops_only_named_keys() {
        let q = UrlQuery::from_search("id=5&sort=asc&page=2");
        let rest = q.without(&["id", "page"]);
        assert_eq!(rest.to_search_string(), "sort=asc");
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn from_url_decodes_pairs() {
        let url = Url::parse("http://n/p?name=a%20b&x=1+2").unwrap();
        let q = UrlQuery::from_url(&url);
        assert_eq!(q.get("name"), Some(&QueryValue::Single("a b".into())));
        assert_eq!(q.get("x"), Some(&QueryValue::Single("1 2".into())));
    }

    #[test]
    fn blank_only_for_empty_single() {
        assert!(QueryValue::Single(String::new()).is_blank());
        assert!(!QueryValue::Single("x".into()).is_blank());
        assert!(!QueryValue::Multiple(vec![]).is_blank());
    }

    #[test]
    fn deserialize_preserves_order() {
        let q: UrlQuery =
            serde_json::from_str(r#"{"b":"1","a":["x","y"]}"#).unwrap();
        assert_eq!(q.to_search_string(), "b=1&a=x&a=y");
    }
}
