//! `navhref resolve <target>` – resolve a single target.

use anyhow::Result;
use navhref_core::{HrefResolver, ResolveMode, RouterState};
use std::io::Write;

use crate::cli::parse_target;

pub fn run_resolve(
    resolver: &HrefResolver,
    state: &RouterState,
    target: &str,
    with_as: bool,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mode = if with_as {
        ResolveMode::WithAs
    } else {
        ResolveMode::HrefOnly
    };
    let resolved = resolver.resolve(state, parse_target(target)?, mode);

    if json {
        writeln!(out, "{}", serde_json::to_string(&resolved)?)?;
        return Ok(());
    }
    writeln!(out, "{}", resolved.href)?;
    if let Some(as_path) = &resolved.as_path {
        writeln!(out, "as: {as_path}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(target: &str, with_as: bool, json: bool) -> String {
        let resolver = HrefResolver::default();
        let state = RouterState::new("/posts/[id]", "/posts/1");
        let mut out = Vec::new();
        run_resolve(&resolver, &state, target, with_as, json, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_href() {
        assert_eq!(run("/about/", false, false), "/about\n");
    }

    #[test]
    fn prints_as_path_when_requested() {
        assert_eq!(
            run("/posts/[id]?id=5&sort=asc", true, false),
            "/posts/[id]?id=5&sort=asc\nas: /posts/5?sort=asc\n"
        );
    }

    #[test]
    fn prints_json() {
        assert_eq!(
            run(r#"{"pathname":"/posts/[id]","query":{"id":"2"}}"#, true, true),
            "{\"href\":\"/posts/[id]?id=2\",\"as\":\"/posts/2\"}\n"
        );
    }

    #[test]
    fn rejects_malformed_json_target() {
        let resolver = HrefResolver::default();
        let mut out = Vec::new();
        let err = run_resolve(
            &resolver,
            &RouterState::default(),
            "{not json",
            false,
            false,
            &mut out,
        );
        assert!(err.is_err());
    }
}
