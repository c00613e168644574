//! `navhref batch <file>` – resolve many targets, one JSON line per target.

use anyhow::{Context, Result};
use navhref_core::{HrefResolver, NavigationTarget, ResolveMode, ResolvedHref, RouterState};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct BatchRecord<'a> {
    line: usize,
    target: &'a str,
    #[serde(flatten)]
    resolved: ResolvedHref,
}

/// A line holding a JSON string or object is parsed as JSON; anything else is
/// a raw href.
fn parse_line(line: &str) -> Result<NavigationTarget> {
    if line.starts_with('{') || line.starts_with('"') {
        Ok(serde_json::from_str(line)?)
    } else {
        Ok(NavigationTarget::Href(line.to_string()))
    }
}

pub fn run_batch(
    resolver: &HrefResolver,
    state: &RouterState,
    path: &Path,
    with_as: bool,
    out: &mut impl Write,
) -> Result<()> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("read targets: {}", path.display()))?;
    let mode = if with_as {
        ResolveMode::WithAs
    } else {
        ResolveMode::HrefOnly
    };

    let mut count = 0usize;
    for (idx, raw) in data.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let target = parse_line(line)
            .with_context(|| format!("{}:{}: invalid target", path.display(), idx + 1))?;
        let record = BatchRecord {
            line: idx + 1,
            target: line,
            resolved: resolver.resolve(state, target, mode),
        };
        writeln!(out, "{}", serde_json::to_string(&record)?)?;
        count += 1;
    }

    tracing::info!("resolved {} targets from {}", count, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn run(contents: &str, with_as: bool) -> Result<Vec<serde_json::Value>> {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        let resolver = HrefResolver::default();
        let state = RouterState::new("/posts/[id]", "/posts/1");
        let mut out = Vec::new();
        run_batch(&resolver, &state, f.path(), with_as, &mut out)?;
        Ok(String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect())
    }

    #[test]
    fn one_record_per_non_blank_line() {
        let records = run("/about/\n\n#comments\n{\"pathname\":\"/x\"}\n", false).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["line"], 1);
        assert_eq!(records[0]["href"], "/about");
        assert!(records[0].get("as").is_none());
        assert_eq!(records[1]["line"], 3);
        assert_eq!(records[1]["href"], "/posts/1#comments");
        assert_eq!(records[2]["href"], "/x");
    }

    #[test]
    fn with_as_adds_as_path() {
        let records = run("\"/posts/[id]?id=4\"\n", true).unwrap();
        assert_eq!(records[0]["target"], "\"/posts/[id]?id=4\"");
        assert_eq!(records[0]["as"], "/posts/4");
    }

    #[test]
    fn invalid_json_line_is_an_error() {
        let err = run("/ok\n{broken\n", false).unwrap_err();
        assert!(format!("{err:#}").contains(":2: invalid target"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let resolver = HrefResolver::default();
        let mut out = Vec::new();
        let res = run_batch(
            &resolver,
            &RouterState::default(),
            Path::new("/nonexistent/navhref-targets.txt"),
            false,
            &mut out,
        );
        assert!(res.is_err());
    }
}
