//! `navhref inspect <target>` – show how a target is classified.

use anyhow::Result;
use navhref_core::href::{is_absolute_url, is_local_url, repair_separators, scheme_prefix_len};
use navhref_core::route::RoutePattern;
use navhref_core::HrefResolver;
use std::io::Write;

use crate::cli::parse_target;

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

/// Path portion of an href: authority, search and fragment removed.
fn path_part(href: &str) -> &str {
    let rest = match scheme_prefix_len(href) {
        Some(len) => {
            let after = &href[len..];
            after.find('/').map_or("", |i| &after[i..])
        }
        None => href,
    };
    rest.split(|c| c == '?' || c == '#').next().unwrap_or(rest)
}

pub fn run_inspect(resolver: &HrefResolver, target: &str, out: &mut impl Write) -> Result<()> {
    let href = parse_target(target)?.to_href_string();
    let repaired = repair_separators(&href);
    let effective = repaired.as_deref().unwrap_or(&href);
    let opts = resolver.options();
    let local = is_local_url(effective, opts.origin.as_ref(), &opts.base_path);

    let pattern = RoutePattern::parse(path_part(effective));

    writeln!(out, "href:                {href}")?;
    match &repaired {
        Some(fixed) => writeln!(out, "repeated separators: yes (repaired to {fixed})")?,
        None => writeln!(out, "repeated separators: no")?,
    }
    writeln!(out, "absolute:            {}", yes_no(is_absolute_url(effective)))?;
    writeln!(out, "local:               {}", yes_no(local))?;
    if local && pattern.is_dynamic() {
        let params: Vec<&str> = pattern.param_names().collect();
        writeln!(out, "dynamic route:       yes ({})", params.join(", "))?;
    } else {
        writeln!(out, "dynamic route:       no")?;
    }
    Ok(())
}
