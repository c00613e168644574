//! CLI for navhref.

mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use navhref_core::config::{self, NavConfig};
use navhref_core::href::TrailingSlash;
use navhref_core::{HrefResolver, NavigationTarget, RouterState, UrlObject};
use std::io;
use std::path::{Path, PathBuf};

use commands::{run_batch, run_inspect, run_resolve};

/// Top-level CLI for navhref.
#[derive(Debug, Parser)]
#[command(name = "navhref")]
#[command(about = "navhref: resolve router hrefs and interpolated as-paths", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/navhref/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Location origin (overrides the config file).
    #[arg(long, global = true, value_name = "URL")]
    pub origin: Option<String>,

    /// Site base path (overrides the config file).
    #[arg(long, global = true, value_name = "PATH")]
    pub base_path: Option<String>,

    /// Trailing slash policy (overrides the config file).
    #[arg(long, global = true, value_enum)]
    pub trailing_slash: Option<TrailingSlashArg>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TrailingSlashArg {
    Never,
    Always,
    Manual,
}

impl From<TrailingSlashArg> for TrailingSlash {
    fn from(arg: TrailingSlashArg) -> Self {
        match arg {
            TrailingSlashArg::Never => TrailingSlash::Never,
            TrailingSlashArg::Always => TrailingSlash::Always,
            TrailingSlashArg::Manual => TrailingSlash::Manual,
        }
    }
}

/// Router location the targets are resolved against.
#[derive(Debug, Clone, Args)]
pub struct RouterArgs {
    /// Current route pattern, e.g. /posts/[id].
    #[arg(long, default_value = "/")]
    pub pathname: String,

    /// Current browser-visible path (defaults to --pathname).
    #[arg(long, value_name = "PATH")]
    pub as_path: Option<String>,
}

impl RouterArgs {
    pub fn state(&self) -> RouterState {
        let as_path = self.as_path.clone().unwrap_or_else(|| self.pathname.clone());
        RouterState::new(self.pathname.clone(), as_path)
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve one target (an href, or a JSON url object starting with '{').
    Resolve {
        target: String,

        #[command(flatten)]
        router: RouterArgs,

        /// Also compute the interpolated as-path.
        #[arg(long)]
        with_as: bool,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Resolve every target in a file (one per line), printing JSON lines.
    Batch {
        /// File with one href or JSON target per line.
        path: PathBuf,

        #[command(flatten)]
        router: RouterArgs,

        /// Also compute interpolated as-paths.
        #[arg(long)]
        with_as: bool,
    },

    /// Show how a target is classified before resolution.
    Inspect { target: String },
}

impl Cli {
    /// Loads the config file and applies command-line overrides.
    pub fn load_config(&self) -> Result<NavConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init()?,
        };
        if let Some(origin) = &self.origin {
            cfg.origin = Some(origin.clone());
        }
        if let Some(base_path) = &self.base_path {
            cfg.base_path = base_path.clone();
        }
        if let Some(policy) = self.trailing_slash {
            cfg.trailing_slash = policy.into();
        }
        Ok(cfg)
    }
}

/// Parses a command-line target: JSON url object when it starts with `{`,
/// raw href otherwise.
pub fn parse_target(raw: &str) -> Result<NavigationTarget> {
    if raw.trim_start().starts_with('{') {
        let obj: UrlObject =
            serde_json::from_str(raw).with_context(|| format!("parse url object: {raw}"))?;
        Ok(NavigationTarget::Object(obj))
    } else {
        Ok(NavigationTarget::Href(raw.to_string()))
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = cli.load_config()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let resolver = HrefResolver::new(cfg.resolver_options()?);
        let mut out = io::stdout().lock();

        match &cli.command {
            CliCommand::Resolve {
                target,
                router,
                with_as,
                json,
            } => run_resolve(&resolver, &router.state(), target, *with_as, *json, &mut out)?,
            CliCommand::Batch {
                path,
                router,
                with_as,
            } => run_batch(&resolver, &router.state(), Path::new(path), *with_as, &mut out)?,
            CliCommand::Inspect { target } => run_inspect(&resolver, target, &mut out)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
