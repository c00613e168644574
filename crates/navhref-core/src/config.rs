use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use crate::href::TrailingSlash;
use crate::resolver::ResolverOptions;

/// Site configuration loaded from `~/.config/navhref/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Location origin, e.g. `https://example.com`. Absolute hrefs on this
    /// origin are resolved; without one, every absolute href is left as-is.
    #[serde(default)]
    pub origin: Option<String>,
    /// Base path the site is mounted under (`""` = root).
    #[serde(default)]
    pub base_path: String,
    /// "never" (default), "always" or "manual".
    #[serde(default)]
    pub trailing_slash: TrailingSlash,
}

impl NavConfig {
    /// Validates the configuration and builds resolver options from it.
    pub fn resolver_options(&self) -> Result<ResolverOptions> {
        let origin = self
            .origin
            .as_deref()
            .map(|o| Url::parse(o).with_context(|| format!("invalid origin: {o}")))
            .transpose()?;
        if let Some(origin) = &origin {
            if !origin.origin().is_tuple() {
                anyhow::bail!("origin has no host: {origin}");
            }
        }

        let base_path = self.base_path.trim_end_matches('/');
        if !base_path.is_empty() && !base_path.starts_with('/') {
            anyhow::bail!("base_path must start with '/': {}", self.base_path);
        }

        Ok(ResolverOptions {
            origin,
            base_path: base_path.to_string(),
            trailing_slash: self.trailing_slash,
        })
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("navhref")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<NavConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = NavConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<NavConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: NavConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
