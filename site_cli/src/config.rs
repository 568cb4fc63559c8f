//! Configuration file support.
//!
//! Loads optional `site.toml` from the working directory, or the file given
//! with `--config`. Every key is optional.

use anyhow::{Context, Result};
use mcqueen_site::SiteOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "site.toml";
/// Output directory when neither flag nor config names one
pub const DEFAULT_OUT_DIR: &str = "dist";

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// `<title>` of every page
    pub title: Option<String>,
    /// `<meta name="description">` content
    pub description: Option<String>,
    /// `lang` attribute of `<html>`
    pub lang: Option<String>,
    /// Fixed copyright year (reproducible builds)
    pub year: Option<i32>,
    /// Where `build` writes pages
    pub out_dir: Option<PathBuf>,
}

impl SiteConfig {
    /// Load the config for this run.
    ///
    /// An explicit path must exist and parse. The default `site.toml` is
    /// optional, and a broken one only logs a warning.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                Self::load_from_path(path).or_else(|e| {
                    warn!("ignoring {}: {:#}", path.display(), e);
                    Ok(Self::default())
                })
            }
        }
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Page options, with `year_override` (from `--year`) winning over the file.
    pub fn site_options(&self, year_override: Option<i32>) -> SiteOptions {
        let defaults = SiteOptions::default();
        SiteOptions {
            title: self.title.clone().unwrap_or(defaults.title),
            description: self.description.clone().unwrap_or(defaults.description),
            lang: self.lang.clone().unwrap_or(defaults.lang),
            year: year_override.or(self.year).unwrap_or(defaults.year),
        }
    }

    /// Output directory, with `flag` (from `--out`) winning over the file.
    pub fn out_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.out_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }
}
