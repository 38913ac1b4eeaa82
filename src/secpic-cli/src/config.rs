//! Configuration management for secpic CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Write edits to a renamed copy by default
    pub new_copy: Option<bool>,
    /// Back up dumps before in-place edits by default
    pub backup: Option<bool>,
}

impl Config {
    /// Get the path to the default config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("secpic");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from `path`, or the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        tracing::debug!(path = %config_path.display(), "loaded config");
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn new_copy(&self) -> bool {
        self.new_copy.unwrap_or(false)
    }

    pub fn backup(&self) -> bool {
        self.backup.unwrap_or(false)
    }
}
