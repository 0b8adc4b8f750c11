//
//  ynab-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loading, saving and accessing the `ynab` CLI settings, stored as TOML in
//! a platform-specific directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/ynab/config.toml`
//! - **macOS**: `~/Library/Application Support/ynab/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\ynab\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! access_token = "0123abcd..."
//! default_budget = "last-used"
//! timeout_secs = 30
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ynab_client::config::Config;
//!
//! let mut config = Config::load()?;
//! config.set("default_budget", "last-used")?;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O operations

mod file;

pub use file::*;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

/// Keys accepted by [`Config::get`], [`Config::set`] and [`Config::unset`].
pub const VALID_KEYS: &[&str] = &["access_token", "base_url", "default_budget", "timeout_secs"];

/// Settings for the `ynab` CLI.
///
/// # Fields
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `access_token` | `None` | Personal access token, overridden by `YNAB_ACCESS_TOKEN` |
/// | `base_url` | `None` | API root override (defaults to the public API) |
/// | `default_budget` | `None` | Budget used when `--budget` is not given |
/// | `timeout_secs` | `None` | Per-request timeout; no timeout when unset |
///
/// # Examples
///
/// ```rust
/// use ynab_client::config::Config;
///
/// let config: Config = toml::from_str("default_budget = \"last-used\"").unwrap();
/// assert_eq!(config.default_budget.as_deref(), Some("last-used"));
/// assert!(config.access_token.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Personal access token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// API root override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Budget id used when none is given on the command line.
    ///
    /// YNAB also accepts `last-used` here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_budget: Option<String>,

    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A missing file yields the default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Returns the path of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Returns the configured timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Returns the value of `key` as a string.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(match key {
            "access_token" => self.access_token.clone(),
            "base_url" => self.base_url.clone(),
            "default_budget" => self.default_budget.clone(),
            "timeout_secs" => self.timeout_secs.map(|t| t.to_string()),
            _ => bail!(unknown_key(key)),
        })
    }

    /// Sets `key` to `value`, validating it first.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "access_token" => self.access_token = Some(value.to_string()),
            "base_url" => {
                validate_base_url(value)?;
                self.base_url = Some(value.to_string());
            }
            "default_budget" => self.default_budget = Some(value.to_string()),
            "timeout_secs" => {
                let secs = value
                    .parse::<u64>()
                    .with_context(|| format!("Invalid timeout: {}", value))?;
                self.timeout_secs = Some(secs);
            }
            _ => bail!(unknown_key(key)),
        }
        Ok(())
    }

    /// Clears `key`.
    pub fn unset(&mut self, key: &str) -> Result<()> {
        match key {
            "access_token" => self.access_token = None,
            "base_url" => self.base_url = None,
            "default_budget" => self.default_budget = None,
            "timeout_secs" => self.timeout_secs = None,
            _ => bail!(unknown_key(key)),
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            validate_base_url(base_url)?;
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> String {
    format!(
        "Unknown config key: {}. Valid keys: {}",
        key,
        VALID_KEYS.join(", ")
    )
}

fn validate_base_url(value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("Invalid base URL: {}", value))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("Base URL must use http or https: {}", value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.set("default_budget", "last-used").unwrap();
        config.set("timeout_secs", "15").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.default_budget.as_deref(), Some("last-used"));
        assert_eq!(loaded.timeout(), Some(Duration::from_secs(15)));
        assert!(loaded.access_token.is_none());
    }

    #[test]
    fn test_unset_fields_are_not_written() {
        let content = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(content.trim().is_empty());
    }

    #[test]
    fn test_get_set_unset() {
        let mut config = Config::default();
        assert_eq!(config.get("access_token").unwrap(), None);

        config.set("access_token", "abc").unwrap();
        assert_eq!(config.get("access_token").unwrap().as_deref(), Some("abc"));

        config.unset("access_token").unwrap();
        assert_eq!(config.get("access_token").unwrap(), None);
    }

    #[test]
    fn test_invalid_values() {
        let mut config = Config::default();
        assert!(config.set("timeout_secs", "soon").is_err());
        assert!(config.set("base_url", "ftp://example.com").is_err());
        assert!(config.set("base_url", "nope").is_err());
        assert!(config.set("editor", "vim").is_err());
        assert!(config.get("editor").is_err());
    }

    #[test]
    fn test_invalid_base_url_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = \"not a url\"\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
