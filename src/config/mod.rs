//
//  starr
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! The CLI's registry of named service instances, stored as TOML in the
//! platform-specific config directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/starr/config.toml`
//! - **macOS**: `~/Library/Application Support/starr/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\starr\config.toml`
//!
//! `--config` (or `STARR_CONFIG`) points the CLI at another file.
//!
//! ## Example Configuration File
//!
//! ```toml
//! default_instance = "tv"
//!
//! [instances.tv]
//! app = "sonarr"
//! url = "http://localhost:8989"
//! api_key = "0123456789abcdef"
//!
//! [instances.indexers]
//! app = "prowlarr"
//! url = "https://prowlarr.example.com"
//! api_key = "fedcba9876543210"
//! timeout_secs = 60
//! valid_ssl = false
//!
//! [log]
//! max_body = 2048
//! ```
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O operations
//! - [`instances`]: Per-instance settings and URL normalization

mod file;
mod instances;

pub use file::*;
pub use instances::*;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::APP_NAME;

/// Global configuration container for the CLI.
///
/// # Examples
///
/// ```rust
/// use starr::config::Config;
///
/// let config: Config = toml::from_str(r#"
///     [instances.tv]
///     app = "sonarr"
///     url = "http://localhost:8989"
///     api_key = "key"
/// "#).unwrap();
/// assert_eq!(config.instance(None).unwrap().0, "tv");
/// ```
///
/// # Notes
///
/// - All fields use `#[serde(default)]` so partial files load
/// - The file is created on first save
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Instance used when no `--instance` is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_instance: Option<String>,

    /// Named instances.
    #[serde(default)]
    pub instances: BTreeMap<String, InstanceConfig>,

    /// Request/response logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Settings of the request/response logging middleware.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// Bytes of each body to show. Zero disables body logging.
    #[serde(default = "default_max_body")]
    pub max_body: usize,
}

fn default_max_body() -> usize {
    1024
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            max_body: default_max_body(),
        }
    }
}

impl Config {
    /// Loads the configuration from `path`, or the default location.
    ///
    /// A missing file yields an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_path()?,
        };
        if !config_exists(&path) {
            return Ok(Self::default());
        }
        let content = read_config_file(&path)?;
        toml::from_str(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Saves the configuration to `path`, or the default location.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_path()?,
        };
        let content = toml::to_string_pretty(self)?;
        write_config_file(&path, &content)
    }

    /// Default config file path.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", APP_NAME)
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Resolves an instance by name.
    ///
    /// Without a name, falls back to `default_instance`, then to the only
    /// configured instance.
    ///
    /// # Returns
    ///
    /// The instance name and its settings.
    pub fn instance(&self, name: Option<&str>) -> Result<(&str, &InstanceConfig)> {
        let name = match name.or(self.default_instance.as_deref()) {
            Some(name) => name,
            None => match self.instances.keys().next() {
                Some(only) if self.instances.len() == 1 => only.as_str(),
                Some(_) => bail!("Several instances are configured; pass --instance or set default_instance"),
                None => bail!("No instances configured. Run 'starr config add <name> --app <app> --url <url> --api-key <key>'"),
            },
        };
        self.instances
            .get_key_value(name)
            .map(|(name, instance)| (name.as_str(), instance))
            .ok_or_else(|| anyhow!("Unknown instance '{name}'"))
    }

    /// Adds or replaces an instance.
    pub fn set_instance(&mut self, name: impl Into<String>, instance: InstanceConfig) {
        self.instances.insert(name.into(), instance);
    }

    /// Removes an instance, clearing the default if it pointed there.
    pub fn remove_instance(&mut self, name: &str) -> Option<InstanceConfig> {
        let removed = self.instances.remove(name);
        if self.default_instance.as_deref() == Some(name) {
            self.default_instance = None;
        }
        removed
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default_instance" => self.default_instance.clone(),
            "log.max_body" => Some(self.log.max_body.to_string()),
            _ => None,
        }
    }

    /// Sets a top-level key. Returns `Ok(false)` for unknown keys.
    pub fn set(&mut self, key: &str, value: String) -> Result<bool> {
        match key {
            "default_instance" => {
                if !self.instances.contains_key(&value) {
                    bail!("Unknown instance '{value}'");
                }
                self.default_instance = Some(value);
                Ok(true)
            }
            "log.max_body" => {
                self.log.max_body = value
                    .parse()
                    .with_context(|| format!("log.max_body must be a number, got '{value}'"))?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::App;
    use tempfile::TempDir;

    fn sonarr() -> InstanceConfig {
        InstanceConfig::new(App::Sonarr, "http://localhost:8989", "key")
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log.max_body, 1024);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set_instance("tv", sonarr());
        config.set("default_instance", "tv".to_string()).unwrap();
        config.save(Some(&path)).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.instances["tv"].app, App::Sonarr);
    }

    #[test]
    fn test_instance_resolution() {
        let mut config = Config::default();
        assert!(config.instance(None).is_err());

        config.set_instance("tv", sonarr());
        assert_eq!(config.instance(None).unwrap().0, "tv");

        config.set_instance(
            "movies",
            InstanceConfig::new(App::Radarr, "http://localhost:7878", "key"),
        );
        assert!(config.instance(None).is_err());
        assert_eq!(config.instance(Some("movies")).unwrap().1.app, App::Radarr);
        assert!(config.instance(Some("books")).is_err());

        config.default_instance = Some("tv".to_string());
        assert_eq!(config.instance(None).unwrap().0, "tv");
    }

    #[test]
    fn test_remove_clears_default() {
        let mut config = Config::default();
        config.set_instance("tv", sonarr());
        config.default_instance = Some("tv".to_string());
        assert!(config.remove_instance("tv").is_some());
        assert!(config.default_instance.is_none());
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("default_instance", "ghost".to_string()).is_err());
        assert!(config.set("log.max_body", "lots".to_string()).is_err());
        assert!(!config.set("editor", "vim".to_string()).unwrap());
        assert!(config.set("log.max_body", "64".to_string()).unwrap());
        assert_eq!(config.get("log.max_body").as_deref(), Some("64"));
    }
}
