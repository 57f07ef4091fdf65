//! Configuration module for the stct CLI.
//!
//! This module handles loading and managing configuration settings for
//! the stct application. Every field has a default, so a partial
//! `stct.toml` is valid.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::common::OutputFormat;
use crate::error::{Result, StctError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "stct.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Tokens-specific configuration.
    #[serde(default)]
    pub tokens: TokensConfig,

    /// Convert-specific configuration.
    #[serde(default)]
    pub convert: ConvertConfig,
}

/// Tokens-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokensConfig {
    /// Emit whitespace tokens.
    #[serde(default)]
    pub include_whitespace: bool,

    /// Output format, `text` or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

/// Convert-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConvertConfig {
    /// Extension of generated files, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Overwrite existing output files.
    #[serde(default)]
    pub force: bool,
}

fn default_format() -> String {
    OutputFormat::Text.as_str().to_string()
}

fn default_extension() -> String {
    "js".to_string()
}

impl Default for TokensConfig {
    fn default() -> Self {
        Self {
            include_whitespace: false,
            format: default_format(),
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            force: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/stct/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(StctError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| StctError::Config(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Reject values that would only fail later, per file.
    fn validate(&self) -> Result<()> {
        self.tokens.format.parse::<OutputFormat>().map_err(|_| {
            StctError::Config(format!(
                "Invalid format in configuration: {}",
                self.tokens.format
            ))
        })?;

        let extension = &self.convert.extension;
        if extension.is_empty() || extension.contains(['/', '\\', '.']) {
            return Err(StctError::Config(format!(
                "Invalid extension in configuration: {:?}",
                extension
            )));
        }
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("stct").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("stct").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
