//! Demo configuration.

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use termenu_core::{MenuOptions, DEFAULT_BANNER_WIDTH, DEFAULT_ESCAPE_PREFIX, DEFAULT_PROMPT};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_escape_prefix")]
    pub escape_prefix: String,
    #[serde(default = "default_banner_width")]
    pub banner_width: usize,
}

fn default_title() -> String {
    "termenu demo".to_string()
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_escape_prefix() -> String {
    DEFAULT_ESCAPE_PREFIX.to_string()
}

fn default_banner_width() -> usize {
    DEFAULT_BANNER_WIDTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            prompt: default_prompt(),
            escape_prefix: default_escape_prefix(),
            banner_width: default_banner_width(),
        }
    }
}

impl Config {
    /// Load config from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from the user config directory or fall back to defaults.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = default_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Options applied to every menu in the tree.
    pub fn menu_options(&self) -> MenuOptions {
        MenuOptions {
            prompt: self.prompt.clone(),
            escape_prefix: self.escape_prefix.clone(),
            banner_width: self.banner_width,
        }
    }
}

/// `<config dir>/termenu/config.toml`, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("termenu").join("config.toml"))
}
