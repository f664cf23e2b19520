/// Application configuration
///
/// Settings are read from `config.toml` in the config directory:
/// - `$IMAGE_SEARCH_CONFIG_DIR` when set and non-empty
/// - otherwise the platform config dir (e.g. ~/.config/image-search on Linux)
///
/// The API credentials can also come from the environment, which wins
/// over the file so keys never have to be written to disk.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APPLICATION: &str = "image-search";
const CONFIG_FILE: &str = "config.toml";

const CONFIG_DIR_ENV: &str = "IMAGE_SEARCH_CONFIG_DIR";
const API_KEY_ENV: &str = "IMAGE_SEARCH_API_KEY";
const ENGINE_ID_ENV: &str = "IMAGE_SEARCH_ENGINE_ID";

/// The search API never returns more than 10 results per request
const MAX_PAGE_SIZE: u32 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Parameters for the remote image search endpoint
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Base URL of the search endpoint (without query string)
    pub endpoint: String,
    /// API key sent as `key`
    pub api_key: String,
    /// Search engine identifier sent as `cx`
    pub engine_id: String,
    /// Result type filter (`searchType`)
    pub search_type: String,
    /// Image size filter (`imgSize`)
    pub image_size: String,
    /// Results per request (`num`)
    pub page_size: u32,
    /// Safe-search level (`safe`)
    pub safe: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://www.googleapis.com/customsearch/v1".to_string(),
            api_key: String::new(),
            engine_id: String::new(),
            search_type: "image".to_string(),
            image_size: "large".to_string(),
            page_size: 9,
            safe: "high".to_string(),
        }
    }
}

/// Grid layout preferences
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Number of grid columns
    pub columns: usize,
    /// Maximum edge length of a decoded thumbnail, in pixels
    pub thumbnail_size: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            columns: 3,
            thumbnail_size: 256,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Load the config file (if any) and apply environment overrides.
    ///
    /// A missing file is not an error: defaults are used.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };

        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Parse a config file from disk
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_toml(&contents).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse config from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, String> {
        let mut config: Config = toml::from_str(contents).map_err(|e| e.to_string())?;
        config.normalize();
        Ok(config)
    }

    /// Path of the config file, if a config directory can be determined
    pub fn config_path() -> Option<PathBuf> {
        let dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => dirs::config_dir()?.join(APPLICATION),
        };

        Some(dir.join(CONFIG_FILE))
    }

    /// Replace credentials with non-empty values from `lookup`
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty(API_KEY_ENV) {
            self.search.api_key = key;
        }
        if let Some(id) = non_empty(ENGINE_ID_ENV) {
            self.search.engine_id = id;
        }
    }

    /// Keep values inside what the API and the grid can handle
    fn normalize(&mut self) {
        self.search.page_size = self.search.page_size.clamp(1, MAX_PAGE_SIZE);
        self.ui.columns = self.ui.columns.max(1);
        self.ui.thumbnail_size = self.ui.thumbnail_size.max(16);
    }

    /// True when both credentials are present
    pub fn has_credentials(&self) -> bool {
        !self.search.api_key.is_empty() && !self.search.engine_id.is_empty()
    }
}
