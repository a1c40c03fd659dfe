//! Optional `jarman.toml` configuration
//!
//! ```toml
//! data_dir = "/home/me/.local/share/jarman"
//! catalog = "/usr/share/jarman/words"
//! default_level = "A2"
//! ```
//!
//! Every field is optional. A missing file is the same as an empty one.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::DEFAULT_LEVEL;
use crate::storage::FileStore;

pub const CONFIG_FILE_NAME: &str = "jarman.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Could not determine config directory")]
    ConfigDirNotFound,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where progress keys are stored
    pub data_dir: Option<PathBuf>,
    /// Word list file or directory
    pub catalog: Option<PathBuf>,
    pub default_level: Option<String>,
}

impl AppConfig {
    /// `<config dir>/jarman/jarman.toml`
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or(ConfigError::ConfigDirNotFound)?;
        Ok(dir.join("jarman").join(CONFIG_FILE_NAME))
    }

    /// Load from `path`, or from the default location when `None`.
    /// A file that does not exist yields the default config.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Command-line override, then the config file, then the platform default
    pub fn resolve_data_dir(&self, cli_override: Option<&Path>) -> Option<PathBuf> {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.data_dir.clone())
            .or_else(|| FileStore::default_data_dir().ok())
    }

    pub fn resolve_catalog(&self, cli_override: Option<&Path>) -> Option<PathBuf> {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.catalog.clone())
    }

    pub fn default_level(&self) -> &str {
        self.default_level
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LEVEL)
    }
}
