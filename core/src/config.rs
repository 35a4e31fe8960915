use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::repository::default_data_dir;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// File path or http(s) URL of the dataset document.
    pub dataset: Option<String>,
    pub strict: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: None,
            strict: false,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Reads `config.toml` from `base_dir` (default `~/.pizzadash`).
    /// A missing file yields the defaults.
    pub fn load(base_dir: Option<PathBuf>) -> Result<Self> {
        let dir = match base_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        Self::load_from(&dir.join(CONFIG_FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
    }
}
