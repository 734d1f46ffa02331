use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{DisplayAs, SortBy};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub default_sort: SortBy,
    #[serde(default)]
    pub display_as: DisplayAs,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }
}

/// Determine the config file path with fallback logic
///
/// Order: explicit path, `<config_dir>/project-browser/config.yaml`, `./config.yaml`.
pub fn get_config_path(cli_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = cli_path {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        anyhow::bail!("Config file not found at specified path: {}", path.display());
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("project-browser").join("config.yaml");
        if config_path.exists() {
            return Ok(config_path);
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(local_config);
    }

    let expected_path = dirs::config_dir()
        .map(|dir| dir.join("project-browser").join("config.yaml").display().to_string())
        .unwrap_or_else(|| "~/.config/project-browser/config.yaml".to_string());

    anyhow::bail!(
        "Config file not found. Expected locations:\n\
         1. {}\n\
         2. ./config.yaml (fallback)\n\
         Or pass --config <path>",
        expected_path
    )
}
