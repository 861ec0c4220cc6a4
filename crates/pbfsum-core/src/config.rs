use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::manifest::DEFAULT_DATA_SUFFIX;

/// Global configuration loaded from `~/.config/pbfsum/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PbfsumConfig {
    /// Suffix identifying the data file named inside a manifest.
    #[serde(default = "default_data_suffix")]
    pub data_suffix: String,
    /// Appended to a data file path to find its manifest when none is given.
    #[serde(default = "default_manifest_suffix")]
    pub manifest_suffix: String,
}

fn default_data_suffix() -> String {
    DEFAULT_DATA_SUFFIX.to_string()
}

fn default_manifest_suffix() -> String {
    ".md5".to_string()
}

impl Default for PbfsumConfig {
    fn default() -> Self {
        Self {
            data_suffix: default_data_suffix(),
            manifest_suffix: default_manifest_suffix(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pbfsum")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PbfsumConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PbfsumConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<PbfsumConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: PbfsumConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
