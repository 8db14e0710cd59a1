use crate::cli::Category;
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub defaults: FilterDefaults,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct FilterDefaults {
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub limit: Option<usize>,
    /// Falls back to the latest year in the active category.
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct DataConfig {
    #[serde(default)]
    pub dataset: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: String,
    #[serde(default = "default_height")]
    pub height: String,
    #[serde(default = "default_tooltip_delay")]
    pub tooltip_delay_ms: u32,
    #[serde(default = "default_edge_width")]
    pub edge_width: f64,
}

fn default_width() -> String {
    "1200px".to_string()
}

fn default_height() -> String {
    "600px".to_string()
}

fn default_tooltip_delay() -> u32 {
    200
}

fn default_edge_width() -> f64 {
    0.15
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            tooltip_delay_ms: default_tooltip_delay(),
            edge_width: default_edge_width(),
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/opnet/config.toml"))
}

/// Loads the config file. An explicit path must exist; the default path is
/// optional and yields built-in defaults when absent.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<ConfigFile> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Ok(p) if p.exists() => p,
            _ => return Ok(ConfigFile::default()),
        },
    };
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("read config {}", path.display()))?;
    let config = toml::from_str(&raw).with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}
