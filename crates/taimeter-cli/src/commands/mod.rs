use std::path::PathBuf;

use anyhow::Result;

use taimeter_core::config::{Config, ConfigPaths};

pub mod classify;
pub mod config;
pub mod rate;
pub mod score;

/// Loads the effective config: an explicit `--config` path must exist;
/// otherwise the resolved user config is used when present, with built-in
/// defaults as the final fallback.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    if let Some(path) = path {
        return Config::load(&path);
    }
    let paths = ConfigPaths::resolve()?;
    if paths.config_path.exists() {
        return Config::load(&paths.config_path);
    }
    Ok(Config::default_config())
}
