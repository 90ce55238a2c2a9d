//! Configuration module for bookfinder
//!
//! Handles loading and validating settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Load settings from the first settings file found, or use defaults
pub fn load() -> Result<Settings> {
    // Environment variable wins over the default locations
    if let Ok(path) = std::env::var("BOOKFINDER_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            return load_from(&path);
        }
    }

    for path in default_paths() {
        if path.exists() {
            return load_from(&path);
        }
    }

    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    settings.validate()?;
    Ok(settings)
}

fn load_from(path: &Path) -> Result<Settings> {
    info!("Loading settings from: {}", path.display());
    let mut settings = Settings::from_file(path)?;
    settings.merge_env();
    settings.validate()?;
    Ok(settings)
}

fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/bookfinder/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("bookfinder/settings.yml"));
    }
    paths
}
