//! Configuration file handling.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// User configuration, loaded from `calculadora/config.toml` in the
/// platform config directory. Every field is optional.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Spawn decorative emoji glyphs on button clicks.
    pub effects: bool,
    /// How long a spawned glyph stays on screen, in milliseconds.
    pub effect_duration_ms: u64,
    /// Capture mouse clicks for the button grid.
    pub mouse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            effects: true,
            effect_duration_ms: 1000,
            mouse: true,
        }
    }
}

/// Default config file location, if a config directory exists.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("calculadora").join("config.toml"))
}

/// Load configuration.
///
/// An explicitly passed path must exist and parse; the default path is
/// optional and falls back to defaults when absent.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => read(path),
        None => match default_path() {
            Some(path) if path.exists() => read(&path),
            _ => Ok(Config::default()),
        },
    }
}

fn read(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}
