//! Configuration loading from unrequire.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Main configuration structure for unrequire.toml.
#[derive(Debug, Deserialize, Default)]
pub struct UnrequireConfig {
    /// Extra directory names to exclude from the source scan.
    pub exclude: Option<Vec<String>>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

/// Loads configuration from unrequire.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<UnrequireConfig>> {
    let path = root.join("unrequire.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content).context("Invalid unrequire.toml")?;
    Ok(Some(cfg))
}
