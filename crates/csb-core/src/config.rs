use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::assign::RangeCounting;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceConfig {
    #[serde(default)]
    pub counting: RangeCounting,
}

impl BalanceConfig {
    /// Parse a TOML document. Missing keys fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `content` is not valid TOML or has unknown values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse balance config")
    }
}

/// Load `path`, or the default config when the file does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<BalanceConfig> {
    if !path.exists() {
        return Ok(BalanceConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<BalanceConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}
