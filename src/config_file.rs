//! Configuration file handling for saving and loading browser settings.
//!
//! Every field is optional in the JSON file; missing fields take the
//! defaults below. Command-line arguments override whatever is loaded here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::DEFAULT_PRICE_MAX;
use crate::types::SortOption;

/// Catalog file used when neither the CLI nor the config file names one
pub const DEFAULT_DATA_PATH: &str = "data.json";

/// Browser settings that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Path of the JSON product list
    pub data_path: PathBuf,
    /// Upper price bound of the reset filter
    pub default_price_max: i64,
    /// Sort applied on startup
    pub initial_sort: SortOption,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            default_price_max: DEFAULT_PRICE_MAX,
            initial_sort: SortOption::Default,
        }
    }
}

impl BrowserConfig {
    /// Write the settings as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Failed to encode settings")?;
        fs::write(path, json).with_context(|| format!("Failed to write settings file {:?}", path))
    }

    /// Read settings from a JSON file; absent keys fall back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Settings file {:?} is not valid JSON", path))
    }

    /// Reject settings the browser cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.data_path.as_os_str().is_empty() {
            anyhow::bail!("data_path must not be empty");
        }
        if self.default_price_max < 0 {
            anyhow::bail!(
                "default_price_max must be non-negative, got {}",
                self.default_price_max
            );
        }
        Ok(())
    }
}
