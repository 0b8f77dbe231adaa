//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Store configuration.
    #[serde(default)]
    pub store: StoreConfig,

    /// Export configuration.
    #[serde(default)]
    pub export: ExportConfig,

    /// Draft configuration.
    #[serde(default)]
    pub drafts: DraftConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the JSON store document.
    #[serde(default = "default_store_path")]
    pub path: String,
}

fn default_store_path() -> String {
    "data/products.json".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Path the export command writes to.
    #[serde(default = "default_export_path")]
    pub path: String,

    /// Column order override; the canonical ERP columns when empty.
    #[serde(default)]
    pub columns: Vec<String>,
}

fn default_export_path() -> String {
    "data/products.csv".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: default_export_path(),
            columns: Vec::new(),
        }
    }
}

/// Draft configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftConfig {
    /// Path of the JSON drafts document.
    #[serde(default = "default_drafts_path")]
    pub path: String,
}

fn default_drafts_path() -> String {
    "data/drafts.json".to_string()
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            path: default_drafts_path(),
        }
    }
}
