//! CLI execution context.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use bedding_store::ProductStore;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    fn find_config(start: &PathBuf) -> Option<CliConfig> {
        let config_names = ["bedding.toml", ".bedding.toml", "bedding.json"];

        let mut current = start.clone();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// The product store configured for this run.
    pub fn store(&self) -> ProductStore {
        ProductStore::new(self.resolve_path(&self.config.store.path))
    }

    /// The drafts document path.
    pub fn drafts_path(&self) -> PathBuf {
        self.resolve_path(&self.config.drafts.path)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
