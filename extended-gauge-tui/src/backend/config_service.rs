//! Card configuration file
//!
//! The card configuration is stored as pretty-printed JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use extended_gauge_core::ConfigValue;
use tokio::fs;

/// Configuration directory of the editor
fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("extended-gauge")
}

/// Card configuration file on disk
#[derive(Debug, Clone)]
pub struct CardFile {
    path: PathBuf,
}

impl CardFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/extended-gauge/card.json`
    pub fn default_path() -> PathBuf {
        get_config_dir().join("card.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the configuration; `None` when the file does not exist yet
    pub async fn load(&self) -> Result<Option<ConfigValue>> {
        if !fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading {}", self.path.display()))?;
        let value: ConfigValue = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))?;

        Ok(Some(value))
    }

    pub async fn save(&self, config: &ConfigValue) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("creating {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .await
            .with_context(|| format!("writing {}", self.path.display()))?;

        log::info!("Card configuration saved to {}", self.path.display());
        Ok(())
    }
}
