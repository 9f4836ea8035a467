use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::config::FixupConfig;
use crate::error::{FixupError, Result};

/// Config file formats, picked by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// The configuration loader
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Set the config path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load and parse the configuration
    pub fn load(&self) -> Result<FixupConfig> {
        let format = ConfigFormat::from_path(&self.config_path).ok_or_else(|| {
            FixupError::config_error(
                "unsupported extension, expected .toml, .yaml, .yml or .json",
                &self.config_path,
            )
        })?;

        let content = fs::read_to_string(&self.config_path)
            .map_err(|e| FixupError::io_error(e, &self.config_path))?;
        debug!(
            "Loaded config {} ({:?}, {} bytes)",
            self.config_path.display(),
            format,
            content.len()
        );

        self.parse(&content, format)
    }

    /// Parse config text in the given format
    pub fn parse(&self, content: &str, format: ConfigFormat) -> Result<FixupConfig> {
        let parsed = match format {
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| FixupError::config_error(message, &self.config_path))
    }
}
