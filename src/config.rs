use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::export::ExportFormat;
use crate::logging::LogConfig;
use crate::package::{default_packages, SensorPackage};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where and how summaries are written
    pub output: OutputSettings,

    /// Logging preferences
    pub logging: LogConfig,

    /// Packages to process; the built-in batch is used when empty
    pub packages: Vec<SensorPackage>,
}

/// Summary output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Rendering format
    pub format: ExportFormat,

    /// Output file (None for stdout)
    pub path: Option<PathBuf>,
}

/// Configuration management implementation
impl AppConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: AppConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML configuration")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).with_context(|| "Failed to serialize configuration to TOML")
    }

    /// Get default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fittrack")
            .join("config.toml")
    }

    /// Load the default config file, falling back to defaults when it is absent
    pub fn load_or_default() -> Result<Self> {
        let config_path = Self::default_config_path();

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_file(&config_path)
    }

    /// Config with the built-in batch filled in, as written by `config --init`
    pub fn with_default_packages() -> Self {
        Self {
            packages: default_packages(),
            ..Self::default()
        }
    }

    /// Packages to process in this run
    pub fn effective_packages(&self) -> Vec<SensorPackage> {
        if self.packages.is_empty() {
            default_packages()
        } else {
            self.packages.clone()
        }
    }
}
