//! Configuration file support for questlog.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/questlog/config.toml`.
//! Every field has a default, so a partial file is fine.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub goal: GoalConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Where the log snapshot lives
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Weight goal used for trend progress
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GoalConfig {
    #[serde(default = "default_start_weight")]
    pub start_weight: f64,

    #[serde(default = "default_target_weight")]
    pub target_weight: f64,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            start_weight: default_start_weight(),
            target_weight: default_target_weight(),
        }
    }
}

/// Terminal display preferences
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_heatmap_days")]
    pub heatmap_days: u32,

    #[serde(default)]
    pub show_all_badges: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            heatmap_days: default_heatmap_days(),
            show_all_badges: false,
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("questlog")
}

fn default_start_weight() -> f64 {
    91.0
}

fn default_target_weight() -> f64 {
    85.0
}

fn default_heatmap_days() -> u32 {
    365
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load and validate configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("questlog")
            .join("config.toml")
    }

    /// Reject values the evaluators cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.display.heatmap_days == 0 {
            return Err(Error::Config("display.heatmap_days must be at least 1".into()));
        }
        if self.goal.start_weight <= 0.0 || self.goal.target_weight <= 0.0 {
            return Err(Error::Config(format!(
                "goal weights must be positive (start {}, target {})",
                self.goal.start_weight, self.goal.target_weight
            )));
        }
        Ok(())
    }

    /// Save the configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
