//! Configuration file support for the tissue simulator.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/tissue-sim/config.toml`.
//! It only carries front-end defaults; the evaluator itself takes every
//! parameter explicitly.

use crate::{Error, ExerciseCategory, Result, Scale};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Parameter values used when the caller leaves one out
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_category")]
    pub category: ExerciseCategory,

    #[serde(default = "default_moderate")]
    pub intensity: String,

    #[serde(default = "default_moderate")]
    pub reps: String,

    #[serde(default = "default_moderate")]
    pub volume: String,

    #[serde(default = "default_moderate")]
    pub frequency: String,

    #[serde(default = "default_effort")]
    pub effort: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            category: default_category(),
            intensity: default_moderate(),
            reps: default_moderate(),
            volume: default_moderate(),
            frequency: default_moderate(),
            effort: default_effort(),
        }
    }
}

/// Result rendering configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print JSON instead of text
    #[serde(default)]
    pub json: bool,

    #[serde(default = "default_show_disclaimer")]
    pub show_disclaimer: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            show_disclaimer: default_show_disclaimer(),
        }
    }
}

// Default value functions
fn default_category() -> ExerciseCategory {
    ExerciseCategory::ResistanceStanding
}

fn default_moderate() -> String {
    "Moderate".into()
}

fn default_effort() -> String {
    "HighEffort".into()
}

fn default_show_disclaimer() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .ok_or_else(|| Error::Config("Could not determine config directory".into()))?;
        Ok(base.join("tissue-sim").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Check that every default label resolves on its scale
    ///
    /// Returns a list of problems; unresolved labels still work (they fall
    /// back to the unspecified level) but are almost always typos.
    pub fn validate(&self) -> Vec<String> {
        let d = &self.defaults;
        [
            (Scale::Intensity, &d.intensity),
            (Scale::Reps, &d.reps),
            (Scale::Volume, &d.volume),
            (Scale::Frequency, &d.frequency),
            (Scale::Effort, &d.effort),
        ]
        .into_iter()
        .filter(|(scale, label)| scale.level_of(label).is_unspecified())
        .map(|(scale, label)| format!("default {:?} label {:?} is not on the scale", scale, label))
        .collect()
    }
}
