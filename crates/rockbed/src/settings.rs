//! User settings stored in the data directory
//!
//! Directory structure:
//! ~/.rockbed/
//!   settings.yaml        # Dataset location, default electricity price
//!   rockbed.log          # Application log

use std::fs;
use std::path::{Path, PathBuf};

use rockbed_core::model::DEFAULT_ELECTRICITY_PRICE;
use serde::{Deserialize, Serialize};

use crate::util::io::atomic_write;

pub const SETTINGS_FILE: &str = "settings.yaml";

fn default_electricity_price() -> f64 {
    DEFAULT_ELECTRICITY_PRICE
}

/// Contents of settings.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Simulation lookup table (CSV)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<PathBuf>,
    /// Electricity price used when none is given on the command line, $/kWh
    #[serde(default = "default_electricity_price")]
    pub electricity_price: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset: None,
            electricity_price: DEFAULT_ELECTRICITY_PRICE,
        }
    }
}

/// Error types for settings storage
#[derive(Debug)]
pub enum SettingsError {
    Io(String),
    Serialize(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(msg) => write!(f, "IO error: {msg}"),
            SettingsError::Serialize(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl Settings {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(SETTINGS_FILE)
    }

    /// Read settings from the data directory
    ///
    /// A missing file gives the defaults. An unreadable or invalid file is
    /// logged and also gives the defaults; a non-positive price is replaced
    /// by the default price.
    pub fn load(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        }

        let mut settings = match fs::read_to_string(&path) {
            Ok(content) => Self::from_yaml(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), "invalid settings file: {e}");
                Self::default()
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), "failed to read settings: {e}");
                Self::default()
            }
        };

        if !(settings.electricity_price.is_finite() && settings.electricity_price > 0.0) {
            tracing::warn!(
                price = settings.electricity_price,
                "electricity price must be positive, using default"
            );
            settings.electricity_price = DEFAULT_ELECTRICITY_PRICE;
        }

        settings
    }

    /// Write settings to the data directory, creating it if needed
    pub fn save(&self, data_dir: &Path) -> Result<PathBuf, SettingsError> {
        fs::create_dir_all(data_dir)
            .map_err(|e| SettingsError::Io(format!("Failed to create data directory: {e}")))?;

        let yaml = self
            .to_yaml()
            .map_err(|e| SettingsError::Serialize(e.to_string()))?;

        let path = Self::path(data_dir);
        atomic_write(&path, &yaml)
            .map_err(|e| SettingsError::Io(format!("Failed to write settings: {e}")))?;

        tracing::info!(path = %path.display(), "settings saved");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let settings = Settings::from_yaml("dataset: /data/lookup.csv\n").unwrap();
        assert_eq!(settings.dataset, Some(PathBuf::from("/data/lookup.csv")));
        assert_eq!(settings.electricity_price, DEFAULT_ELECTRICITY_PRICE);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let settings = Settings {
            dataset: Some(PathBuf::from("lookup.csv")),
            electricity_price: 0.21,
        };

        let path = settings.save(dir.path()).unwrap();
        assert!(path.ends_with(SETTINGS_FILE));
        assert_eq!(Settings::load(dir.path()), settings);
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let dir = tempdir().unwrap();
        fs::write(Settings::path(dir.path()), "electricity_price: [not, a, number]\n").unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn test_non_positive_price_replaced() {
        let dir = tempdir().unwrap();
        fs::write(Settings::path(dir.path()), "electricity_price: -0.1\n").unwrap();
        assert_eq!(
            Settings::load(dir.path()).electricity_price,
            DEFAULT_ELECTRICITY_PRICE
        );
    }
}
