//! Application configuration

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

/// Default file looked up in the working directory.
pub const CONFIG_FILE: &str = "predictor.toml";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Directory holding the saved model files.
    pub models_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from `predictor.toml` (optional) and the
    /// environment (`PREDICTOR_MODELS_DIR`).
    pub fn load() -> Result<Self> {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from a specific file; a missing file falls back to
    /// defaults.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .set_default("models_dir", "saved_models")
            .context("Failed to set configuration defaults")?
            .add_source(File::from(path.as_ref()).required(false))
            .add_source(Environment::with_prefix("PREDICTOR"))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Replace the models directory (command-line override).
    pub fn with_models_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.models_dir = dir.into();
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            models_dir: PathBuf::from("saved_models"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_default() {
        let tmp = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from_path(tmp.path().join("absent.toml")).unwrap();
        // PREDICTOR_MODELS_DIR may be set in the environment running the tests.
        if std::env::var_os("PREDICTOR_MODELS_DIR").is_none() {
            assert_eq!(config, AppConfig::default());
        }
    }

    #[test]
    fn test_file_overrides_default() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("predictor.toml");
        std::fs::write(&path, "models_dir = \"/srv/models\"\n").unwrap();
        let config = AppConfig::load_from_path(&path).unwrap();
        if std::env::var_os("PREDICTOR_MODELS_DIR").is_none() {
            assert_eq!(config.models_dir, PathBuf::from("/srv/models"));
        }
    }

    #[test]
    fn test_cli_override() {
        let config = AppConfig::default().with_models_dir("elsewhere");
        assert_eq!(config.models_dir, PathBuf::from("elsewhere"));
    }
}
