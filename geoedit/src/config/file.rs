//! Configuration file handling for ~/.geoedit/config.ini.
//!
//! Loads and saves user configuration with sensible defaults.
//! Settings structs live in [`super::settings`], constants in [`super::defaults`],
//! parsing in [`super::parser`], and serialization in [`super::writer`].

use ini::{Ini, ParseOption};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::settings::{ConfigFile, LayerSettings};
use crate::catalog::{InMemoryLayerRepository, LayerCatalog};
use crate::server::BasicCredentials;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path (~/.geoedit/config.ini).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        let path = config_file_path();
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        // Values are written raw, so backslashes must be read back raw
        let options = ParseOption {
            enabled_escape: false,
            ..Default::default()
        };
        let ini = Ini::load_from_file_opt(path, options)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Create the config file at `path` with defaults if it doesn't exist.
    ///
    /// Returns `true` when a new file was written.
    pub fn ensure_exists_at(path: &Path) -> Result<bool, ConfigFileError> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    /// Create the default config file if it doesn't exist.
    ///
    /// Returns the path to the config file.
    pub fn ensure_exists() -> Result<PathBuf, ConfigFileError> {
        let path = config_file_path();
        Self::ensure_exists_at(&path)?;
        Ok(path)
    }

    /// HTTP Basic credentials for the configured GeoServer.
    pub fn credentials(&self) -> BasicCredentials {
        BasicCredentials::new(&self.geoserver.username, &self.geoserver.password)
    }

    /// Layer catalog built from the `[layer:<uuid>]` sections.
    pub fn layer_repository(&self) -> InMemoryLayerRepository {
        self.layers.iter().map(LayerCatalog::from).collect()
    }
}

impl From<&LayerSettings> for LayerCatalog {
    fn from(settings: &LayerSettings) -> Self {
        LayerCatalog::new(
            settings.id,
            &settings.name,
            &settings.workspace,
            &settings.layer,
        )
    }
}

/// Get the path to the config directory (~/.geoedit).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".geoedit")
}

/// Get the path to the config file (~/.geoedit/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}
