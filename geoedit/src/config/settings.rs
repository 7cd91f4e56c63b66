//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;
use uuid::Uuid;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// GeoServer connection settings
    pub geoserver: GeoServerSettings,
    /// Logging settings
    pub logging: LoggingSettings,
    /// Catalogued layers, one per `[layer:<uuid>]` section
    pub layers: Vec<LayerSettings>,
}

/// GeoServer connection configuration.
#[derive(Clone, PartialEq)]
pub struct GeoServerSettings {
    /// Base URL, e.g. `http://localhost:8080/geoserver`
    pub url: String,
    /// HTTP Basic user name
    pub username: String,
    /// HTTP Basic password
    pub password: String,
    /// Timeout in seconds for HTTP requests.
    pub timeout: u64,
}

impl std::fmt::Debug for GeoServerSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoServerSettings")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path. When unset, logs go to stderr only.
    pub file: Option<PathBuf>,
}

/// One catalogued layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSettings {
    /// Layer identifier used by drawing clients
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// GeoServer workspace
    pub workspace: String,
    /// Layer name inside the workspace
    pub layer: String,
}
