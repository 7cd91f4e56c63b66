//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants and the `ConfigFile::default()`
//! implementation.

use super::settings::*;

/// Default GeoServer base URL (stock local install).
pub const DEFAULT_GEOSERVER_URL: &str = "http://localhost:8080/geoserver";

/// Default GeoServer administrator account.
pub const DEFAULT_GEOSERVER_USERNAME: &str = "admin";

/// Default GeoServer administrator password.
pub const DEFAULT_GEOSERVER_PASSWORD: &str = "geoserver";

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = crate::server::DEFAULT_TIMEOUT_SECS;

/// Prefix of catalogued layer sections, followed by the layer UUID.
pub const LAYER_SECTION_PREFIX: &str = "layer:";

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            geoserver: GeoServerSettings::default(),
            logging: LoggingSettings { file: None },
            layers: Vec::new(),
        }
    }
}

impl Default for GeoServerSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_GEOSERVER_URL.to_string(),
            username: DEFAULT_GEOSERVER_USERNAME.to_string(),
            password: DEFAULT_GEOSERVER_PASSWORD.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}
