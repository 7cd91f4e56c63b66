//! User configuration for geoedit.
//!
//! Configuration lives in `~/.geoedit/config.ini` and is split into
//! three kinds of section:
//!
//! - `[geoserver]` - base URL, credentials and timeout
//! - `[logging]` - optional log file
//! - `[layer:<uuid>]` - one per catalogued layer
//!
//! # Example
//!
//! ```
//! use geoedit::config::ConfigFile;
//!
//! let config = ConfigFile::default();
//! assert_eq!(config.geoserver.url, "http://localhost:8080/geoserver");
//! assert!(config.layers.is_empty());
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    DEFAULT_GEOSERVER_PASSWORD, DEFAULT_GEOSERVER_URL, DEFAULT_GEOSERVER_USERNAME,
    DEFAULT_TIMEOUT_SECS, LAYER_SECTION_PREFIX,
};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, GeoServerSettings, LayerSettings, LoggingSettings};
