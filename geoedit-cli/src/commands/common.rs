//! Common types and utilities shared across CLI commands.

use geoedit::config::ConfigFile;
use geoedit::feature::Properties;
use geoedit::server::{GeoServerAdapter, ReqwestClient};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use crate::error::CliError;

/// Load configuration from `path`; a missing file yields defaults.
pub fn load_config(path: &Path) -> Result<ConfigFile, CliError> {
    Ok(ConfigFile::load_from(path)?)
}

/// Build a GeoServer adapter from the `[geoserver]` section.
pub fn geoserver(config: &ConfigFile) -> Result<GeoServerAdapter<ReqwestClient>, CliError> {
    let http_client =
        ReqwestClient::with_timeout(config.geoserver.timeout).map_err(CliError::HttpClient)?;
    Ok(GeoServerAdapter::new(
        http_client,
        &config.geoserver.url,
        config.credentials(),
    ))
}

/// Parse the optional `--properties` argument as a JSON object.
pub fn parse_properties(json: Option<&str>) -> Result<Properties, CliError> {
    let Some(json) = json else {
        return Ok(Properties::new());
    };

    serde_json::from_str(json).map_err(|e| CliError::Argument {
        flag: "properties",
        message: format!("expected a JSON object ({})", e),
    })
}

/// Parse a `--geometry` argument, keeping it as text when it is not JSON.
///
/// Text that does not parse is handed on as a JSON string so the drawing
/// service can report it as an invalid geometry.
pub fn geometry_value(json: &str) -> Value {
    serde_json::from_str(json).unwrap_or_else(|_| Value::String(json.to_string()))
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| CliError::Argument {
        flag: "output",
        message: e.to_string(),
    })?;
    println!("{}", json);
    Ok(())
}
