//! INI parsing logic for converting an `Ini` object into a `ConfigFile`.
//!
//! Starts from defaults and overlays values found in the INI, validating
//! each one.

use ini::{Ini, Properties};
use std::path::PathBuf;
use uuid::Uuid;

use super::defaults::LAYER_SECTION_PREFIX;
use super::file::ConfigFileError;
use super::settings::{ConfigFile, LayerSettings};

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [geoserver] section
    if let Some(section) = ini.section(Some("geoserver")) {
        if let Some(v) = section.get("url") {
            let v = v.trim();
            if !(v.starts_with("http://") || v.starts_with("https://")) {
                return Err(ConfigFileError::InvalidValue {
                    section: "geoserver".to_string(),
                    key: "url".to_string(),
                    value: v.to_string(),
                    reason: "must be an http:// or https:// URL".to_string(),
                });
            }
            config.geoserver.url = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = section.get("username") {
            config.geoserver.username = v.trim().to_string();
        }
        if let Some(v) = section.get("password") {
            config.geoserver.password = v.to_string();
        }
        if let Some(v) = section.get("timeout") {
            let timeout: u64 = v.trim().parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "geoserver".to_string(),
                key: "timeout".to_string(),
                value: v.to_string(),
                reason: "must be a positive number of seconds".to_string(),
            })?;
            if timeout == 0 {
                return Err(ConfigFileError::InvalidValue {
                    section: "geoserver".to_string(),
                    key: "timeout".to_string(),
                    value: v.to_string(),
                    reason: "must be a positive number of seconds".to_string(),
                });
            }
            config.geoserver.timeout = timeout;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = Some(expand_tilde(v));
            }
        }
    }

    // [layer:<uuid>] sections, in file order
    for (name, section) in ini.iter() {
        let Some(id) = name.and_then(|n| n.strip_prefix(LAYER_SECTION_PREFIX)) else {
            continue;
        };
        config.layers.push(parse_layer(id.trim(), section)?);
    }

    Ok(config)
}

fn parse_layer(id: &str, section: &Properties) -> Result<LayerSettings, ConfigFileError> {
    let section_name = format!("{}{}", LAYER_SECTION_PREFIX, id);

    let uuid = Uuid::parse_str(id).map_err(|_| ConfigFileError::InvalidValue {
        section: section_name.clone(),
        key: "id".to_string(),
        value: id.to_string(),
        reason: "section name must end with a UUID".to_string(),
    })?;

    let required = |key: &str| -> Result<String, ConfigFileError> {
        match section.get(key).map(str::trim) {
            Some(v) if !v.is_empty() => Ok(v.to_string()),
            _ => Err(ConfigFileError::InvalidValue {
                section: section_name.clone(),
                key: key.to_string(),
                value: String::new(),
                reason: "required".to_string(),
            }),
        }
    };

    let workspace = required("workspace")?;
    let layer = required("layer")?;
    let name = match section.get("name").map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => layer.clone(),
    };

    Ok(LayerSettings {
        id: uuid,
        name,
        workspace,
        layer,
    })
}

/// Expand `~/` to the user's home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
