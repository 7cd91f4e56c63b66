//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::defaults::LAYER_SECTION_PREFIX;
use super::settings::{ConfigFile, LayerSettings};

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let log_file = config
        .logging
        .file
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();
    let layers: String = config.layers.iter().map(layer_section).collect();

    format!(
        r#"[geoserver]
; Base URL of the GeoServer instance (without a trailing /wfs)
url = {}
; HTTP Basic credentials used for DescribeFeatureType and WFS-T requests
username = {}
password = {}
; Request timeout in seconds (default: {})
timeout = {}

[logging]
; Log file path. Leave empty to log to stderr only.
file = {}

; Catalogued layers, one section per layer:
;   [layer:<uuid>]
;   name = Display name (defaults to the layer name)
;   workspace = GeoServer workspace
;   layer = Layer name inside the workspace
{}"#,
        config.geoserver.url,
        config.geoserver.username,
        config.geoserver.password,
        super::defaults::DEFAULT_TIMEOUT_SECS,
        config.geoserver.timeout,
        log_file,
        layers,
    )
}

fn layer_section(layer: &LayerSettings) -> String {
    format!(
        "\n[{}{}]\nname = {}\nworkspace = {}\nlayer = {}\n",
        LAYER_SECTION_PREFIX, layer.id, layer.name, layer.workspace, layer.layer
    )
}

/// Render a path, collapsing the home directory back to `~`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::super::settings::{ConfigFile, LayerSettings};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use uuid::Uuid;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");

        let mut config = ConfigFile::default();
        config.geoserver.url = "https://maps.example.org/geoserver".to_string();
        config.geoserver.username = "editor".to_string();
        config.geoserver.password = "hunter2".to_string();
        config.geoserver.timeout = 45;
        config.logging.file = Some(PathBuf::from("/tmp/geoedit-test.log"));
        config.layers.push(LayerSettings {
            id: Uuid::from_u128(7),
            name: "Parcels".to_string(),
            workspace: "cadastre".to_string(),
            layer: "parcels".to_string(),
        });

        config.save_to(&config_path).unwrap();

        let loaded = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_backslashes_survive_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");

        let mut config = ConfigFile::default();
        config.geoserver.password = r"back\slash\n".to_string();
        config.logging.file = Some(PathBuf::from(r"C:\logs\geoedit.log"));

        config.save_to(&config_path).unwrap();

        let loaded = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(loaded.geoserver.password, r"back\slash\n");
        assert_eq!(
            loaded.logging.file,
            Some(PathBuf::from(r"C:\logs\geoedit.log"))
        );
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_default_config_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.ini");

        ConfigFile::default().save_to(&config_path).unwrap();

        let content = std::fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[geoserver]"));
        assert!(content.contains("; Catalogued layers"));
        assert_eq!(
            ConfigFile::load_from(&config_path).unwrap(),
            ConfigFile::default()
        );
    }
}
