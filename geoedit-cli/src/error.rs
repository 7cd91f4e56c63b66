//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use geoedit::config::ConfigFileError;
use geoedit::drawing::DrawingError;
use geoedit::geometry::GeometryError;
use geoedit::server::{ServerError, TransportError};
use std::fmt;
use std::process;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Malformed command-line argument
    Argument { flag: &'static str, message: String },
    /// Failed to create HTTP client
    HttpClient(TransportError),
    /// Map server call failed
    Server(ServerError),
    /// Layer lookup failed
    Drawing(DrawingError),
    /// Geometry could not be encoded
    Geometry(GeometryError),
    /// The map server did not apply the update
    UpdateFailed(String),
    /// Failed to write configuration file
    FileWrite { path: String, error: ConfigFileError },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Server(ServerError::Transport(_))
            | CliError::Drawing(DrawingError::Server(ServerError::Transport(_))) => {
                eprintln!();
                eprintln!("Common issues:");
                eprintln!("  1. GeoServer not reachable: check [geoserver] url in config.ini");
                eprintln!("  2. Authentication: check [geoserver] username and password");
                eprintln!("  3. Layer not published: check the workspace and layer names");
            }
            CliError::Drawing(DrawingError::LayerNotFound(_)) => {
                eprintln!();
                eprintln!("Layers are catalogued in config.ini as [layer:<uuid>] sections.");
                eprintln!("Use 'geoedit config path' to locate the file.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Argument { flag, message } => write!(f, "Invalid --{}: {}", flag, message),
            CliError::HttpClient(e) => write!(f, "{}", e),
            CliError::Server(e) => write!(f, "{}", e),
            CliError::Drawing(e) => write!(f, "{}", e),
            CliError::Geometry(e) => write!(f, "Invalid geometry: {}", e),
            CliError::UpdateFailed(msg) => write!(f, "Update failed: {}", msg),
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::HttpClient(e) => Some(e),
            CliError::Server(e) => Some(e),
            CliError::Drawing(e) => Some(e),
            CliError::Geometry(e) => Some(e),
            CliError::FileWrite { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<ServerError> for CliError {
    fn from(e: ServerError) -> Self {
        CliError::Server(e)
    }
}

impl From<DrawingError> for CliError {
    fn from(e: DrawingError) -> Self {
        CliError::Drawing(e)
    }
}

impl From<GeometryError> for CliError {
    fn from(e: GeometryError) -> Self {
        CliError::Geometry(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use uuid::Uuid;

    #[test]
    fn test_argument_error_names_flag() {
        let err = CliError::Argument {
            flag: "properties",
            message: "expected a JSON object".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid --properties: expected a JSON object");
    }

    #[test]
    fn test_drawing_error_passes_message_through() {
        let err = CliError::from(DrawingError::LayerNotFound(Uuid::nil()));
        assert_eq!(
            err.to_string(),
            "Layer not found: 00000000-0000-0000-0000-000000000000"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_config_error_conversion() {
        let err = CliError::from(ConfigFileError::WriteError("disk full".to_string()));
        assert!(err.to_string().starts_with("Configuration error:"));
        assert!(err.to_string().contains("disk full"));
    }
}
