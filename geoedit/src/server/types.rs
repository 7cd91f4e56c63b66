//! Cartographic server port and its result types

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::http::TransportError;
use crate::catalog::LayerCatalog;
use crate::feature::Feature;
use crate::geometry::GeometryError;
use crate::schema::{LayerSchema, SchemaError};

/// Errors from the schema fetch, or raised internally before an update is
/// folded into [`UpdateOutcome`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServerError {
    /// Connection failure or unexpected HTTP status
    #[error("Error calling GeoServer: {0}")]
    Transport(#[from] TransportError),

    /// Response could not be translated into a layer schema
    #[error("Error parsing DescribeFeatureType response: {0}")]
    Schema(#[from] SchemaError),

    /// Feature geometry could not be encoded
    #[error("Invalid feature geometry: {0}")]
    Geometry(#[from] GeometryError),

    /// Response body is not valid UTF-8
    #[error("Response is not valid UTF-8: {0}")]
    Encoding(String),
}

/// Structured result of a feature update.
///
/// Update failures never surface as errors; they are reported here with
/// `success == false` and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOutcome {
    pub success: bool,
    pub message: String,
}

impl UpdateOutcome {
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Port to a WFS-T capable map server.
///
/// Implementations are stateless between calls and safe to share across
/// threads.
pub trait CartographicServer: Send + Sync {
    /// Fetches and translates the schema of `workspace:layer_name`.
    ///
    /// # Errors
    ///
    /// Transport failures and schema translation failures are returned
    /// as-is; nothing is retried.
    fn layer_schema(&self, workspace: &str, layer_name: &str) -> Result<LayerSchema, ServerError>;

    /// Pushes a geometry/attribute edit for one feature.
    fn update_feature(&self, layer: &LayerCatalog, feature: &Feature) -> UpdateOutcome;
}
