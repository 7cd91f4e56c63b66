//! Drawing service
//!
//! Entry point used by drawing clients: resolves a layer identifier through
//! the [`LayerRepository`] and delegates to a [`CartographicServer`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use crate::catalog::LayerRepository;
use crate::feature::{Feature, Properties};
use crate::geometry::FeatureGeometry;
use crate::schema::LayerSchema;
use crate::server::{CartographicServer, ServerError};

/// Errors on the schema lookup path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawingError {
    #[error("Layer not found: {0}")]
    LayerNotFound(Uuid),

    #[error(transparent)]
    Server(#[from] ServerError),
}

/// Body of a feature update request.
///
/// `geometry` may be a geometry object or a string holding one as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureUpdateRequest {
    pub geometry: Value,
    #[serde(default)]
    pub properties: Properties,
}

/// Result of a feature update, returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureUpdateResult {
    pub success: bool,
    pub feature_id: String,
    pub message: String,
}

impl FeatureUpdateResult {
    fn new(success: bool, feature_id: &str, message: impl Into<String>) -> Self {
        Self {
            success,
            feature_id: feature_id.to_string(),
            message: message.into(),
        }
    }
}

/// Composes the layer catalog and the map server.
pub struct DrawingService<R: LayerRepository, S: CartographicServer> {
    repository: R,
    server: S,
}

impl<R: LayerRepository, S: CartographicServer> DrawingService<R, S> {
    pub fn new(repository: R, server: S) -> Self {
        Self { repository, server }
    }

    /// Schema of a catalogued layer.
    pub fn layer_schema(&self, layer_id: Uuid) -> Result<LayerSchema, DrawingError> {
        let layer = self
            .repository
            .find_by_id(layer_id)
            .ok_or(DrawingError::LayerNotFound(layer_id))?;

        Ok(self
            .server
            .layer_schema(&layer.workspace, &layer.geoserver_layer_name)?)
    }

    /// Updates one feature of a catalogued layer.
    ///
    /// Never fails: every problem is reported in the returned result.
    pub fn update_feature(
        &self,
        layer_id: Uuid,
        feature_id: &str,
        request: FeatureUpdateRequest,
    ) -> FeatureUpdateResult {
        info!(feature_id, layer_id = %layer_id, "Updating feature");

        let Some(layer) = self.repository.find_by_id(layer_id) else {
            return FeatureUpdateResult::new(
                false,
                feature_id,
                format!("Layer not found: {}", layer_id),
            );
        };

        info!(
            layer = %layer.name,
            geoserver_layer = %layer.geoserver_layer_name,
            "Found layer catalog"
        );

        let Some(geometry) = parse_geometry(request.geometry) else {
            return FeatureUpdateResult::new(false, feature_id, "Invalid geometry format");
        };

        let feature = Feature::new(feature_id, geometry).with_properties(request.properties);
        let outcome = self.server.update_feature(&layer, &feature);

        if outcome.success {
            info!(feature_id, layer = %layer.name, "Feature updated successfully");
            FeatureUpdateResult::new(true, feature_id, "Feature updated successfully")
        } else {
            error!(
                feature_id,
                layer = %layer.name,
                reason = %outcome.message,
                "Failed to update feature"
            );
            FeatureUpdateResult::new(false, feature_id, "WFS-T transaction failed")
        }
    }
}

/// Reads a request geometry given either as a JSON object or a JSON string.
fn parse_geometry(value: Value) -> Option<FeatureGeometry> {
    let parsed = match value {
        Value::String(json) => FeatureGeometry::from_json_str(&json),
        object @ Value::Object(_) => FeatureGeometry::from_json_value(object),
        other => {
            error!(kind = value_kind(&other), "Unsupported geometry payload");
            return None;
        }
    };

    parsed
        .map_err(|e| error!(error = %e, "Error parsing geometry"))
        .ok()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
