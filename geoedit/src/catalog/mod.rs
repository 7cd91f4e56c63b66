//! Layer catalog lookup
//!
//! Resolves a layer identifier to the workspace and GeoServer layer name
//! needed to address it. Persistence of the catalog is owned elsewhere; the
//! [`LayerRepository`] port lets callers plug in their own store, and
//! [`InMemoryLayerRepository`] serves entries loaded from the config file.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Routing coordinates of one published layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerCatalog {
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// GeoServer workspace holding the layer
    pub workspace: String,
    /// Layer name inside the workspace
    pub geoserver_layer_name: String,
}

impl LayerCatalog {
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        workspace: impl Into<String>,
        geoserver_layer_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            workspace: workspace.into(),
            geoserver_layer_name: geoserver_layer_name.into(),
        }
    }

    /// Qualified type name, `workspace:layer`.
    pub fn type_name(&self) -> String {
        format!("{}:{}", self.workspace, self.geoserver_layer_name)
    }
}

/// Read-only access to the layer catalog.
pub trait LayerRepository: Send + Sync {
    /// Looks up a layer by identifier.
    fn find_by_id(&self, id: Uuid) -> Option<LayerCatalog>;
}

/// Catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLayerRepository {
    layers: HashMap<Uuid, LayerCatalog>,
}

impl InMemoryLayerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a layer, replacing any entry with the same identifier.
    pub fn insert(&mut self, layer: LayerCatalog) {
        self.layers.insert(layer.id, layer);
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl FromIterator<LayerCatalog> for InMemoryLayerRepository {
    fn from_iter<I: IntoIterator<Item = LayerCatalog>>(iter: I) -> Self {
        Self {
            layers: iter.into_iter().map(|layer| (layer.id, layer)).collect(),
        }
    }
}

impl LayerRepository for InMemoryLayerRepository {
    fn find_by_id(&self, id: Uuid) -> Option<LayerCatalog> {
        self.layers.get(&id).cloned()
    }
}
