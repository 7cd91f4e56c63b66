//! Feature edits submitted for a WFS-T update.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::geometry::FeatureGeometry;

/// Attribute values keyed by field name, in insertion order.
pub type Properties = IndexMap<String, Value>;

/// A single spatial record to update on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Server feature identifier, e.g. `parcels.42`
    pub id: String,
    pub geometry: FeatureGeometry,
    #[serde(default)]
    pub properties: Properties,
}

impl Feature {
    pub fn new(id: impl Into<String>, geometry: FeatureGeometry) -> Self {
        Self {
            id: id.into(),
            geometry,
            properties: Properties::new(),
        }
    }

    /// Adds or replaces an attribute value, keeping first-insertion order.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }
}

/// Returns true when a value should not be sent to the server.
///
/// Null, blank strings and the literal strings `null` / `undefined` (any
/// case, surrounding whitespace ignored) count as empty.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed.is_empty()
                || trimmed.eq_ignore_ascii_case("null")
                || trimmed.eq_ignore_ascii_case("undefined")
        }
        _ => false,
    }
}

/// Renders a property value as the text sent in `wfs:Value`.
///
/// Strings are used verbatim; other values use their compact JSON text.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
