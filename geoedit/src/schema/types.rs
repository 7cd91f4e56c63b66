//! Layer schema type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Drawing geometry type advertised by a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    Point,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    /// A GML property type this client cannot draw
    Unknown,
}

impl GeometryKind {
    /// Maps a GML property type name (prefix already stripped) to a drawing type.
    ///
    /// ```
    /// use geoedit::schema::GeometryKind;
    ///
    /// assert_eq!(GeometryKind::from_gml_type("PolygonPropertyType"), GeometryKind::Polygon);
    /// assert_eq!(GeometryKind::from_gml_type("CurvePropertyType"), GeometryKind::Unknown);
    /// ```
    pub fn from_gml_type(gml_type: &str) -> Self {
        match gml_type {
            "PointPropertyType" => Self::Point,
            "LineStringPropertyType" => Self::LineString,
            "MultiLineStringPropertyType" => Self::MultiLineString,
            "PolygonPropertyType" => Self::Polygon,
            "MultiPolygonPropertyType" => Self::MultiPolygon,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::MultiLineString => "MultiLineString",
            Self::Polygon => "Polygon",
            Self::MultiPolygon => "MultiPolygon",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTML form input type used by drawing clients to edit an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputType {
    Text,
    Url,
    Number,
    Boolean,
    Date,
    DatetimeLocal,
    Time,
    Select,
    Textarea,
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Url => "url",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::DatetimeLocal => "datetime-local",
            Self::Time => "time",
            Self::Select => "select",
            Self::Textarea => "textarea",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One editable attribute of a layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Human-readable label derived from the field name
    pub label: String,
    pub input_type: InputType,
}

impl Attribute {
    pub fn new(label: impl Into<String>, input_type: InputType) -> Self {
        Self {
            label: label.into(),
            input_type,
        }
    }
}

/// Geometry type plus ordered attribute list of a layer.
///
/// Built fresh from each DescribeFeatureType response and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerSchema {
    pub geometry_type: GeometryKind,
    pub attributes: Vec<Attribute>,
}

impl LayerSchema {
    pub fn new(geometry_type: GeometryKind, attributes: Vec<Attribute>) -> Self {
        Self {
            geometry_type,
            attributes,
        }
    }

    /// Finds an attribute by its label.
    pub fn attribute(&self, label: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.label == label)
    }
}

/// Errors raised while translating a DescribeFeatureType document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// Document is not well-formed, namespace-aware XML
    #[error("Malformed DescribeFeatureType document: {0}")]
    Xml(String),

    /// No GML-typed element in the sequence
    #[error("No geometry type found in DescribeFeatureType")]
    MissingGeometry,
}
