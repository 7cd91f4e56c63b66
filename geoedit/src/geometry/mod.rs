//! Feature geometry interpretation and GML encoding
//!
//! Incoming geometries ([`FeatureGeometry`]) carry a lowercase type name and
//! loosely shaped coordinates. [`Geometry::from_feature`] interprets them
//! once into the strict [`Geometry`] union, forcing every position to 2D,
//! and [`gml::encode`] serializes the result.
//!
//! ```
//! use geoedit::geometry::{to_gml, FeatureGeometry};
//!
//! let geometry = FeatureGeometry::from_json_str(
//!     r#"{"type": "Point", "coordinates": ["12.5", 40.25, 3.0]}"#,
//! ).unwrap();
//! assert!(to_gml(&geometry).unwrap().contains("<gml:pos>12.500000 40.250000</gml:pos>"));
//! ```

mod coords;
pub mod gml;
mod types;

pub use coords::{extract_components, RawCoordinates};
pub use types::{Geometry, GeometryError, Position};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Geometry as submitted by a drawing client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureGeometry {
    /// Geometry type name, matched case-insensitively
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: RawCoordinates,
}

impl FeatureGeometry {
    pub fn new(geometry_type: impl Into<String>, coordinates: impl Into<RawCoordinates>) -> Self {
        Self {
            geometry_type: geometry_type.into(),
            coordinates: coordinates.into(),
        }
    }

    /// Parses a GeoJSON-like `{"type": .., "coordinates": ..}` document.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Converts an already-decoded JSON object.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

impl Geometry {
    /// Interprets a client geometry.
    ///
    /// Points must have at least two components. Line and ring positions
    /// that cannot be extracted, or have fewer than two components, are
    /// skipped with a warning instead of failing the whole geometry.
    pub fn from_feature(feature_geometry: &FeatureGeometry) -> Result<Self, GeometryError> {
        let coordinates = &feature_geometry.coordinates;

        match feature_geometry.geometry_type.to_lowercase().as_str() {
            "point" => point(coordinates).map(Geometry::Point),
            "linestring" => positions(coordinates, "LineString").map(Geometry::LineString),
            "polygon" => {
                let rings = coordinates
                    .as_sequence()
                    .ok_or(GeometryError::NotASequence("Polygon"))?;
                if rings.is_empty() {
                    return Err(GeometryError::EmptyPolygon);
                }
                rings
                    .iter()
                    .map(|ring| positions(ring, "LinearRing"))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Geometry::Polygon)
            }
            _ => Err(GeometryError::UnsupportedType(
                feature_geometry.geometry_type.clone(),
            )),
        }
    }
}

/// Interprets and encodes a client geometry in one step.
pub fn to_gml(feature_geometry: &FeatureGeometry) -> Result<String, GeometryError> {
    Geometry::from_feature(feature_geometry).map(|geometry| gml::encode(&geometry))
}

fn point(raw: &RawCoordinates) -> Result<Position, GeometryError> {
    let components = extract_components(raw)?;
    Position::from_components(&components)
        .ok_or(GeometryError::TooFewDimensions(components.len()))
}

fn positions(raw: &RawCoordinates, what: &'static str) -> Result<Vec<Position>, GeometryError> {
    let items = raw.as_sequence().ok_or(GeometryError::NotASequence(what))?;

    let mut result = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match point(item) {
            Ok(position) => result.push(position),
            Err(e) => warn!(geometry = what, index, error = %e, "Skipping malformed position"),
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn geometry(value: serde_json::Value) -> FeatureGeometry {
        FeatureGeometry::from_json_value(value).unwrap()
    }

    #[test]
    fn test_point_forced_to_2d() {
        let g = geometry(json!({"type": "point", "coordinates": [1.0, 2.0, 3.0, 4.0]}));
        assert_eq!(
            Geometry::from_feature(&g).unwrap(),
            Geometry::Point(Position::new(1.0, 2.0))
        );
    }

    #[test]
    fn test_type_is_case_insensitive() {
        let g = geometry(json!({"type": "LineString", "coordinates": [[0, 0], [1, 1]]}));
        assert!(matches!(
            Geometry::from_feature(&g).unwrap(),
            Geometry::LineString(_)
        ));
    }

    #[test]
    fn test_point_with_one_component_fails() {
        let g = geometry(json!({"type": "Point", "coordinates": [1.0]}));
        assert_eq!(
            Geometry::from_feature(&g).unwrap_err(),
            GeometryError::TooFewDimensions(1)
        );
    }

    #[test]
    fn test_point_with_bad_value_fails() {
        let g = geometry(json!({"type": "Point", "coordinates": ["east", 2.0]}));
        assert!(matches!(
            Geometry::from_feature(&g),
            Err(GeometryError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_point_from_bracketed_string() {
        let g = geometry(json!({"type": "Point", "coordinates": "[-59740.77, 5339847.06]"}));
        assert_eq!(
            Geometry::from_feature(&g).unwrap(),
            Geometry::Point(Position::new(-59740.77, 5339847.06))
        );
    }

    #[test]
    fn test_native_arrays_build_geometries() {
        let g = FeatureGeometry::new("point", vec![5.5_f32, 6.5_f32]);
        assert_eq!(
            Geometry::from_feature(&g).unwrap(),
            Geometry::Point(Position::new(5.5, 6.5))
        );

        let line = FeatureGeometry::new(
            "linestring",
            vec![
                RawCoordinates::from(vec![0.0_f64, 0.0, 12.0]),
                RawCoordinates::from("[1, 1]"),
            ],
        );
        assert_eq!(
            Geometry::from_feature(&line).unwrap(),
            Geometry::LineString(vec![Position::new(0.0, 0.0), Position::new(1.0, 1.0)])
        );
    }

    #[test]
    fn test_line_skips_malformed_points() {
        let g = geometry(json!({
            "type": "linestring",
            "coordinates": [[0, 0], [1], ["x", 2], null, [3, 3, 99]]
        }));
        assert_eq!(
            Geometry::from_feature(&g).unwrap(),
            Geometry::LineString(vec![Position::new(0.0, 0.0), Position::new(3.0, 3.0)])
        );
    }

    #[test]
    fn test_line_requires_sequence() {
        let g = geometry(json!({"type": "linestring", "coordinates": "[1, 2]"}));
        assert_eq!(
            Geometry::from_feature(&g).unwrap_err(),
            GeometryError::NotASequence("LineString")
        );
    }

    #[test]
    fn test_polygon_with_holes() {
        let g = geometry(json!({
            "type": "Polygon",
            "coordinates": [
                [[0, 0], [10, 0], [10, 10], [0, 0]],
                [[1, 1], [2, 1], [2, 2], [1, 1]],
                [[5, 5], [6, 5], [6, 6], [5, 5]]
            ]
        }));
        match Geometry::from_feature(&g).unwrap() {
            Geometry::Polygon(rings) => {
                assert_eq!(rings.len(), 3);
                assert_eq!(rings[1][0], Position::new(1.0, 1.0));
            }
            other => panic!("expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_polygon_fails() {
        let g = geometry(json!({"type": "polygon", "coordinates": []}));
        assert_eq!(
            Geometry::from_feature(&g).unwrap_err(),
            GeometryError::EmptyPolygon
        );
    }

    #[test]
    fn test_polygon_ring_must_be_sequence() {
        let g = geometry(json!({"type": "polygon", "coordinates": [5]}));
        assert_eq!(
            Geometry::from_feature(&g).unwrap_err(),
            GeometryError::NotASequence("LinearRing")
        );
    }

    #[test]
    fn test_unsupported_type() {
        let g = geometry(json!({"type": "MultiPoint", "coordinates": [[0, 0]]}));
        assert_eq!(
            Geometry::from_feature(&g).unwrap_err(),
            GeometryError::UnsupportedType("MultiPoint".to_string())
        );
    }

    #[test]
    fn test_to_gml_scenario_point() {
        let g = FeatureGeometry::new("point", vec![100.123456789_f64, 200.987654321]);
        let gml = to_gml(&g).unwrap();
        assert!(gml.contains("<gml:pos>100.123457 200.987654</gml:pos>"));
    }

    #[test]
    fn test_from_json_str_rejects_missing_type() {
        assert!(FeatureGeometry::from_json_str(r#"{"coordinates": [1, 2]}"#).is_err());
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Geometry::Point(Position::new(0.0, 0.0)).type_name(), "point");
        assert_eq!(Geometry::Polygon(vec![]).type_name(), "polygon");
    }
}
