//! Geometry type definitions

use thiserror::Error;

/// A 2D position in the layer's projected CRS (EPSG:3857).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Easting
    pub x: f64,
    /// Northing
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a position from the first two components of a coordinate.
    ///
    /// Extra dimensions (Z, M) are dropped. Returns `None` when fewer than
    /// two components are available.
    pub fn from_components(components: &[f64]) -> Option<Self> {
        match components {
            [x, y, ..] => Some(Self::new(*x, *y)),
            _ => None,
        }
    }
}

/// Strictly typed geometry, ready for GML encoding.
///
/// Polygon rings are ordered: the first ring is the exterior boundary and
/// every following ring is a hole.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Position),
    LineString(Vec<Position>),
    Polygon(Vec<Vec<Position>>),
}

impl Geometry {
    /// Lowercase geometry type name, as used in feature payloads.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "point",
            Geometry::LineString(_) => "linestring",
            Geometry::Polygon(_) => "polygon",
        }
    }
}

/// Errors that can occur while interpreting or encoding a geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Geometry type other than point, linestring or polygon
    #[error("Unsupported geometry type: {0}")]
    UnsupportedType(String),

    /// Coordinate container or element with an unrecognised shape
    #[error("Unsupported coordinate format: {value} (type: {kind})")]
    UnsupportedCoordinates { value: String, kind: &'static str },

    /// Coordinate element that cannot be read as a finite number
    #[error("Cannot convert coordinate to a number: {0}")]
    InvalidNumber(String),

    /// Position with fewer than two components
    #[error("Point must have at least 2 coordinates, got {0}")]
    TooFewDimensions(usize),

    /// Line or ring coordinates that are not a sequence of positions
    #[error("{0} coordinates must be an array")]
    NotASequence(&'static str),

    /// Polygon without any ring
    #[error("Polygon must have at least one ring")]
    EmptyPolygon,
}
