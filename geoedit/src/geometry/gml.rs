//! GML 3 encoding of typed geometries.
//!
//! Every geometry carries an explicit `srsName` and `srsDimension="2"`.
//! Coordinates are written with six decimals and a `.` separator; Rust's
//! float formatting does not depend on the host locale.

use std::fmt::Write;

use super::types::{Geometry, Position};

/// Spatial reference written on every encoded geometry.
pub const SRS_NAME: &str = "EPSG:3857";

/// Encodes a geometry as a GML 3 fragment.
///
/// ```
/// use geoedit::geometry::{gml, Geometry, Position};
///
/// let point = Geometry::Point(Position::new(100.123456789, 200.987654321));
/// assert_eq!(
///     gml::encode(&point),
///     "<gml:Point srsName=\"EPSG:3857\" srsDimension=\"2\">\
///      <gml:pos>100.123457 200.987654</gml:pos></gml:Point>"
/// );
/// ```
pub fn encode(geometry: &Geometry) -> String {
    match geometry {
        Geometry::Point(position) => format!(
            "<gml:Point srsName=\"{}\" srsDimension=\"2\"><gml:pos>{}</gml:pos></gml:Point>",
            SRS_NAME,
            pos(position)
        ),
        Geometry::LineString(points) => format!(
            "<gml:LineString srsName=\"{}\" srsDimension=\"2\"><gml:posList>{}</gml:posList></gml:LineString>",
            SRS_NAME,
            pos_list(points)
        ),
        Geometry::Polygon(rings) => encode_polygon(rings),
    }
}

fn encode_polygon(rings: &[Vec<Position>]) -> String {
    let mut out = format!(
        "<gml:Polygon srsName=\"{}\" srsDimension=\"2\">",
        SRS_NAME
    );

    for (index, ring) in rings.iter().enumerate() {
        let boundary = if index == 0 { "exterior" } else { "interior" };
        // Writing into a String cannot fail
        let _ = write!(
            out,
            "<gml:{boundary}><gml:LinearRing><gml:posList>{}</gml:posList></gml:LinearRing></gml:{boundary}>",
            pos_list(ring)
        );
    }

    out.push_str("</gml:Polygon>");
    out
}

/// Formats one position as `X Y` with six decimals.
///
/// Rounds the exact binary value, so `0.1234565` gives `0.123456` rather
/// than the half-up `0.123457` a decimal formatter would print.
pub fn pos(position: &Position) -> String {
    format!("{:.6} {:.6}", position.x, position.y)
}

/// Formats positions as a space-separated `gml:posList` body.
pub fn pos_list(positions: &[Position]) -> String {
    positions.iter().map(pos).collect::<Vec<_>>().join(" ")
}
