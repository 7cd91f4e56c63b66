//! WFS-T 1.1.0 Update transaction building
//!
//! [`build_update`] turns a [`Feature`] edit into a complete
//! `<wfs:Transaction>` document targeting one feature by id, and
//! [`verdict::interpret`] reads the server's answer.

pub mod verdict;

pub use verdict::{interpret, UpdateVerdict};

use quick_xml::escape::escape;

use crate::catalog::LayerCatalog;
use crate::feature::{is_empty_value, value_text, Feature};
use crate::geometry::{to_gml, GeometryError};

/// WFS namespace URI
pub const WFS_NAMESPACE: &str = "http://www.opengis.net/wfs";

/// OGC filter namespace URI
pub const OGC_NAMESPACE: &str = "http://www.opengis.net/ogc";

/// Name of the geometry property on every editable layer.
pub const GEOMETRY_PROPERTY: &str = "geom";

/// Builds the WFS-T Update transaction for one feature.
///
/// The geometry is written under [`GEOMETRY_PROPERTY`]; attribute values are
/// XML-escaped and empty ones (see [`is_empty_value`]) are left out so the
/// server keeps its current value. Output is deterministic for identical
/// input: properties appear in insertion order.
///
/// # Errors
///
/// Returns a [`GeometryError`] if the feature geometry cannot be encoded.
pub fn build_update(layer: &LayerCatalog, feature: &Feature) -> Result<String, GeometryError> {
    let geometry_gml = to_gml(&feature.geometry)?;

    let property_updates = feature
        .properties
        .iter()
        .filter(|(_, value)| !is_empty_value(value))
        .map(|(name, value)| {
            let text = value_text(value);
            format!(
                "<wfs:Property><wfs:Name>{}</wfs:Name><wfs:Value>{}</wfs:Value></wfs:Property>",
                name,
                escape(text.as_str())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<wfs:Transaction version="1.1.0" service="WFS"
    xmlns:wfs="{wfs}"
    xmlns:ogc="{ogc}"
    xmlns:gml="{gml}">
    <wfs:Update typeName="{workspace}:{layer}">
        <wfs:Property>
            <wfs:Name>{geom_name}</wfs:Name>
            <wfs:Value>{geometry_gml}</wfs:Value>
        </wfs:Property>
        {property_updates}
        <ogc:Filter>
            <ogc:FeatureId fid="{fid}"/>
        </ogc:Filter>
    </wfs:Update>
</wfs:Transaction>
"#,
        wfs = WFS_NAMESPACE,
        ogc = OGC_NAMESPACE,
        gml = crate::schema::GML_NAMESPACE,
        workspace = layer.workspace,
        layer = layer.geoserver_layer_name,
        geom_name = GEOMETRY_PROPERTY,
        fid = escape(feature.id.as_str()),
    ))
}
