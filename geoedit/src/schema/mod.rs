//! DescribeFeatureType schema translation
//!
//! Turns the XML Schema returned by a WFS `DescribeFeatureType` request into
//! a [`LayerSchema`]: the layer's drawing geometry type plus the ordered list
//! of user-editable attributes with their inferred form input types.
//!
//! # Example
//!
//! ```
//! use geoedit::schema::{parse_describe_feature_type, GeometryKind, InputType};
//!
//! let xml = r#"<?xml version="1.0"?>
//! <xsd:schema xmlns:xsd="http://www.w3.org/2001/XMLSchema"
//!             xmlns:gml="http://www.opengis.net/gml">
//!   <xsd:complexType name="roadsType">
//!     <xsd:complexContent>
//!       <xsd:extension base="gml:AbstractFeatureType">
//!         <xsd:sequence>
//!           <xsd:element name="geom" type="gml:LineStringPropertyType"/>
//!           <xsd:element name="street_name" type="xsd:string"/>
//!         </xsd:sequence>
//!       </xsd:extension>
//!     </xsd:complexContent>
//!   </xsd:complexType>
//! </xsd:schema>"#;
//!
//! let schema = parse_describe_feature_type(xml).unwrap();
//! assert_eq!(schema.geometry_type, GeometryKind::LineString);
//! assert_eq!(schema.attributes[0].label, "Street Name");
//! assert_eq!(schema.attributes[0].input_type, InputType::Text);
//! ```

mod mapping;
mod types;

pub use types::{Attribute, GeometryKind, InputType, LayerSchema, SchemaError};

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, QName, ResolveResult};
use quick_xml::reader::NsReader;
use tracing::{debug, trace};

/// XML Schema namespace URI
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// GML namespace URI
pub const GML_NAMESPACE: &str = "http://www.opengis.net/gml";

/// Field names holding internal identifiers, never offered for editing.
const IGNORED_FIELDS: [&str; 3] = ["fid", "id", "gid"];

/// Parses a DescribeFeatureType document into a [`LayerSchema`].
///
/// Only `xsd:element` nodes that are direct children of an `xsd:sequence`
/// are considered. The GML-typed element becomes the schema's geometry type
/// (the last one wins if several are present); every other element becomes
/// an attribute, except internal identifier fields.
///
/// # Errors
///
/// - [`SchemaError::Xml`] if the document is not well-formed XML
/// - [`SchemaError::MissingGeometry`] if no GML-typed element was found
pub fn parse_describe_feature_type(xml: &str) -> Result<LayerSchema, SchemaError> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut builder = SchemaBuilder::default();
    // One entry per open element: whether it is an xsd:sequence
    let mut open_elements: Vec<bool> = Vec::new();
    let mut saw_root = false;

    loop {
        let (ns, event) = reader
            .read_resolved_event()
            .map_err(|e| SchemaError::Xml(e.to_string()))?;
        let is_xsd = is_bound_to(&ns, XSD_NAMESPACE);

        match event {
            Event::Start(e) => {
                saw_root = true;
                let local = e.local_name();
                if is_xsd && local.as_ref() == b"element" && open_elements.last() == Some(&true) {
                    visit_element(&reader, &e, &mut builder)?;
                }
                open_elements.push(is_xsd && local.as_ref() == b"sequence");
            }
            Event::Empty(e) => {
                saw_root = true;
                if is_xsd
                    && e.local_name().as_ref() == b"element"
                    && open_elements.last() == Some(&true)
                {
                    visit_element(&reader, &e, &mut builder)?;
                }
            }
            Event::End(_) => {
                open_elements.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(SchemaError::Xml("document has no root element".to_string()));
    }
    if !open_elements.is_empty() {
        return Err(SchemaError::Xml(format!(
            "unexpected end of document with {} unclosed element(s)",
            open_elements.len()
        )));
    }

    builder.build()
}

/// Derives a display label from a raw field name.
///
/// Splits on underscores and upper-cases the first letter of each segment:
/// `street_name` becomes `Street Name`. Empty segments are dropped.
pub fn labelize(field_name: &str) -> String {
    field_name
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Returns true for identifier fields that must not appear as attributes.
pub fn is_ignored_field(field_name: &str) -> bool {
    let lowered = field_name.to_lowercase();
    IGNORED_FIELDS.contains(&lowered.as_str())
}

fn is_bound_to(ns: &ResolveResult, uri: &str) -> bool {
    matches!(ns, ResolveResult::Bound(Namespace(bound)) if *bound == uri.as_bytes())
}

fn visit_element(
    reader: &NsReader<&[u8]>,
    element: &BytesStart,
    builder: &mut SchemaBuilder,
) -> Result<(), SchemaError> {
    let name = attribute_value(element, "name")?.unwrap_or_default();
    let type_name = attribute_value(element, "type")?.unwrap_or_default();

    let (type_ns, _) = reader.resolve_element(QName(type_name.as_bytes()));
    let is_gml = is_bound_to(&type_ns, GML_NAMESPACE) || type_name.contains("gml:");

    if is_gml {
        builder.set_geometry(&name, &type_name);
    } else {
        builder.push_field(&name, &type_name);
    }
    Ok(())
}

fn attribute_value(element: &BytesStart, key: &str) -> Result<Option<String>, SchemaError> {
    let attribute = element
        .try_get_attribute(key)
        .map_err(|e| SchemaError::Xml(e.to_string()))?;

    match attribute {
        Some(attr) => {
            let value = attr
                .unescape_value()
                .map_err(|e| SchemaError::Xml(e.to_string()))?;
            Ok(Some(value.into_owned()))
        }
        None => Ok(None),
    }
}

#[derive(Default)]
struct SchemaBuilder {
    geometry: Option<GeometryKind>,
    attributes: Vec<Attribute>,
}

impl SchemaBuilder {
    fn set_geometry(&mut self, field_name: &str, type_name: &str) {
        let kind = GeometryKind::from_gml_type(mapping::local_name(type_name));
        if let Some(previous) = self.geometry {
            debug!(
                previous = %previous,
                replacement = %kind,
                "Multiple geometry fields in schema, keeping the last one"
            );
        }
        trace!(field = field_name, geometry = %kind, "Geometry field");
        self.geometry = Some(kind);
    }

    fn push_field(&mut self, field_name: &str, type_name: &str) {
        if is_ignored_field(field_name) {
            trace!(field = field_name, "Skipping identifier field");
            return;
        }

        let mut input_type = InputType::from_xsd_type(type_name);
        // Plain text fields get a second chance from their name
        if input_type == InputType::Text {
            if let Some(hinted) = mapping::content_match(field_name) {
                input_type = hinted;
            }
        }

        trace!(
            field = field_name,
            xsd_type = type_name,
            input_type = %input_type,
            "Attribute field"
        );
        self.attributes
            .push(Attribute::new(labelize(field_name), input_type));
    }

    fn build(self) -> Result<LayerSchema, SchemaError> {
        let geometry = self.geometry.ok_or(SchemaError::MissingGeometry)?;
        debug!(
            geometry = %geometry,
            attributes = self.attributes.len(),
            "Parsed DescribeFeatureType"
        );
        Ok(LayerSchema::new(geometry, self.attributes))
    }
}
