//! XSD type to form input type mapping.
//!
//! Evaluated as an ordered rule chain: an exact lookup on the XSD primitive
//! name, then substring heuristics on the raw type name, then `text`.

use super::types::InputType;

/// Exact matches on the local name of an XSD primitive type.
const EXACT_TYPES: &[(&str, InputType)] = &[
    ("string", InputType::Text),
    ("anyURI", InputType::Url),
    // Integer family
    ("int", InputType::Number),
    ("integer", InputType::Number),
    ("long", InputType::Number),
    ("short", InputType::Number),
    ("byte", InputType::Number),
    // Floating and decimal family
    ("double", InputType::Number),
    ("float", InputType::Number),
    ("decimal", InputType::Number),
    // Unsigned and sign-constrained integers
    ("unsignedInt", InputType::Number),
    ("unsignedLong", InputType::Number),
    ("unsignedShort", InputType::Number),
    ("unsignedByte", InputType::Number),
    ("positiveInteger", InputType::Number),
    ("negativeInteger", InputType::Number),
    ("nonPositiveInteger", InputType::Number),
    ("nonNegativeInteger", InputType::Number),
    ("boolean", InputType::Boolean),
    ("date", InputType::Date),
    ("dateTime", InputType::DatetimeLocal),
    ("time", InputType::Time),
    // Enumeration marker used by some GeoServer data stores
    ("select", InputType::Select),
];

/// Substring rules applied, in order, to a lowercased name.
const CONTENT_RULES: &[(&[&str], InputType)] = &[
    (&["description", "comment", "note"], InputType::Textarea),
    (&["email", "mail"], InputType::Email),
];

impl InputType {
    /// Maps an XSD type name such as `xsd:dateTime` to an input type.
    ///
    /// Total: unrecognised names fall through the content heuristics and
    /// finally default to [`InputType::Text`].
    pub fn from_xsd_type(xsd_type: &str) -> Self {
        exact_match(xsd_type)
            .or_else(|| content_match(xsd_type))
            .unwrap_or(InputType::Text)
    }
}

fn exact_match(xsd_type: &str) -> Option<InputType> {
    let local = local_name(xsd_type);
    EXACT_TYPES
        .iter()
        .find(|(name, _)| *name == local)
        .map(|(_, input_type)| *input_type)
}

/// Applies the substring heuristics to any name (type or field).
pub(crate) fn content_match(name: &str) -> Option<InputType> {
    let lowered = name.to_lowercase();
    CONTENT_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| lowered.contains(n)))
        .map(|(_, input_type)| *input_type)
}

/// Strips a namespace prefix (`xsd:`, `xs:`, ...) from a qualified name.
pub(crate) fn local_name(qname: &str) -> &str {
    qname.rsplit_once(':').map_or(qname, |(_, local)| local)
}
