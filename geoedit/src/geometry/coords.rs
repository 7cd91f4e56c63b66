//! Raw coordinate payloads and position extraction.
//!
//! Drawing clients send coordinates in several shapes: JSON arrays of
//! numbers, arrays of numeric strings, a single bracketed string such as
//! `"[-59740.77, 5339847.06]"`, or native numeric arrays when the payload is
//! built in-process. [`RawCoordinates`] captures every accepted shape as a
//! tagged union so that the dispatch happens once, at the boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::GeometryError;

/// Coordinate payload as received, before interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum RawCoordinates {
    /// A bare number
    Number(f64),
    /// A string, possibly a bracketed list or a numeric scalar
    Text(String),
    /// Native double-precision array
    Doubles(Vec<f64>),
    /// Native single-precision array
    Floats(Vec<f32>),
    /// Array-like container of further coordinate values
    Sequence(Vec<RawCoordinates>),
    /// Anything else (null, boolean, object)
    Other(Value),
}

impl RawCoordinates {
    /// Name of the payload's dynamic type, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::Doubles(_) => "f64 array",
            Self::Floats(_) => "f32 array",
            Self::Sequence(_) => "array",
            Self::Other(Value::Null) => "null",
            Self::Other(Value::Bool(_)) => "boolean",
            Self::Other(Value::Object(_)) => "object",
            Self::Other(_) => "unknown",
        }
    }

    /// Child values when the payload is an array-like container.
    pub fn as_sequence(&self) -> Option<&[RawCoordinates]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    fn unsupported(&self) -> GeometryError {
        GeometryError::UnsupportedCoordinates {
            value: Value::from(self.clone()).to_string(),
            kind: self.kind(),
        }
    }
}

impl From<Value> for RawCoordinates {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(v) => Self::Number(v),
                None => Self::Other(Value::Number(n)),
            },
            Value::String(s) => Self::Text(s),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            other => Self::Other(other),
        }
    }
}

impl From<RawCoordinates> for Value {
    fn from(raw: RawCoordinates) -> Self {
        match raw {
            RawCoordinates::Number(v) => Value::from(v),
            RawCoordinates::Text(s) => Value::String(s),
            RawCoordinates::Doubles(values) => Value::from(values),
            RawCoordinates::Floats(values) => {
                Value::Array(values.into_iter().map(|v| Value::from(v as f64)).collect())
            }
            RawCoordinates::Sequence(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            RawCoordinates::Other(value) => value,
        }
    }
}

impl From<Vec<f64>> for RawCoordinates {
    fn from(values: Vec<f64>) -> Self {
        Self::Doubles(values)
    }
}

impl From<Vec<f32>> for RawCoordinates {
    fn from(values: Vec<f32>) -> Self {
        Self::Floats(values)
    }
}

impl From<&str> for RawCoordinates {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<RawCoordinates>> for RawCoordinates {
    fn from(items: Vec<RawCoordinates>) -> Self {
        Self::Sequence(items)
    }
}

/// Flattens one position payload into its numeric components.
///
/// All components are returned; callers decide how many dimensions to keep.
pub fn extract_components(raw: &RawCoordinates) -> Result<Vec<f64>, GeometryError> {
    match raw {
        RawCoordinates::Sequence(items) => items.iter().map(scalar).collect(),
        RawCoordinates::Text(text) => {
            let trimmed = text.trim();
            match trimmed
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
            {
                Some(inner) => inner.split(',').map(parse_number).collect(),
                None => Err(raw.unsupported()),
            }
        }
        RawCoordinates::Doubles(values) => values.iter().copied().map(finite).collect(),
        RawCoordinates::Floats(values) => values.iter().map(|v| finite(*v as f64)).collect(),
        RawCoordinates::Number(_) | RawCoordinates::Other(_) => Err(raw.unsupported()),
    }
}

fn scalar(item: &RawCoordinates) -> Result<f64, GeometryError> {
    match item {
        RawCoordinates::Number(v) => finite(*v),
        RawCoordinates::Text(text) => parse_number(text),
        other => Err(other.unsupported()),
    }
}

fn parse_number(text: &str) -> Result<f64, GeometryError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| GeometryError::InvalidNumber(text.to_string()))
        .and_then(finite)
}

fn finite(value: f64) -> Result<f64, GeometryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::InvalidNumber(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_array() {
        let raw = RawCoordinates::from(json!([-59740.77, 5339847.06]));
        assert_eq!(
            extract_components(&raw).unwrap(),
            vec![-59740.77, 5339847.06]
        );
    }

    #[test]
    fn test_mixed_number_and_string_array() {
        let raw = RawCoordinates::from(json!([12, " 34.5 "]));
        assert_eq!(extract_components(&raw).unwrap(), vec![12.0, 34.5]);
    }

    #[test]
    fn test_string_array() {
        let raw = RawCoordinates::from(json!(["1.5", "2.5", "3.5"]));
        assert_eq!(extract_components(&raw).unwrap(), vec![1.5, 2.5, 3.5]);
    }

    #[test]
    fn test_bracketed_string() {
        let raw = RawCoordinates::from("[-59740.77, 5339847.06]");
        assert_eq!(
            extract_components(&raw).unwrap(),
            vec![-59740.77, 5339847.06]
        );
    }

    #[test]
    fn test_unbracketed_string_is_unsupported() {
        let raw = RawCoordinates::from("-59740.77, 5339847.06");
        let err = extract_components(&raw).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::UnsupportedCoordinates { kind: "string", .. }
        ));
    }

    #[test]
    fn test_native_arrays() {
        let doubles = RawCoordinates::from(vec![1.25_f64, 2.5, 3.0]);
        assert_eq!(extract_components(&doubles).unwrap(), vec![1.25, 2.5, 3.0]);

        let floats = RawCoordinates::from(vec![1.25_f32, 2.5]);
        assert_eq!(extract_components(&floats).unwrap(), vec![1.25, 2.5]);
    }

    #[test]
    fn test_non_numeric_string_element() {
        let raw = RawCoordinates::from(json!(["abc", 1.0]));
        assert_eq!(
            extract_components(&raw).unwrap_err(),
            GeometryError::InvalidNumber("abc".to_string())
        );
    }

    #[test]
    fn test_unsupported_element_names_its_type() {
        let raw = RawCoordinates::from(json!([1.0, true]));
        let err = extract_components(&raw).unwrap_err();
        assert_eq!(
            err,
            GeometryError::UnsupportedCoordinates {
                value: "true".to_string(),
                kind: "boolean"
            }
        );
        assert!(err.to_string().contains("boolean"));
    }

    #[test]
    fn test_bare_number_and_object_are_unsupported() {
        for value in [json!(5.0), json!({"x": 1}), Value::Null] {
            let raw = RawCoordinates::from(value);
            assert!(matches!(
                extract_components(&raw),
                Err(GeometryError::UnsupportedCoordinates { .. })
            ));
        }
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let raw = RawCoordinates::from(json!(["NaN", 1.0]));
        assert!(matches!(
            extract_components(&raw),
            Err(GeometryError::InvalidNumber(_))
        ));

        let raw = RawCoordinates::from(vec![f64::INFINITY, 1.0]);
        assert!(matches!(
            extract_components(&raw),
            Err(GeometryError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_nested_sequence_is_not_a_position() {
        let raw = RawCoordinates::from(json!([[1.0, 2.0]]));
        assert!(matches!(
            extract_components(&raw),
            Err(GeometryError::UnsupportedCoordinates { kind: "array", .. })
        ));
    }

    #[test]
    fn test_deserialize_from_json() {
        let raw: RawCoordinates = serde_json::from_str(r#"[[1, 2], "[3, 4]"]"#).unwrap();
        let items = raw.as_sequence().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1], RawCoordinates::Text("[3, 4]".to_string()));
    }
}
