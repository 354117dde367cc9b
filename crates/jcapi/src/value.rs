//! Coercion helpers for generic JSON values.
//!
//! Array extraction is strict and scalar extraction is lenient. Existing
//! callers rely on missing or mistyped scalars reading as zero values while a
//! malformed list is reported.

use serde_json::Value;

use crate::Result;
use crate::error::{Error, ShapeError};

/// Extract an array of strings.
///
/// `null` reads as an empty list.
///
/// # Errors
///
/// Fails if the value is not an array or any element is not a string.
pub fn extract_string_array(input: &Value) -> Result<Vec<String>> {
    let items = match input {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        other => {
            return Err(ShapeError::NotAnArray {
                found: type_name(other),
            }
            .into());
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(Error::from(ShapeError::NotAString {
                index,
                found: type_name(other),
            })),
        })
        .collect()
}

/// The string value, or `""` for any other JSON type.
pub fn string_or_default(input: &Value) -> String {
    input.as_str().map(str::to_string).unwrap_or_default()
}

/// The value as `u16`, or `0` for anything that is not an integer in range.
pub fn u16_or_default(input: &Value) -> u16 {
    input
        .as_u64()
        .and_then(|n| u16::try_from(n).ok())
        .unwrap_or_default()
}

/// The boolean value, or `false` for any other JSON type.
pub fn bool_or_default(input: &Value) -> bool {
    input.as_bool().unwrap_or_default()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_array_ok() {
        let tags = extract_string_array(&json!(["a", "b"])).unwrap();
        assert_eq!(tags, vec!["a", "b"]);
    }

    #[test]
    fn string_array_null_is_empty() {
        assert!(extract_string_array(&Value::Null).unwrap().is_empty());
    }

    #[test]
    fn string_array_rejects_non_string_element() {
        let err = extract_string_array(&json!(["a", 2])).unwrap_err();
        assert!(matches!(
            err,
            Error::Shape(ShapeError::NotAString { index: 1, .. })
        ));
    }

    #[test]
    fn string_array_rejects_non_array() {
        let err = extract_string_array(&json!("a")).unwrap_err();
        assert!(matches!(err, Error::Shape(ShapeError::NotAnArray { .. })));
    }

    #[test]
    fn string_lenient() {
        assert_eq!(string_or_default(&json!("alice")), "alice");
        assert_eq!(string_or_default(&json!(42)), "");
        assert_eq!(string_or_default(&Value::Null), "");
    }

    #[test]
    fn u16_lenient() {
        assert_eq!(u16_or_default(&json!(5001)), 5001);
        assert_eq!(u16_or_default(&json!("5001")), 0);
        assert_eq!(u16_or_default(&json!(70000)), 0);
        assert_eq!(u16_or_default(&json!(-1)), 0);
        assert_eq!(u16_or_default(&json!(1.5)), 0);
    }

    #[test]
    fn bool_lenient() {
        assert!(bool_or_default(&json!(true)));
        assert!(!bool_or_default(&json!("true")));
    }
}
