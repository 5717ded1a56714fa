//! Stream Option Validation
//!
//! Dynamic stream options ride on [`serde_json::Value`] so callers can hand
//! in loosely-typed configuration objects. Exactly three keys are
//! recognized: `encoding`, `highWaterMark`, and `objectMode`. Unrecognized
//! keys pass through unchecked; a configuration that carries only unknown
//! keys validates silently.
//!
//! Keys are checked in enumeration order and the first failure wins, so the
//! error a caller sees for a multiply-invalid configuration is determined by
//! insertion order (the crate enables `serde_json`'s `preserve_order`
//! feature for exactly this reason).

use serde_json::Value;
use thiserror::Error;

/// The option keys a stream configuration may carry
pub const RECOGNIZED_OPTIONS: [&str; 3] = ["objectMode", "highWaterMark", "encoding"];

/// Validation error for stream options
///
/// There is exactly one error taxonomy: a type mismatch naming the
/// offending option and the value that was received.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    /// The supplied options value was not a key-value object
    #[error("invalid input argument. Options must be an object. Value: `{0}`")]
    NotAnObject(Value),

    /// A recognized option failed its type check
    #[error("invalid option. `{option}` option must be {expected}. Option: `{value}`")]
    TypeMismatch {
        option: &'static str,
        expected: &'static str,
        value: Value,
    },
}

/// Validate stream options
///
/// Returns `Ok(())` if every recognized option present in `options` passes
/// its type check, or the first error encountered in key order. Pure
/// function; the input is never modified.
pub fn validate(options: &Value) -> Result<(), OptionsError> {
    let map = match options {
        Value::Object(map) => map,
        other => return Err(OptionsError::NotAnObject(other.clone())),
    };
    for (key, value) in map {
        match key.as_str() {
            "encoding" => check_encoding(value)?,
            "highWaterMark" => check_high_water_mark(value)?,
            "objectMode" => check_object_mode(value)?,
            // Unrecognized keys have no registered checker
            _ => {}
        }
    }
    Ok(())
}

/// Copy the recognized options into a new configuration object
///
/// Used by reusable factories to capture a private snapshot of a base
/// configuration: extraneous keys are dropped, and later mutation of the
/// caller's object cannot reach streams created from the copy. A non-object
/// input is returned verbatim so the validation error surfaces when a
/// stream is eventually created from it.
pub fn copy_options(options: &Value) -> Value {
    match options {
        Value::Object(map) => {
            let mut copy = serde_json::Map::new();
            for key in RECOGNIZED_OPTIONS {
                if let Some(value) = map.get(key) {
                    copy.insert(key.to_string(), value.clone());
                }
            }
            Value::Object(copy)
        }
        other => other.clone(),
    }
}

/// The `encoding` option must be a string or null (no encoding configured)
fn check_encoding(value: &Value) -> Result<(), OptionsError> {
    match value {
        Value::String(_) | Value::Null => Ok(()),
        other => Err(OptionsError::TypeMismatch {
            option: "encoding",
            expected: "a string or null",
            value: other.clone(),
        }),
    }
}

/// The `highWaterMark` option must be a nonnegative finite number
fn check_high_water_mark(value: &Value) -> Result<(), OptionsError> {
    match value.as_f64() {
        Some(number) if number.is_finite() && number >= 0.0 => Ok(()),
        _ => Err(OptionsError::TypeMismatch {
            option: "highWaterMark",
            expected: "a nonnegative number",
            value: value.clone(),
        }),
    }
}

/// The `objectMode` option must be a boolean
fn check_object_mode(value: &Value) -> Result<(), OptionsError> {
    match value {
        Value::Bool(_) => Ok(()),
        other => Err(OptionsError::TypeMismatch {
            option: "objectMode",
            expected: "a boolean",
            value: other.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_copy_options_keeps_only_recognized_keys() {
        let base = json!({
            "objectMode": true,
            "highWaterMark": 64,
            "encoding": "utf8",
            "apiKey": "secret",
            "retries": 3
        });
        let copy = copy_options(&base);
        let map = copy.as_object().unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map["objectMode"], json!(true));
        assert_eq!(map["highWaterMark"], json!(64));
        assert_eq!(map["encoding"], json!("utf8"));
        assert!(!map.contains_key("apiKey"));
    }

    #[test]
    fn test_copy_options_with_empty_object() {
        let copy = copy_options(&json!({}));
        assert!(copy.as_object().unwrap().is_empty());
    }

    #[test]
    fn test_copy_options_keeps_non_object_verbatim() {
        assert_eq!(copy_options(&json!(42)), json!(42));
        assert_eq!(copy_options(&Value::Null), Value::Null);
    }

    #[test]
    fn test_error_message_names_option_and_value() {
        let err = validate(&json!({ "encoding": 5 })).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("encoding"));
        assert!(message.contains('5'));
    }
}
