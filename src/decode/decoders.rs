//! Decoder implementations

use super::types::RecordDecoder;
use crate::error::{Error, Result};
use serde_json::Value;

// ============================================================================
// JSON Decoder
// ============================================================================

/// JSON decoder with optional record path extraction
///
/// With a path, a missing or `null` field yields no records and an array
/// yields its elements in order. Any other value at the path is rejected.
#[derive(Debug, Clone, Default)]
pub struct JsonDecoder {
    /// Dot-separated path to the records array
    record_path: Option<String>,
}

impl JsonDecoder {
    /// Create a new JSON decoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a JSON decoder with a record path
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            record_path: Some(path.into()),
        }
    }

    /// Decoder for history responses (`{"items": [...]}`)
    pub fn history() -> Self {
        Self::with_path("items")
    }

    /// The configured record path
    pub fn record_path(&self) -> Option<&str> {
        self.record_path.as_deref()
    }

    fn extract_records(&self, value: &Value) -> Result<Vec<Value>> {
        let Some(path) = &self.record_path else {
            // No path - treat entire response as records
            return match value {
                Value::Array(arr) => Ok(arr.clone()),
                _ => Ok(vec![value.clone()]),
            };
        };

        if !value.is_object() {
            return Err(Error::decode(format!(
                "Expected a JSON object with '{path}', got {}",
                type_name(value)
            )));
        }

        match extract_simple_path(value, path) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(arr)) => Ok(arr.clone()),
            Some(other) => Err(Error::decode(format!(
                "Expected '{path}' to be an array, got {}",
                type_name(other)
            ))),
        }
    }
}

impl RecordDecoder for JsonDecoder {
    fn decode(&self, value: &Value) -> Result<Vec<Value>> {
        self.extract_records(value)
    }
}

/// Follow a dot-separated path (`$.` prefix allowed) through nested objects
fn extract_simple_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let path = path.strip_prefix("$.").unwrap_or(path);
    path.split('.')
        .try_fold(value, |current, part| current.get(part))
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
