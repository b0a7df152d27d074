//! Decoder traits

use crate::error::Result;
use serde_json::Value;

/// Trait for decoding response bodies into records
pub trait RecordDecoder: Send + Sync {
    /// Extract the records from a parsed response body
    fn decode(&self, value: &Value) -> Result<Vec<Value>>;
}
