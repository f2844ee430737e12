//! Wire payload parsing.
//!
//! Successful responses nest their payload under a single `resource` field;
//! this module parses the raw body and unwraps that field. Parsing is a pure
//! transform: leaf values keep their wire type, so date-like strings stay
//! strings and are reconstructed into domain types by layers above the
//! driver.

use crate::{Error, Result};
use serde_json::Value;

/// Field under which a successful response nests its payload.
const RESOURCE_KEY: &str = "resource";

/// Parse a raw response body into a structured value tree.
pub(crate) fn parse_body(raw: &str) -> Result<Value> {
    serde_json::from_str(raw)
        .map_err(|e| Error::InvalidResponse(format!("malformed response body: {e}")))
}

/// Unwrap the `resource` field of a successful response.
///
/// A success body without `resource` is structurally broken, same as an
/// unparseable one, and reports as [`Error::InvalidResponse`].
pub(crate) fn extract_resource(parsed: Value) -> Result<Value> {
    match parsed {
        Value::Object(mut map) => map.remove(RESOURCE_KEY).ok_or_else(|| {
            Error::InvalidResponse(format!("response object has no \"{RESOURCE_KEY}\" field"))
        }),
        other => Err(Error::InvalidResponse(format!(
            "expected a response object, got {}",
            json_kind(&other)
        ))),
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
