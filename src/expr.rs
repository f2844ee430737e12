//! Opaque query expressions and their wire form.
//!
//! Expression builders live outside this crate; the driver only carries the
//! finished value and serializes it when a request goes out. Nothing here
//! inspects expression internals.

use crate::Result;
use serde::Serialize;
use serde_json::Value;

/// An already-constructed query expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Expr(Value);

impl Expr {
    /// Wrap a finished expression tree.
    pub fn from_json(value: Value) -> Self {
        Self(value)
    }

    /// The wire text sent as a request body.
    pub(crate) fn to_wire(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Compose expressions into a single array-valued expression.
///
/// The array is emitted as a plain JSON array, so the server evaluates each
/// element as its own query instead of reinterpreting the array as a nested
/// query construct.
pub(crate) fn unescaped_array(exprs: &[Expr]) -> Expr {
    Expr(Value::Array(exprs.iter().map(|e| e.0.clone()).collect()))
}
