//! # JSON Primitive Coercion
//!
//! Turn a primitive JSON node into a value of a requested kind.
//!
//! A JSON reader only ever produces four primitive kinds (`bool`, `i64`,
//! `f64`, `text`), which is why those are the standard matrix origins.
//! Coercion is "read the node as its natural kind, then run the matrix".

use crate::error::ConvertError;
use crate::kind::Kind;
use crate::matrix::Matrix;
use crate::value::Value;
use serde_json::Value as Json;

impl Value {
    /// Read a primitive JSON node as its natural kind.
    ///
    /// - `true`/`false` → `bool`
    /// - integers that fit `i64` → `i64`
    /// - every other number → `f64`
    /// - strings → `text`
    ///
    /// Null, arrays and objects have no primitive kind.
    pub fn from_json(node: &Json) -> Result<Self, ConvertError> {
        match node {
            Json::Bool(b) => Ok(Value::Bool(*b)),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Ok(Value::I64(i)),
                None => n
                    .as_f64()
                    .map(Value::F64)
                    .ok_or_else(|| ConvertError::UnsupportedJson(n.to_string())),
            },
            Json::String(s) => Ok(Value::Text(s.clone())),
            Json::Null => Err(ConvertError::UnsupportedJson("null".to_string())),
            Json::Array(_) => Err(ConvertError::UnsupportedJson("array".to_string())),
            Json::Object(_) => Err(ConvertError::UnsupportedJson("object".to_string())),
        }
    }
}

impl Matrix {
    /// Coerce a primitive JSON node into kind `to`.
    pub fn coerce_json(&self, node: &Json, to: Kind) -> Result<Value, ConvertError> {
        let value = Value::from_json(node)?;
        self.convert(value, to)
    }
}

// =============================================================================
// TESTS
// =============================================================================
