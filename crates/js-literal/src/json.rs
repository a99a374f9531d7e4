//! JSON bridge: `serde_json::Value` -> [`Value`], and JSON text -> literal.
//!
//! Object key order survives because `serde_json` is built with the
//! `preserve_order` feature (IndexMap-backed `Map`).

use serde_json::Number;

use crate::error::Result;
use crate::serializer::serialize;
use crate::value::Value;

/// Parse a JSON string and serialize it as a JavaScript literal.
///
/// Returns an error if the input is not valid JSON.
///
/// ```
/// let literal = js_literal::serialize_json(r#"{"name":"O'Brien","ids":[1,2]}"#).unwrap();
/// assert_eq!(literal, r"{name: 'O\'Brien', ids: [1, 2]}");
/// ```
pub fn serialize_json(json: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    serialize(&Value::from(value))
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => from_number(&n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => items.into_iter().map(Value::from).collect(),
            serde_json::Value::Object(map) => Value::Map(map.into_iter().collect()),
        }
    }
}

/// Integers in `i64` range stay integers; larger unsigned integers and
/// fractional numbers become floats.
fn from_number(n: &Number) -> Value {
    if let Some(i) = n.as_i64() {
        return Value::Integer(i);
    }
    if let Some(u) = n.as_u64() {
        return Value::from(u);
    }
    n.as_f64().map_or(Value::Null, Value::Float)
}
