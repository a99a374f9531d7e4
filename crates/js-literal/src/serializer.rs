//! Value -> JavaScript literal serializer.
//!
//! Produces source text that a JavaScript parser evaluates directly to an
//! equivalent value, with no `JSON.parse` step in between:
//!
//! - **Scalars**: `null`, `true`/`false`, unquoted numbers
//! - **Strings**: single-quoted; `\` and `'` backslash-escaped, line breaks
//!   (`\r\n` or `\n`) written as `\n`, everything else passed through as-is
//! - **Lists** and **indexed maps** (keys `0..n-1` in order): `[a, b, c]`
//! - **Other maps**: `{key: value, 'other-key': value}` with bare keys when
//!   they look like identifiers
//! - **Objects**: resolved through their capabilities (see [`crate::object`])
//!
//! # Example
//! ```
//! use js_literal::{serialize, Map, Value};
//!
//! let mut config = Map::new();
//! config.insert("title", "Don't panic");
//! config.insert("answer", 42);
//! config.insert("tags", vec!["a", "b"]);
//!
//! let literal = serialize(&Value::from(config)).unwrap();
//! assert_eq!(literal, r"{title: 'Don\'t panic', answer: 42, tags: ['a', 'b']}");
//! ```

use tracing::{debug, trace};

use crate::error::{Result, SerializeError};
use crate::object::{Object, Timestamp};
use crate::value::{Map, Value};

/// Serialize a value into a JavaScript literal.
///
/// Either the whole tree serializes and the literal is returned, or the
/// first unserializable node (an [`Value::Opaque`] resource or an object
/// with no usable capability) aborts with an error and nothing is returned.
///
/// Recursion depth equals nesting depth; pathologically deep input can
/// exhaust the stack.
pub fn serialize(value: &Value) -> Result<String> {
    let mut out = String::new();
    encode_value(value, &mut out)
        .inspect_err(|err| debug!(error = %err, "literal serialization failed"))?;
    Ok(out)
}

/// Dispatch on the value's variant.
fn encode_value(value: &Value, out: &mut String) -> Result<()> {
    match value {
        Value::Null => out.push_str("null"),
        Value::String(s) => encode_string(s, out),
        Value::Integer(i) => out.push_str(&i.to_string()),
        Value::Float(f) => out.push_str(&format_float(*f)),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::List(items) => encode_list(items, out)?,
        Value::Map(map) if map.is_indexed() => encode_list(map.values(), out)?,
        Value::Map(map) => encode_map(map, out)?,
        Value::Object(object) => encode_object(object.as_object(), out)?,
        Value::Opaque(opaque) => {
            return Err(SerializeError::UnsupportedType {
                type_name: opaque.type_name().to_string(),
            });
        }
    }
    Ok(())
}

/// Emit `[v1, v2, v3]`. An empty sequence gives `[]`.
fn encode_list<'a>(items: impl IntoIterator<Item = &'a Value>, out: &mut String) -> Result<()> {
    out.push('[');
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        encode_value(item, out)?;
    }
    out.push(']');
    Ok(())
}

/// Emit `{k1: v1, k2: v2}` in the map's insertion order.
fn encode_map(map: &Map, out: &mut String) -> Result<()> {
    out.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        encode_key(key, out);
        out.push_str(": ");
        encode_value(value, out)?;
    }
    out.push('}');
    Ok(())
}

/// Resolve an object through the first capability it exposes, in order:
/// custom hook, map export, text rendering, timestamp.
fn encode_object(object: &dyn Object, out: &mut String) -> Result<()> {
    let type_name = object.type_name();

    if let Some(hook) = object.as_custom_serializable() {
        trace!(object = type_name, capability = "CustomSerializable", "resolving object");
        // A string substitute is raw source text, not data.
        return match hook.substitute() {
            Value::String(raw) => {
                out.push_str(&raw);
                Ok(())
            }
            substitute => encode_value(&substitute, out),
        };
    }

    if let Some(exportable) = object.as_map_exportable() {
        trace!(object = type_name, capability = "MapExportable", "resolving object");
        return encode_value(&exportable.export_map(), out);
    }

    if let Some(renderable) = object.as_text_renderable() {
        trace!(object = type_name, capability = "TextRenderable", "resolving object");
        out.push_str(&renderable.render_text());
        return Ok(());
    }

    if let Some(temporal) = object.as_temporal() {
        trace!(object = type_name, capability = "TemporalValue", "resolving object");
        out.push_str("new Date(");
        out.push_str(&format_timestamp_millis(temporal.unix_timestamp()));
        out.push(')');
        return Ok(());
    }

    Err(SerializeError::UnsupportedObject {
        type_name: type_name.to_string(),
    })
}

/// Emit a single-quoted string literal.
///
/// `\` and `'` are backslash-escaped, then `\r\n` and `\n` become the
/// two-character sequence `\n`. Doing both in one pass is equivalent because
/// escaping never introduces a line break. No Unicode escaping is applied and
/// a lone `\r` is left as-is.
fn encode_string(s: &str, out: &mut String) {
    out.reserve(s.len() + 2);
    out.push('\'');
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                out.push_str("\\n");
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
}

/// Emit an object key: bare when it matches `^[A-Za-z_][A-Za-z0-9_]+$`,
/// otherwise as a quoted string.
fn encode_key(key: &str, out: &mut String) {
    if is_bare_key(key) {
        out.push_str(key);
    } else {
        encode_string(key, out);
    }
}

/// `^[A-Za-z_][A-Za-z0-9_]+$`: note the `+`, so single-character keys are
/// always quoted.
fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    let rest = chars.as_str();
    !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Shortest round-trip decimal form (never exponent notation). Non-finite
/// values map to the JavaScript globals `NaN`, `Infinity` and `-Infinity`.
fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f == f64::INFINITY {
        "Infinity".to_string()
    } else if f == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        f.to_string()
    }
}

/// Milliseconds since the epoch, computed exactly from microseconds. The
/// sub-millisecond remainder is kept as a fraction with trailing zeros
/// trimmed: 1700000000 s + 123456 us gives `1700000000123.456`.
fn format_timestamp_millis(timestamp: Timestamp) -> String {
    let total = timestamp.total_micros();
    let whole = total / 1000;
    let fraction = (total % 1000).unsigned_abs();

    let mut out = String::new();
    // Truncation towards zero loses the sign of e.g. -0.5 ms.
    if total < 0 && whole == 0 {
        out.push('-');
    }
    out.push_str(&whole.to_string());
    if fraction != 0 {
        let digits = format!("{:03}", fraction);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}
