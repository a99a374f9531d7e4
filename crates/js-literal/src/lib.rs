//! # js-literal
//!
//! Serialize dynamic values into **JavaScript source literals**: text that can
//! be pasted straight into generated code and evaluates to an equivalent
//! value, without a `JSON.parse` round trip.
//!
//! Unlike JSON, the output uses literal syntax: bare object keys where they
//! are valid identifiers, single-quoted strings, unquoted numbers and
//! `new Date(ms)` for timestamps.
//!
//! ## Quick start
//!
//! ```rust
//! use js_literal::{serialize, Map, Value};
//!
//! let mut i18n = Map::new();
//! i18n.insert("greeting", "Hello\nWorld");
//! i18n.insert("non-ASCII 'key", "Süßholz");
//! i18n.insert("sizes", vec![2, 3, 128]);
//!
//! let literal = serialize(&Value::from(i18n)).unwrap();
//! assert_eq!(
//!     literal,
//!     r"{greeting: 'Hello\nWorld', 'non-ASCII \'key': 'Süßholz', sizes: [2, 3, 128]}"
//! );
//! ```
//!
//! ## Raw output
//!
//! Two paths emit text **verbatim**, without quoting or escaping: a
//! [`CustomSerializable`] hook that returns a [`Value::String`], and a
//! [`TextRenderable`] object. They exist to inject code fragments (function
//! expressions, references to globals); never route untrusted text through
//! them.
//!
//! ## Modules
//!
//! - [`serializer`]: `Value` -> literal string (the core)
//! - [`value`]: the `Value` tree and its ordered `Map`
//! - [`object`]: host objects and their serialization capabilities
//! - [`ser`]: `serde::Serialize` -> `Value`
//! - [`json`]: `serde_json::Value` -> `Value`, JSON text -> literal
//! - [`error`]: error types

pub mod error;
pub mod json;
pub mod object;
pub mod ser;
pub mod serializer;
pub mod value;

pub use error::{Result, SerializeError};
pub use json::serialize_json;
pub use object::{
    CustomSerializable, MapExportable, Object, TemporalValue, TextRenderable, Timestamp,
};
pub use ser::{to_literal, to_value};
pub use serializer::serialize;
pub use value::{Map, ObjectRef, Opaque, Value};
