//! Error types for literal serialization.

use std::fmt;

use thiserror::Error;

/// Errors that can occur while turning a value into a JavaScript literal.
#[derive(Error, Debug)]
pub enum SerializeError {
    /// A host resource with no literal representation (e.g. a file handle).
    #[error("cannot serialize a value of type {type_name}")]
    UnsupportedType { type_name: String },

    /// An object implementing none of the serialization capabilities.
    #[error(
        "instance of {type_name} cannot be serialized: it implements none of \
         CustomSerializable, MapExportable, TextRenderable or TemporalValue"
    )]
    UnsupportedObject { type_name: String },

    /// The input string was not valid JSON (`serialize_json` path).
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A `serde::Serialize` implementation failed or produced an unusable shape.
    #[error("{0}")]
    Custom(String),
}

impl serde::ser::Error for SerializeError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        SerializeError::Custom(msg.to_string())
    }
}

/// Convenience alias used throughout js-literal.
pub type Result<T> = std::result::Result<T, SerializeError>;
