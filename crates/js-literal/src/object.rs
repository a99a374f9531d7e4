//! Host objects and the capabilities the serializer resolves them through.
//!
//! An [`Object`] opts into zero or more capabilities by returning `Some(self)`
//! from the matching `as_*` accessor. The serializer checks them in a fixed
//! order and uses the first one present:
//!
//! 1. [`CustomSerializable`]: the object supplies a substitute value
//! 2. [`MapExportable`]: the object exports itself as a map or list
//! 3. [`TextRenderable`]: the object renders itself as raw source text
//! 4. [`TemporalValue`]: the object is a point in time, emitted as `new Date(ms)`
//!
//! An object with none of them fails with
//! [`SerializeError::UnsupportedObject`](crate::SerializeError::UnsupportedObject).
//!
//! # Example
//!
//! ```
//! use js_literal::{serialize, Object, TextRenderable, Value};
//!
//! #[derive(Debug)]
//! struct Callback(&'static str);
//!
//! impl TextRenderable for Callback {
//!     fn render_text(&self) -> String {
//!         format!("function () {{ {} }}", self.0)
//!     }
//! }
//!
//! impl Object for Callback {
//!     fn as_text_renderable(&self) -> Option<&dyn TextRenderable> {
//!         Some(self)
//!     }
//! }
//!
//! let literal = serialize(&Value::object(Callback("return 1;"))).unwrap();
//! assert_eq!(literal, "function () { return 1; }");
//! ```

use std::fmt;

use crate::value::Value;

/// A host object that may expose serialization capabilities.
///
/// Every accessor defaults to `None`; implement only the ones that apply.
pub trait Object: fmt::Debug + Send + Sync {
    /// Concrete type name, used in error messages.
    fn type_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn as_custom_serializable(&self) -> Option<&dyn CustomSerializable> {
        None
    }

    fn as_map_exportable(&self) -> Option<&dyn MapExportable> {
        None
    }

    fn as_text_renderable(&self) -> Option<&dyn TextRenderable> {
        None
    }

    fn as_temporal(&self) -> Option<&dyn TemporalValue> {
        None
    }
}

/// Supplies a value to serialize in the object's place.
///
/// If the substitute is a [`Value::String`] it is emitted **verbatim**:
/// no quotes, no escaping. This lets a hook inject raw code such as a
/// function expression, and it also means untrusted text must never be
/// returned from here as a plain string. Any other substitute is serialized
/// normally (so a list containing strings gets quoted strings).
pub trait CustomSerializable {
    fn substitute(&self) -> Value;
}

/// Exports the object as a map or list, which is then serialized normally.
pub trait MapExportable {
    fn export_map(&self) -> Value;
}

/// Renders the object as source text, emitted verbatim without quoting.
pub trait TextRenderable {
    fn render_text(&self) -> String;
}

/// A point in time, emitted as a `new Date(<milliseconds>)` expression.
pub trait TemporalValue {
    fn unix_timestamp(&self) -> Timestamp;
}

/// Seconds since the Unix epoch plus a microsecond fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp {
    seconds: i64,
    micros: u32,
}

impl Timestamp {
    /// `micros` is added to `seconds`; values of a million or more (leap
    /// seconds) carry over into the next second.
    pub fn new(seconds: i64, micros: u32) -> Self {
        Self { seconds, micros }
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn subsec_micros(&self) -> u32 {
        self.micros
    }

    /// Exact microseconds since the epoch.
    pub fn total_micros(&self) -> i128 {
        i128::from(self.seconds) * 1_000_000 + i128::from(self.micros)
    }
}

#[cfg(feature = "chrono")]
mod chrono_impls {
    use chrono::{DateTime, NaiveDateTime, TimeZone};

    use super::{Object, TemporalValue, Timestamp};
    use crate::value::Value;

    impl<Tz: TimeZone> TemporalValue for DateTime<Tz> {
        fn unix_timestamp(&self) -> Timestamp {
            Timestamp::new(self.timestamp(), self.timestamp_subsec_micros())
        }
    }

    impl<Tz> Object for DateTime<Tz>
    where
        Tz: TimeZone,
        Tz::Offset: Send + Sync,
    {
        fn as_temporal(&self) -> Option<&dyn TemporalValue> {
            Some(self)
        }
    }

    impl<Tz> From<DateTime<Tz>> for Value
    where
        Tz: TimeZone + 'static,
        Tz::Offset: Send + Sync,
    {
        fn from(datetime: DateTime<Tz>) -> Self {
            Value::object(datetime)
        }
    }

    /// Naive datetimes are taken to be UTC.
    impl TemporalValue for NaiveDateTime {
        fn unix_timestamp(&self) -> Timestamp {
            self.and_utc().unix_timestamp()
        }
    }

    impl Object for NaiveDateTime {
        fn as_temporal(&self) -> Option<&dyn TemporalValue> {
            Some(self)
        }
    }

    impl From<NaiveDateTime> for Value {
        fn from(datetime: NaiveDateTime) -> Self {
            Value::object(datetime)
        }
    }
}
