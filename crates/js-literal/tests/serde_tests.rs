//! serde bridge tests: derived types -> Value -> literal.
use std::collections::BTreeMap;

use js_literal::{to_literal, to_value, SerializeError, Value};
use serde::{Serialize, Serializer};

// ============================================================================
// Structs
// ============================================================================

#[derive(Serialize)]
struct Config {
    title: String,
    retries: u32,
    ratio: f64,
    enabled: bool,
    tags: Vec<String>,
    parent: Option<String>,
}

#[test]
fn struct_becomes_object_literal() {
    let config = Config {
        title: "Main".into(),
        retries: 3,
        ratio: 0.5,
        enabled: true,
        tags: vec!["a".into(), "b".into()],
        parent: None,
    };
    assert_eq!(
        to_literal(&config).unwrap(),
        "{title: 'Main', retries: 3, ratio: 0.5, enabled: true, tags: ['a', 'b'], parent: null}"
    );
}

#[derive(Serialize)]
struct Wrapper(String);

#[derive(Serialize)]
struct Unit;

#[derive(Serialize)]
struct Pair(i32, &'static str);

#[test]
fn newtype_struct_is_transparent() {
    assert_eq!(to_literal(&Wrapper("it's".into())).unwrap(), r"'it\'s'");
}

#[test]
fn unit_struct_is_null() {
    assert_eq!(to_literal(&Unit).unwrap(), "null");
}

#[test]
fn tuple_struct_is_list() {
    assert_eq!(to_literal(&Pair(1, "x")).unwrap(), "[1, 'x']");
}

#[derive(Serialize)]
struct Renamed {
    #[serde(rename = "data-id")]
    data_id: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    hidden: Option<u8>,
}

#[test]
fn serde_attributes_are_honored() {
    let value = Renamed {
        data_id: 7,
        hidden: None,
    };
    assert_eq!(to_literal(&value).unwrap(), "{'data-id': 7}");
}

// ============================================================================
// Enums
// ============================================================================

#[derive(Serialize)]
enum Shape {
    Empty,
    Circle(f64),
    Line(i32, i32),
    Rect { width: u32, height: u32 },
}

#[test]
fn unit_variant_is_its_name() {
    assert_eq!(to_literal(&Shape::Empty).unwrap(), "'Empty'");
}

#[test]
fn newtype_variant_is_tagged() {
    assert_eq!(to_literal(&Shape::Circle(2.5)).unwrap(), "{Circle: 2.5}");
}

#[test]
fn tuple_variant_is_tagged_list() {
    assert_eq!(to_literal(&Shape::Line(1, 2)).unwrap(), "{Line: [1, 2]}");
}

#[test]
fn struct_variant_is_tagged_object() {
    let shape = Shape::Rect {
        width: 3,
        height: 4,
    };
    assert_eq!(to_literal(&shape).unwrap(), "{Rect: {width: 3, height: 4}}");
}

// ============================================================================
// Maps and scalars
// ============================================================================

#[test]
fn integer_keyed_map_from_zero_is_list() {
    let map: BTreeMap<u32, &str> = [(0, "a"), (1, "b")].into_iter().collect();
    assert_eq!(to_literal(&map).unwrap(), "['a', 'b']");
}

#[test]
fn sparse_integer_keyed_map_is_object() {
    let map: BTreeMap<u32, &str> = [(1, "x"), (5, "y")].into_iter().collect();
    assert_eq!(to_literal(&map).unwrap(), "{'1': 'x', '5': 'y'}");
}

#[test]
fn char_keys_are_allowed() {
    let map: BTreeMap<char, u8> = [('k', 1)].into_iter().collect();
    assert_eq!(to_literal(&map).unwrap(), "{'k': 1}");
}

#[test]
fn bool_keys_are_rejected() {
    let map: BTreeMap<bool, u8> = [(true, 1)].into_iter().collect();
    let err = to_literal(&map).unwrap_err();
    assert!(matches!(err, SerializeError::Custom(_)));
    assert!(err.to_string().contains("map key must be a string or an integer"));
}

#[test]
fn large_u64_becomes_float() {
    assert_eq!(to_value(&u64::MAX).unwrap(), Value::Float(u64::MAX as f64));
}

#[test]
fn wide_integers_in_range_stay_integers() {
    assert_eq!(to_value(&42i128).unwrap(), Value::Integer(42));
    assert_eq!(to_value(&7u128).unwrap(), Value::Integer(7));
}

#[test]
fn unit_and_option() {
    assert_eq!(to_literal(&()).unwrap(), "null");
    assert_eq!(to_literal(&Some("x")).unwrap(), "'x'");
    assert_eq!(to_literal(&None::<u8>).unwrap(), "null");
}

#[test]
fn tuples_are_lists() {
    assert_eq!(to_literal(&(1, "two", 3.5)).unwrap(), "[1, 'two', 3.5]");
}

#[test]
fn unsized_str_is_accepted() {
    let s: &str = "line\r\nbreak";
    assert_eq!(to_literal(s).unwrap(), r"'line\nbreak'");
}

// ============================================================================
// Errors
// ============================================================================

struct Broken;

impl Serialize for Broken {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("broken on purpose"))
    }
}

#[test]
fn serialize_impl_error_is_propagated() {
    let err = to_literal(&vec![Broken]).unwrap_err();
    assert!(matches!(err, SerializeError::Custom(ref msg) if msg == "broken on purpose"));
}
