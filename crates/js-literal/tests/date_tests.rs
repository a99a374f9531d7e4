//! chrono integration: DateTime / NaiveDateTime -> `new Date(ms)`.
#![cfg(feature = "chrono")]

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use js_literal::{serialize, Map, Value};

fn literal(value: impl Into<Value>) -> String {
    serialize(&value.into()).unwrap()
}

#[test]
fn utc_datetime_with_microseconds() {
    let at = Utc.timestamp_opt(1_700_000_000, 123_456_000).unwrap();
    assert_eq!(literal(at), "new Date(1700000000123.456)");
}

#[test]
fn utc_datetime_whole_milliseconds() {
    let at = Utc.timestamp_opt(1_700_000_000, 5_000_000).unwrap();
    assert_eq!(literal(at), "new Date(1700000000005)");
}

#[test]
fn utc_datetime_whole_seconds() {
    let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    assert_eq!(literal(at), "new Date(1700000000000)");
}

#[test]
fn nanoseconds_below_a_microsecond_are_dropped() {
    let at = Utc.timestamp_opt(1, 999).unwrap();
    assert_eq!(literal(at), "new Date(1000)");
}

#[test]
fn datetime_before_epoch() {
    let at = Utc.timestamp_opt(-1, 500_000_000).unwrap();
    assert_eq!(literal(at), "new Date(-500)");
}

#[test]
fn offset_does_not_change_the_instant() {
    let utc = Utc.timestamp_opt(1_700_000_000, 250_000_000).unwrap();
    let paris = utc.with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap());
    assert_eq!(literal(paris), literal(utc));
    assert_eq!(literal(paris), "new Date(1700000000250)");
}

#[test]
fn naive_datetime_is_taken_as_utc() {
    let naive = DateTime::from_timestamp(1_700_000_000, 42_000)
        .unwrap()
        .naive_utc();
    assert_eq!(literal(naive), "new Date(1700000000000.042)");
}

#[test]
fn datetime_inside_map() {
    let created = Utc.timestamp_opt(86_400, 0).unwrap();
    let map = Map::from([
        ("title", Value::from("Launch")),
        ("created", Value::from(created)),
    ]);
    assert_eq!(literal(map), "{title: 'Launch', created: new Date(86400000)}");
}
