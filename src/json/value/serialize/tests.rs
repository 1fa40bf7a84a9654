use serde::Deserialize;
use test_case::test_case;

use crate::json::{JsonError, JsonValue, Kind, ReadOptions, WriteOptions};

#[test_case(JsonValue::from("plain text"), "plain text"; "string is bare")]
#[test_case(JsonValue::from(42), "42"; "integer")]
#[test_case(JsonValue::from(1.5), "1.5"; "float")]
#[test_case(JsonValue::from(false), "false"; "bool")]
#[test_case(JsonValue::null(), "null"; "null")]
#[test_case(JsonValue::parse(r#"{"b": [1, "x"], "a": null}"#), r#"{"b":[1,"x"],"a":null}"#; "object keeps order")]
fn raw_string_compact(value: JsonValue, expected: &str) {
	assert_eq!(value.raw_string(WriteOptions::compact()).as_deref(), Some(expected));
}

#[test]
fn raw_string_pretty_indents_containers() {
	let value = JsonValue::parse(r#"{"a": [1]}"#);
	let text = value.raw_string(WriteOptions::pretty()).expect("object encodes");
	assert_eq!(text, "{\n  \"a\": [\n    1\n  ]\n}");
	assert_eq!(value.to_string(), text);
}

#[test]
fn unknown_has_no_text() {
	let value = JsonValue::from(f64::INFINITY);
	assert_eq!(value.kind(), Kind::Unknown);
	assert_eq!(value.raw_string(WriteOptions::default()), None);
	assert_eq!(value.to_string(), "unknown");
	assert_eq!(format!("{value:?}"), "unknown");
}

#[test]
fn raw_data_decodes_back_to_equal_value() {
	let value = JsonValue::parse(r#"{"name": "Ravi", "tags": ["a", "b"], "score": 9.5}"#);
	let data = value.raw_data(WriteOptions::compact()).expect("encodes");
	let decoded = JsonValue::from_slice(&data, ReadOptions::strict());
	assert!(decoded.error().is_none());
	assert_eq!(decoded, value);
}

#[test_case(JsonValue::from("s"); "string")]
#[test_case(JsonValue::from(2.5); "float")]
#[test_case(JsonValue::from(u64::MAX); "largest integer")]
#[test_case(JsonValue::from(true); "bool")]
#[test_case(JsonValue::null(); "null")]
fn scalar_roots_decode_back_to_equal_value(value: JsonValue) {
	let data = value.raw_data(WriteOptions::compact()).expect("encodes");
	let decoded = JsonValue::from_slice(&data, ReadOptions::default());
	assert!(decoded.error().is_none());
	assert_eq!(decoded.kind(), value.kind());
	assert_eq!(decoded, value);
}

#[test]
fn float_text_keeps_fraction() {
	let value = JsonValue::from(1.0);
	assert_eq!(value.raw_string(WriteOptions::compact()).as_deref(), Some("1.0"));
	assert_eq!(value.string_value(), "1.0");
}

#[test]
fn raw_data_encodes_fragments() {
	let data = JsonValue::from("x").raw_data(WriteOptions::compact()).expect("encodes");
	assert_eq!(data, b"\"x\"");
}

#[test]
fn serde_round_trip_through_struct() {
	#[derive(Deserialize)]
	struct Envelope {
		status: JsonValue,
		data: JsonValue,
	}

	let envelope: Envelope = serde_json::from_str(r#"{"status": true, "data": [{"City": "Pune"}]}"#).expect("decodes");
	assert!(envelope.status.bool_value());
	assert_eq!(envelope.data.get(crate::json_path!(0, "City")).string_value(), "Pune");

	let encoded = serde_json::to_string(&envelope.data).expect("encodes");
	assert_eq!(encoded, r#"[{"City":"Pune"}]"#);
}

#[test]
fn decode_error_is_reported() {
	let value = JsonValue::parse("{not json");
	assert!(matches!(value.error(), Some(JsonError::Decode { .. })));
	assert_eq!(value.raw_string(WriteOptions::compact()).as_deref(), Some("null"));
}
