use test_case::test_case;

use crate::json::JsonValue;

#[test_case(JsonValue::from(5), JsonValue::from(5), true; "same integer")]
#[test_case(JsonValue::from(1), JsonValue::from(1.0), true; "integer and float")]
#[test_case(JsonValue::from(-3), JsonValue::from(-3_i64), true; "signed widths")]
#[test_case(JsonValue::from(true), JsonValue::from(1), false; "bool and number")]
#[test_case(JsonValue::from("5"), JsonValue::from(5), false; "text and number")]
#[test_case(JsonValue::null(), JsonValue::null(), true; "nulls")]
#[test_case(JsonValue::parse("[1, 2]"), JsonValue::parse("[1, 2.0]"), true; "arrays")]
#[test_case(JsonValue::parse("[1, 2]"), JsonValue::parse("[2, 1]"), false; "array order matters")]
#[test_case(JsonValue::parse(r#"{"a": 1, "b": 2}"#), JsonValue::parse(r#"{"b": 2, "a": 1}"#), true; "object key order ignored")]
#[test_case(JsonValue::parse(r#"{"a": 1}"#), JsonValue::parse(r#"{"a": 1, "b": 2}"#), false; "object extra key")]
fn equality(lhs: JsonValue, rhs: JsonValue, expected: bool) {
	assert_eq!(lhs.equals(&rhs), expected);
	assert_eq!(rhs.equals(&lhs), expected);
	assert_eq!(lhs == rhs, expected);
}

#[test]
fn unknown_equals_nothing() {
	let unknown = JsonValue::from(f64::NAN);
	assert!(!unknown.equals(&unknown.clone()));
	assert!(!unknown.equals(&JsonValue::null()));
	assert!(!unknown.less_or_equal(&unknown.clone()));
}

#[test]
fn numbers_order_across_representations() {
	let small = JsonValue::from(-1);
	let big = JsonValue::from(u64::MAX);
	let half = JsonValue::from(0.5);

	assert!(small.less_than(&half));
	assert!(half.less_than(&big));
	assert!(big.greater_than(&small));
	assert!(small.less_or_equal(&JsonValue::from(-1.0)));
	assert!(small.greater_or_equal(&JsonValue::from(-1.0)));
	assert!(!small.greater_than(&small));
}

#[test]
fn strings_order_lexically() {
	let apple = JsonValue::from("apple");
	let pear = JsonValue::from("pear");
	assert!(apple.less_than(&pear));
	assert!(pear.greater_or_equal(&apple));
	assert!(apple.less_or_equal(&apple.clone()));
}

#[test]
fn mixed_kinds_never_order() {
	let number = JsonValue::from(1);
	let text = JsonValue::from("1");
	assert!(!number.less_than(&text));
	assert!(!number.greater_than(&text));
	assert!(!number.less_or_equal(&JsonValue::null()));
	assert!(!number.greater_or_equal(&JsonValue::null()));
}

#[test]
fn non_ordered_kinds_fall_back_to_equality() {
	let null = JsonValue::null();
	assert!(null.less_or_equal(&JsonValue::null()));
	assert!(null.greater_or_equal(&JsonValue::null()));
	assert!(!null.less_than(&JsonValue::null()));
	assert!(!null.greater_than(&JsonValue::null()));

	let yes = JsonValue::from(true);
	let no = JsonValue::from(false);
	assert!(yes.less_or_equal(&JsonValue::from(true)));
	assert!(!yes.less_or_equal(&no));
	assert!(!no.less_than(&yes));

	let list = JsonValue::parse("[1]");
	assert!(list.greater_or_equal(&JsonValue::parse("[1]")));
	assert!(!list.greater_or_equal(&JsonValue::parse("[0]")));
}
