//! Equality and ordering predicates.
//!
//! Only numbers and strings have a natural order. For the other kinds,
//! `less_or_equal` and `greater_or_equal` collapse to [`JsonValue::equals`],
//! so `null <= null` holds while `null < null` does not. There is no
//! `PartialOrd` impl.

use std::cmp::Ordering;

use serde_json::Value;

use crate::json::number;
use crate::json::{JsonValue, Kind};

impl JsonValue {
	/// Same-kind equality. Numbers compare by value, bools never equal numbers,
	/// object key order is ignored, and unknown values equal nothing.
	pub fn equals(&self, other: &JsonValue) -> bool {
		if self.kind == Kind::Unknown || other.kind == Kind::Unknown {
			return false;
		}
		native_eq(&self.object, &other.object)
	}

	/// Strictly less, for number or string pairs only.
	pub fn less_than(&self, other: &JsonValue) -> bool {
		self.natural_order(other) == Some(Ordering::Less)
	}

	/// Strictly greater, for number or string pairs only.
	pub fn greater_than(&self, other: &JsonValue) -> bool {
		self.natural_order(other) == Some(Ordering::Greater)
	}

	/// Less or equal for number or string pairs; [`equals`](Self::equals) otherwise.
	pub fn less_or_equal(&self, other: &JsonValue) -> bool {
		match self.natural_order(other) {
			Some(ordering) => ordering != Ordering::Greater,
			None => self.equals(other),
		}
	}

	/// Greater or equal for number or string pairs; [`equals`](Self::equals) otherwise.
	pub fn greater_or_equal(&self, other: &JsonValue) -> bool {
		match self.natural_order(other) {
			Some(ordering) => ordering != Ordering::Less,
			None => self.equals(other),
		}
	}

	fn natural_order(&self, other: &JsonValue) -> Option<Ordering> {
		match (&self.object, &other.object) {
			(Value::Number(lhs), Value::Number(rhs)) => number::compare(lhs, rhs),
			(Value::String(lhs), Value::String(rhs)) => Some(lhs.cmp(rhs)),
			_ => None,
		}
	}
}

impl PartialEq for JsonValue {
	fn eq(&self, other: &Self) -> bool {
		self.equals(other)
	}
}

fn native_eq(lhs: &Value, rhs: &Value) -> bool {
	match (lhs, rhs) {
		(Value::Null, Value::Null) => true,
		(Value::Bool(l), Value::Bool(r)) => l == r,
		(Value::Number(l), Value::Number(r)) => number::compare(l, r) == Some(Ordering::Equal),
		(Value::String(l), Value::String(r)) => l == r,
		(Value::Array(l), Value::Array(r)) => l.len() == r.len() && l.iter().zip(r).all(|(l, r)| native_eq(l, r)),
		(Value::Object(l), Value::Object(r)) => {
			l.len() == r.len() && l.iter().all(|(key, l)| r.get(key).is_some_and(|r| native_eq(l, r)))
		}
		_ => false,
	}
}

#[cfg(test)]
mod tests;
