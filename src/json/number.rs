//! Numeric coercion helpers shared by the typed accessors and comparisons.

use std::cmp::Ordering;

use num_cmp::NumCmp;
use serde_json::Number;

#[derive(Debug, Clone, Copy)]
enum Repr {
	PositiveInteger(u64),
	NegativeInteger(i64),
	Float(f64),
}

fn repr(number: &Number) -> Repr {
	if let Some(u) = number.as_u64() {
		Repr::PositiveInteger(u)
	} else if let Some(i) = number.as_i64() {
		Repr::NegativeInteger(i)
	} else {
		Repr::Float(number.as_f64().unwrap_or(0.0))
	}
}

/// Compare two numbers by value across integer and float representations.
pub(crate) fn compare(lhs: &Number, rhs: &Number) -> Option<Ordering> {
	match (repr(lhs), repr(rhs)) {
		(Repr::PositiveInteger(a), Repr::PositiveInteger(b)) => Some(a.cmp(&b)),
		(Repr::NegativeInteger(a), Repr::NegativeInteger(b)) => Some(a.cmp(&b)),
		(Repr::Float(a), Repr::Float(b)) => a.partial_cmp(&b),
		(Repr::PositiveInteger(a), Repr::NegativeInteger(b)) => NumCmp::num_cmp(a, b),
		(Repr::PositiveInteger(a), Repr::Float(b)) => NumCmp::num_cmp(a, b),
		(Repr::NegativeInteger(a), Repr::PositiveInteger(b)) => NumCmp::num_cmp(a, b),
		(Repr::NegativeInteger(a), Repr::Float(b)) => NumCmp::num_cmp(a, b),
		(Repr::Float(a), Repr::PositiveInteger(b)) => NumCmp::num_cmp(a, b),
		(Repr::Float(a), Repr::NegativeInteger(b)) => NumCmp::num_cmp(a, b),
	}
}

pub(crate) fn zero() -> Number {
	Number::from(0_u8)
}

pub(crate) fn from_bool(value: bool) -> Number {
	Number::from(u8::from(value))
}

pub(crate) fn is_truthy(number: &Number) -> bool {
	compare(number, &zero()) != Some(Ordering::Equal)
}

/// Parse the whole of `text` as a number, ignoring surrounding whitespace.
///
/// Integers keep an integer representation; anything with a fraction or
/// exponent becomes a float. Trailing garbage and non-finite results reject.
pub(crate) fn parse_number(text: &str) -> Option<Number> {
	let text = text.trim();
	if text.is_empty() {
		return None;
	}
	if let Ok(u) = text.parse::<u64>() {
		return Some(Number::from(u));
	}
	if let Ok(i) = text.parse::<i64>() {
		return Some(Number::from(i));
	}
	if !text.bytes().all(|byte| byte.is_ascii_digit() || matches!(byte, b'+' | b'-' | b'.' | b'e' | b'E')) {
		return None;
	}
	text.parse::<f64>().ok().and_then(Number::from_f64)
}

/// Truthiness of free text: skip leading whitespace, one sign, and leading
/// zeros, then `Y`, `y`, `T`, `t`, or a digit `1`-`9` means true.
pub(crate) fn is_truthy_text(text: &str) -> bool {
	let rest = text.trim_start();
	let rest = rest.strip_prefix(['+', '-']).unwrap_or(rest);
	let rest = rest.trim_start_matches('0');
	matches!(rest.chars().next(), Some('Y' | 'y' | 'T' | 't' | '1'..='9'))
}

/// Conversion from a JSON number into a fixed-width primitive.
///
/// Integer sources cast with wrapping, float sources with saturating
/// truncation toward zero.
pub(crate) trait FromNumber: Sized {
	fn from_number(number: &Number) -> Self;
}

macro_rules! impl_from_number {
	($($ty:ty),* $(,)?) => {
		$(
			impl FromNumber for $ty {
				#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap, clippy::cast_precision_loss)]
				fn from_number(number: &Number) -> Self {
					match repr(number) {
						Repr::PositiveInteger(u) => u as $ty,
						Repr::NegativeInteger(i) => i as $ty,
						Repr::Float(f) => f as $ty,
					}
				}
			}
		)*
	};
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
