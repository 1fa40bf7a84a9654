use indexmap::IndexMap;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde_json::{Map, Number, Value};
use url::Url;

use crate::json::{JsonValue, Kind};
use crate::json::number::{self, FromNumber};

/// Characters escaped before URL parsing; `%` is kept so existing escapes survive.
const URL_ESCAPE: &AsciiSet = &CONTROLS
	.add(b' ')
	.add(b'"')
	.add(b'<')
	.add(b'>')
	.add(b'\\')
	.add(b'^')
	.add(b'`')
	.add(b'{')
	.add(b'|')
	.add(b'}');

impl JsonValue {
	/// Boolean, only for [`Kind::Bool`].
	pub fn as_bool(&self) -> Option<bool> {
		match self.object {
			Value::Bool(value) => Some(value),
			_ => None,
		}
	}

	/// Boolean coerced from bools, numbers (non-zero) and strings (`"true"`,
	/// `"yes"`, `"1"`, ...); `false` for everything else.
	pub fn bool_value(&self) -> bool {
		match &self.object {
			Value::Bool(value) => *value,
			Value::Number(value) => number::is_truthy(value),
			Value::String(value) => number::is_truthy_text(value),
			_ => false,
		}
	}

	/// Store a boolean, or null for `None`.
	pub fn set_bool(&mut self, value: impl Into<Option<bool>>) {
		let value: Option<bool> = value.into();
		*self = JsonValue::from(value);
	}

	/// Borrowed text, only for [`Kind::String`].
	pub fn as_str(&self) -> Option<&str> {
		match &self.object {
			Value::String(value) => Some(value),
			_ => None,
		}
	}

	/// Text, with numbers and bools formatted; empty for everything else.
	///
	/// Floats keep their fraction, so `1.0` reads as `"1.0"`.
	pub fn string_value(&self) -> String {
		match &self.object {
			Value::String(value) => value.clone(),
			Value::Number(value) => value.to_string(),
			Value::Bool(value) => value.to_string(),
			_ => String::new(),
		}
	}

	/// Store text, or null for `None`.
	pub fn set_string(&mut self, value: impl Into<Option<String>>) {
		let value: Option<String> = value.into();
		*self = JsonValue::from(value);
	}

	/// Number for numbers and bools (`0`/`1`).
	pub fn as_number(&self) -> Option<Number> {
		match &self.object {
			Value::Number(value) => Some(value.clone()),
			Value::Bool(value) => Some(number::from_bool(*value)),
			_ => None,
		}
	}

	/// Number coerced from numbers, bools, and fully numeric strings; `0` otherwise.
	pub fn number_value(&self) -> Number {
		match &self.object {
			Value::Number(value) => value.clone(),
			Value::Bool(value) => number::from_bool(*value),
			Value::String(value) => number::parse_number(value).unwrap_or_else(number::zero),
			_ => number::zero(),
		}
	}

	/// Store a number, or null for `None`.
	pub fn set_number(&mut self, value: impl Into<Option<Number>>) {
		let value: Option<Number> = value.into();
		*self = JsonValue::from(value);
	}

	/// `Some(())` only for [`Kind::Null`].
	pub fn as_null(&self) -> Option<()> {
		self.is_null().then_some(())
	}

	/// Whether this holds an actual null (error sentinels included).
	pub fn is_null(&self) -> bool {
		self.kind == Kind::Null
	}

	/// Replace with null.
	pub fn set_null(&mut self) {
		self.set_object(Value::Null);
	}

	/// URL parsed from a string after escaping characters URLs cannot carry.
	pub fn as_url(&self) -> Option<Url> {
		let text = self.as_str()?;
		let escaped = utf8_percent_encode(text, URL_ESCAPE).to_string();
		Url::parse(&escaped).ok()
	}

	/// Store a URL as text, or null for `None`.
	pub fn set_url(&mut self, value: impl Into<Option<Url>>) {
		let value: Option<Url> = value.into();
		self.set_string(value.map(String::from));
	}

	/// Children wrapped as values, only for arrays.
	pub fn as_array(&self) -> Option<Vec<JsonValue>> {
		match &self.object {
			Value::Array(items) => Some(items.iter().cloned().map(JsonValue::from).collect()),
			_ => None,
		}
	}

	/// Children wrapped as values; empty unless this is an array.
	pub fn array_value(&self) -> Vec<JsonValue> {
		self.as_array().unwrap_or_default()
	}

	/// Native array, only for arrays.
	pub fn as_array_object(&self) -> Option<&Vec<Value>> {
		match &self.object {
			Value::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Replace with a whole native array, or null for `None`.
	pub fn set_array_object(&mut self, items: impl Into<Option<Vec<Value>>>) {
		let items: Option<Vec<Value>> = items.into();
		self.set_object(items.map_or(Value::Null, Value::Array));
	}

	/// Members wrapped as values in insertion order, only for objects.
	pub fn as_dictionary(&self) -> Option<IndexMap<String, JsonValue>> {
		match &self.object {
			Value::Object(map) => Some(map.iter().map(|(key, item)| (key.clone(), JsonValue::from(item.clone()))).collect()),
			_ => None,
		}
	}

	/// Members wrapped as values; empty unless this is an object.
	pub fn dictionary_value(&self) -> IndexMap<String, JsonValue> {
		self.as_dictionary().unwrap_or_default()
	}

	/// Native map, only for objects.
	pub fn as_dictionary_object(&self) -> Option<&Map<String, Value>> {
		match &self.object {
			Value::Object(map) => Some(map),
			_ => None,
		}
	}

	/// Replace with a whole native map, or null for `None`.
	pub fn set_dictionary_object(&mut self, map: impl Into<Option<Map<String, Value>>>) {
		let map: Option<Map<String, Value>> = map.into();
		self.set_object(map.map_or(Value::Null, Value::Object));
	}
}

macro_rules! width_accessors {
	($($ty:ident => $as_fn:ident, $value_fn:ident, $set_fn:ident;)*) => {
		impl JsonValue {
			$(
				#[doc = concat!("Number or bool cast to `", stringify!($ty), "`.")]
				pub fn $as_fn(&self) -> Option<$ty> {
					self.as_number().map(|value| <$ty>::from_number(&value))
				}

				#[doc = concat!("[`number_value`](Self::number_value) cast to `", stringify!($ty), "`.")]
				pub fn $value_fn(&self) -> $ty {
					<$ty>::from_number(&self.number_value())
				}

				#[doc = concat!("Store a `", stringify!($ty), "`, or null for `None`.")]
				pub fn $set_fn(&mut self, value: impl Into<Option<$ty>>) {
					let value: Option<$ty> = value.into();
					*self = JsonValue::from(value);
				}
			)*
		}
	};
}

width_accessors! {
	i8 => as_i8, i8_value, set_i8;
	i16 => as_i16, i16_value, set_i16;
	i32 => as_i32, i32_value, set_i32;
	i64 => as_i64, i64_value, set_i64;
	isize => as_isize, isize_value, set_isize;
	u8 => as_u8, u8_value, set_u8;
	u16 => as_u16, u16_value, set_u16;
	u32 => as_u32, u32_value, set_u32;
	u64 => as_u64, u64_value, set_u64;
	usize => as_usize, usize_value, set_usize;
	f32 => as_f32, f32_value, set_f32;
	f64 => as_f64, f64_value, set_f64;
}
