mod access;
mod accessors;
mod compare;
mod iter;
mod serialize;

use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::json::{JsonError, Kind, ReadOptions};

pub use iter::Iter;

/// Fail-soft wrapper around one decoded JSON value.
///
/// Reads never fail: a subscript that cannot be satisfied returns a null
/// value whose [`error`](Self::error) slot says why. Children stay in native
/// form until they are accessed.
#[derive(Clone)]
pub struct JsonValue {
	object: Value,
	kind: Kind,
	error: Option<JsonError>,
}

impl JsonValue {
	/// Null value with no error.
	pub fn null() -> Self {
		Self {
			object: Value::Null,
			kind: Kind::Null,
			error: None,
		}
	}

	/// Wrap any serializable Rust value.
	///
	/// Values that cannot be expressed as JSON (for example maps with
	/// non-string keys) become [`Kind::Unknown`] with
	/// [`JsonError::UnsupportedType`].
	pub fn new<T: Serialize + ?Sized>(value: &T) -> Self {
		match serde_json::to_value(value) {
			Ok(object) => Self::from(object),
			Err(err) => {
				tracing::debug!(error = %err, "value is not representable as json");
				Self::unknown()
			}
		}
	}

	/// Decode `bytes` and wrap the result.
	///
	/// Decode failures produce a null value carrying [`JsonError::Decode`].
	pub fn from_slice(bytes: &[u8], options: ReadOptions) -> Self {
		match serde_json::from_slice::<Value>(bytes) {
			Ok(object) if !options.allow_fragments && !Kind::of(&object).is_container() => {
				tracing::debug!(kind = %Kind::of(&object), "fragment root rejected by strict read");
				Self::failed(JsonError::Decode {
					message: format!("top-level {} is not allowed without fragments", Kind::of(&object)),
				})
			}
			Ok(object) => Self::from(object),
			Err(err) => {
				tracing::debug!(error = %err, len = bytes.len(), "json decode failed");
				Self::failed(err.into())
			}
		}
	}

	/// Decode JSON text with default [`ReadOptions`].
	pub fn parse(text: &str) -> Self {
		Self::from_slice(text.as_bytes(), ReadOptions::default())
	}

	/// Current kind tag.
	pub fn kind(&self) -> Kind {
		self.kind
	}

	/// Error recorded by the access that produced this value.
	pub fn error(&self) -> Option<&JsonError> {
		self.error.as_ref()
	}

	/// Native backing value.
	pub fn object(&self) -> &Value {
		&self.object
	}

	/// Consume the wrapper and return the native value.
	pub fn into_object(self) -> Value {
		self.object
	}

	/// Replace the native value and reclassify.
	pub fn set_object(&mut self, object: Value) {
		self.kind = Kind::of(&object);
		self.object = object;
		self.error = None;
	}

	pub(crate) fn failed(error: JsonError) -> Self {
		Self {
			error: Some(error),
			..Self::null()
		}
	}

	pub(crate) fn unknown() -> Self {
		Self {
			object: Value::Null,
			kind: Kind::Unknown,
			error: Some(JsonError::UnsupportedType),
		}
	}

	fn from_f64(value: f64) -> Self {
		match Number::from_f64(value) {
			Some(number) => Self::from(Value::Number(number)),
			None => {
				tracing::debug!(value, "non-finite float is not representable as json");
				Self::unknown()
			}
		}
	}
}

impl Default for JsonValue {
	fn default() -> Self {
		Self::null()
	}
}

impl From<Value> for JsonValue {
	fn from(object: Value) -> Self {
		Self {
			kind: Kind::of(&object),
			object,
			error: None,
		}
	}
}

impl From<JsonValue> for Value {
	fn from(value: JsonValue) -> Self {
		value.object
	}
}

impl From<&str> for JsonValue {
	fn from(value: &str) -> Self {
		Self::from(Value::String(value.to_owned()))
	}
}

impl From<String> for JsonValue {
	fn from(value: String) -> Self {
		Self::from(Value::String(value))
	}
}

impl From<bool> for JsonValue {
	fn from(value: bool) -> Self {
		Self::from(Value::Bool(value))
	}
}

impl From<f64> for JsonValue {
	fn from(value: f64) -> Self {
		Self::from_f64(value)
	}
}

impl From<f32> for JsonValue {
	fn from(value: f32) -> Self {
		Self::from_f64(f64::from(value))
	}
}

impl From<Number> for JsonValue {
	fn from(value: Number) -> Self {
		Self::from(Value::Number(value))
	}
}

macro_rules! from_integer {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for JsonValue {
				fn from(value: $ty) -> Self {
					Self::from(Value::Number(Number::from(value)))
				}
			}
		)*
	};
}

from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
	fn from(value: Option<T>) -> Self {
		value.map_or_else(Self::null, Into::into)
	}
}

impl From<Vec<JsonValue>> for JsonValue {
	fn from(items: Vec<JsonValue>) -> Self {
		items.into_iter().collect()
	}
}

impl FromIterator<JsonValue> for JsonValue {
	fn from_iter<I: IntoIterator<Item = JsonValue>>(iter: I) -> Self {
		Self::from(Value::Array(iter.into_iter().map(|item| item.object).collect()))
	}
}

impl<K: Into<String>> FromIterator<(K, JsonValue)> for JsonValue {
	fn from_iter<I: IntoIterator<Item = (K, JsonValue)>>(iter: I) -> Self {
		let mut map = Map::new();
		for (key, value) in iter {
			map.insert(key.into(), value.object);
		}
		Self::from(Value::Object(map))
	}
}
