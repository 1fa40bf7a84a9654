use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::json::{JsonError, JsonValue, Kind, Result, WriteOptions};

impl JsonValue {
	/// Encode the native value as JSON bytes.
	///
	/// Scalars encode as fragments; an unknown value encodes as `null`.
	pub fn raw_data(&self, options: WriteOptions) -> Result<Vec<u8>> {
		let encoded = if options.pretty {
			serde_json::to_vec_pretty(&self.object)
		} else {
			serde_json::to_vec(&self.object)
		};
		encoded.map_err(|err| JsonError::Encode { message: err.to_string() })
	}

	/// Text form: encoded JSON for containers, the bare text for strings,
	/// `None` for unknown values. Floats keep their fraction (`1.0`, not `1`).
	pub fn raw_string(&self, options: WriteOptions) -> Option<String> {
		if self.kind == Kind::Unknown {
			return None;
		}

		match &self.object {
			Value::Array(_) | Value::Object(_) => {
				let data = self.raw_data(options).ok()?;
				String::from_utf8(data).ok()
			}
			Value::String(value) => Some(value.clone()),
			Value::Number(value) => Some(value.to_string()),
			Value::Bool(value) => Some(value.to_string()),
			Value::Null => Some("null".to_owned()),
		}
	}
}

impl fmt::Display for JsonValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.raw_string(WriteOptions::pretty()) {
			Some(text) => f.write_str(&text),
			None => f.write_str("unknown"),
		}
	}
}

impl fmt::Debug for JsonValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}

impl Serialize for JsonValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		self.object.serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for JsonValue {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		Value::deserialize(deserializer).map(JsonValue::from)
	}
}

#[cfg(test)]
mod tests;
