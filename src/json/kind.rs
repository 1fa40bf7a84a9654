use std::fmt;

use serde_json::Value;

/// Shape currently held by a [`JsonValue`](crate::json::JsonValue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// Integer or floating point number.
	Number,
	/// Text string.
	String,
	/// `true` or `false`.
	Bool,
	/// Ordered sequence.
	Array,
	/// Insertion-ordered string-keyed map.
	Object,
	/// JSON `null`.
	Null,
	/// Input that could not be classified.
	Unknown,
}

impl Kind {
	/// Classify a native value.
	pub fn of(value: &Value) -> Self {
		match value {
			Value::Bool(_) => Self::Bool,
			Value::Number(_) => Self::Number,
			Value::String(_) => Self::String,
			Value::Array(_) => Self::Array,
			Value::Object(_) => Self::Object,
			Value::Null => Self::Null,
		}
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Number => "number",
			Self::String => "string",
			Self::Bool => "bool",
			Self::Array => "array",
			Self::Object => "object",
			Self::Null => "null",
			Self::Unknown => "unknown",
		}
	}

	/// Whether values of this kind hold children.
	pub fn is_container(self) -> bool {
		matches!(self, Self::Array | Self::Object)
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
