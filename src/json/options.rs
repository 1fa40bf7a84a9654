/// Decoder settings for [`JsonValue::from_slice`](crate::json::JsonValue::from_slice).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
	/// Accept scalar roots such as `"text"` or `42`.
	pub allow_fragments: bool,
}

impl Default for ReadOptions {
	fn default() -> Self {
		Self { allow_fragments: true }
	}
}

impl ReadOptions {
	/// Only arrays and objects are accepted at the root.
	pub fn strict() -> Self {
		Self { allow_fragments: false }
	}
}

/// Encoder settings for [`JsonValue::raw_data`](crate::json::JsonValue::raw_data).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
	/// Indent nested containers over multiple lines.
	pub pretty: bool,
}

impl WriteOptions {
	/// Single-line output.
	pub fn compact() -> Self {
		Self { pretty: false }
	}

	/// Indented multi-line output.
	pub fn pretty() -> Self {
		Self { pretty: true }
	}
}
