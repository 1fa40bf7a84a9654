use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, JsonError>;

/// Errors attached to values produced by failed accesses, decodes, and encodes.
///
/// None of these are fatal: reads that fail still return a valid null value
/// carrying one of these in its error slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonError {
	/// Input could not be classified as any JSON kind.
	#[error("it is an unsupported type")]
	UnsupportedType,
	/// Array index was outside `0..len`.
	#[error("Array[{index}] is out of bounds")]
	IndexOutOfBounds {
		/// Requested index, possibly negative.
		index: isize,
	},
	/// Subscript attempted on a value of the wrong kind.
	#[error("{message}")]
	WrongType {
		/// Which access failed and why.
		message: String,
	},
	/// Object key was absent.
	#[error("Dictionary[\"{key}\"] does not exist")]
	KeyNotFound {
		/// Requested key.
		key: String,
	},
	/// Bytes were not a decodable JSON document.
	#[error("decode: {message}")]
	Decode {
		/// Decoder diagnostic.
		message: String,
	},
	/// Value could not be encoded as JSON text.
	#[error("encode: {message}")]
	Encode {
		/// Encoder diagnostic.
		message: String,
	},
	/// Textual path expression is malformed.
	#[error("invalid path: {path}")]
	InvalidPath {
		/// Original path text.
		path: String,
	},
}

impl JsonError {
	/// Stable numeric code for the access taxonomy.
	pub fn code(&self) -> i32 {
		match self {
			Self::UnsupportedType => 999,
			Self::IndexOutOfBounds { .. } => 900,
			Self::WrongType { .. } => 901,
			Self::KeyNotFound { .. } => 500,
			Self::Decode { .. } => 800,
			Self::Encode { .. } => 801,
			Self::InvalidPath { .. } => 802,
		}
	}

	pub(crate) fn not_an_array(index: isize) -> Self {
		Self::WrongType {
			message: format!("Array[{index}] failure, it is not an array"),
		}
	}

	pub(crate) fn not_a_dictionary(key: &str) -> Self {
		Self::WrongType {
			message: format!("Dictionary[\"{key}\"] failure, it is not a dictionary"),
		}
	}
}

impl From<serde_json::Error> for JsonError {
	fn from(err: serde_json::Error) -> Self {
		Self::Decode { message: err.to_string() }
	}
}
