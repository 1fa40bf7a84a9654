use std::fmt;
use std::str::FromStr;

use crate::json::{JsonError, Result};

/// One component of a navigation path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
	/// Select an array element by zero-based index.
	Index(isize),
	/// Select an object member by key.
	Key(String),
}

impl From<&str> for PathStep {
	fn from(key: &str) -> Self {
		Self::Key(key.to_owned())
	}
}

impl From<String> for PathStep {
	fn from(key: String) -> Self {
		Self::Key(key)
	}
}

impl From<&String> for PathStep {
	fn from(key: &String) -> Self {
		Self::Key(key.clone())
	}
}

impl From<isize> for PathStep {
	fn from(index: isize) -> Self {
		Self::Index(index)
	}
}

impl From<usize> for PathStep {
	fn from(index: usize) -> Self {
		Self::Index(isize::try_from(index).unwrap_or(isize::MAX))
	}
}

impl From<i32> for PathStep {
	fn from(index: i32) -> Self {
		Self::Index(isize::try_from(index).unwrap_or(isize::MAX))
	}
}

impl From<&PathStep> for PathStep {
	fn from(step: &PathStep) -> Self {
		step.clone()
	}
}

impl fmt::Display for PathStep {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Index(index) => write!(f, "[{index}]"),
			Self::Key(key) => f.write_str(key),
		}
	}
}

/// Parsed path expression such as `users[0].name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonPath {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

impl JsonPath {
	/// Parse dotted key syntax with optional `[index]` selectors.
	///
	/// Keys may contain any character except `.`, `[` and `]`. Only the first
	/// segment may omit its key, which allows paths rooted at an array such as
	/// `[2].name`.
	pub fn parse(input: &str) -> Result<Self> {
		if input.is_empty() {
			return Err(JsonError::InvalidPath { path: input.to_owned() });
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut steps = Vec::new();

		while idx < bytes.len() {
			let start = idx;
			while idx < bytes.len() && !matches!(bytes[idx], b'.' | b'[' | b']') {
				idx += 1;
			}

			if idx > start {
				steps.push(PathStep::Key(input[start..idx].to_owned()));
			} else if start != 0 || bytes[idx] != b'[' {
				return Err(JsonError::InvalidPath { path: input.to_owned() });
			}

			while idx < bytes.len() && bytes[idx] == b'[' {
				idx += 1;
				let n_start = idx;
				while idx < bytes.len() && bytes[idx].is_ascii_digit() {
					idx += 1;
				}
				if idx == n_start || idx >= bytes.len() || bytes[idx] != b']' {
					return Err(JsonError::InvalidPath { path: input.to_owned() });
				}

				let number = input[n_start..idx]
					.parse::<isize>()
					.map_err(|_| JsonError::InvalidPath { path: input.to_owned() })?;
				steps.push(PathStep::Index(number));
				idx += 1;
			}

			if idx < bytes.len() {
				if bytes[idx] != b'.' {
					return Err(JsonError::InvalidPath { path: input.to_owned() });
				}
				idx += 1;
				if idx >= bytes.len() {
					return Err(JsonError::InvalidPath { path: input.to_owned() });
				}
			}
		}

		Ok(Self { steps })
	}

	/// Number of steps.
	pub fn len(&self) -> usize {
		self.steps.len()
	}

	/// Whether the path has no steps.
	pub fn is_empty(&self) -> bool {
		self.steps.is_empty()
	}
}

impl FromStr for JsonPath {
	type Err = JsonError;

	fn from_str(input: &str) -> Result<Self> {
		Self::parse(input)
	}
}

impl fmt::Display for JsonPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (pos, step) in self.steps.iter().enumerate() {
			if pos > 0 && matches!(step, PathStep::Key(_)) {
				f.write_str(".")?;
			}
			write!(f, "{step}")?;
		}
		Ok(())
	}
}

impl IntoIterator for JsonPath {
	type Item = PathStep;
	type IntoIter = std::vec::IntoIter<PathStep>;

	fn into_iter(self) -> Self::IntoIter {
		self.steps.into_iter()
	}
}

impl<'a> IntoIterator for &'a JsonPath {
	type Item = &'a PathStep;
	type IntoIter = std::slice::Iter<'a, PathStep>;

	fn into_iter(self) -> Self::IntoIter {
		self.steps.iter()
	}
}

impl FromIterator<PathStep> for JsonPath {
	fn from_iter<I: IntoIterator<Item = PathStep>>(iter: I) -> Self {
		Self { steps: iter.into_iter().collect() }
	}
}

/// Build a fixed-size array of [`PathStep`]s from mixed keys and indexes.
///
/// ```
/// use jsonvalue::json::{JsonValue, PathStep};
/// use jsonvalue::json_path;
///
/// let doc = JsonValue::parse(r#"{"users": [{"name": "Amy"}]}"#);
/// let path: [PathStep; 3] = json_path!("users", 0, "name");
/// assert_eq!(doc.get(path).as_str(), Some("Amy"));
/// ```
#[macro_export]
macro_rules! json_path {
	($($step:expr),* $(,)?) => {
		[$($crate::json::PathStep::from($step)),*]
	};
}
