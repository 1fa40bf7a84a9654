use std::iter::Enumerate;
use std::slice;

use serde_json::{Value, map};

use crate::json::JsonValue;

/// Iterator over `(key, child)` pairs of a [`JsonValue`].
///
/// Array keys are stringified zero-based indexes; object keys come in
/// insertion order. Scalars yield nothing.
pub struct Iter<'a> {
	inner: Inner<'a>,
}

enum Inner<'a> {
	Array(Enumerate<slice::Iter<'a, Value>>),
	Object(map::Iter<'a>),
	Empty,
}

impl Iterator for Iter<'_> {
	type Item = (String, JsonValue);

	fn next(&mut self) -> Option<Self::Item> {
		match &mut self.inner {
			Inner::Array(items) => items.next().map(|(index, item)| (index.to_string(), JsonValue::from(item.clone()))),
			Inner::Object(entries) => entries.next().map(|(key, item)| (key.clone(), JsonValue::from(item.clone()))),
			Inner::Empty => None,
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		match &self.inner {
			Inner::Array(items) => items.size_hint(),
			Inner::Object(entries) => entries.size_hint(),
			Inner::Empty => (0, Some(0)),
		}
	}
}

impl ExactSizeIterator for Iter<'_> {}

impl JsonValue {
	/// Iterate children as `(key, value)` pairs.
	pub fn iter(&self) -> Iter<'_> {
		let inner = match &self.object {
			Value::Array(items) => Inner::Array(items.iter().enumerate()),
			Value::Object(map) => Inner::Object(map.iter()),
			_ => Inner::Empty,
		};
		Iter { inner }
	}
}

impl<'a> IntoIterator for &'a JsonValue {
	type Item = (String, JsonValue);
	type IntoIter = Iter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
