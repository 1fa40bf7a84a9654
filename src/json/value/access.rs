use serde_json::Value;

use crate::json::{JsonError, JsonValue, PathStep};

impl JsonValue {
	/// Element at `index`, or a null value carrying the failure.
	pub fn at_index(&self, index: isize) -> JsonValue {
		let Value::Array(items) = &self.object else {
			return JsonValue::failed(self.error.clone().unwrap_or_else(|| JsonError::not_an_array(index)));
		};

		match usize::try_from(index).ok().and_then(|pos| items.get(pos)) {
			Some(item) => JsonValue::from(item.clone()),
			None => JsonValue::failed(JsonError::IndexOutOfBounds { index }),
		}
	}

	/// Member under `key`, or a null value carrying the failure.
	pub fn at_key(&self, key: &str) -> JsonValue {
		let Value::Object(map) = &self.object else {
			return JsonValue::failed(self.error.clone().unwrap_or_else(|| JsonError::not_a_dictionary(key)));
		};

		match map.get(key) {
			Some(item) => JsonValue::from(item.clone()),
			None => JsonValue::failed(JsonError::KeyNotFound { key: key.to_owned() }),
		}
	}

	/// Follow one path step.
	pub fn at(&self, step: impl Into<PathStep>) -> JsonValue {
		match step.into() {
			PathStep::Index(index) => self.at_index(index),
			PathStep::Key(key) => self.at_key(&key),
		}
	}

	/// Follow every step of `path` in order.
	///
	/// An empty path yields a plain null. Once a step fails, later steps keep
	/// the first error.
	pub fn get<I>(&self, path: I) -> JsonValue
	where
		I: IntoIterator,
		I::Item: Into<PathStep>,
	{
		let mut steps = path.into_iter();
		let Some(first) = steps.next() else {
			return JsonValue::null();
		};

		steps.fold(self.at(first), |current, step| current.at(step))
	}

	/// Replace the element at `index`. Only existing positions of an array are written.
	pub fn set_index(&mut self, index: isize, value: JsonValue) {
		self.write_index(index, value);
	}

	/// Insert or overwrite the member under `key`. Only objects are written.
	pub fn set_key(&mut self, key: &str, value: JsonValue) {
		self.write_key(key, value);
	}

	/// Write through one path step.
	pub fn set_at(&mut self, step: impl Into<PathStep>, value: JsonValue) {
		self.write_step(&step.into(), value);
	}

	/// Write `value` at the end of `path`, rebuilding every ancestor.
	///
	/// Starting from the leaf, each parent is read through its path prefix,
	/// updated, and becomes the value written one level up. If a parent is
	/// missing or cannot take the write, the whole write is dropped and the
	/// receiver is left untouched.
	pub fn set<I>(&mut self, path: I, value: JsonValue)
	where
		I: IntoIterator,
		I::Item: Into<PathStep>,
	{
		let path: Vec<PathStep> = path.into_iter().map(Into::into).collect();
		let Some(first) = path.first() else {
			return;
		};

		let mut last = value;
		for depth in (1..path.len()).rev() {
			let mut parent = self.get(&path[..depth]);
			if !parent.write_step(&path[depth], last) {
				tracing::trace!(depth, "path write dropped below a non-container");
				return;
			}
			last = parent;
		}

		self.write_step(first, last);
	}

	fn write_step(&mut self, step: &PathStep, value: JsonValue) -> bool {
		match step {
			PathStep::Index(index) => self.write_index(*index, value),
			PathStep::Key(key) => self.write_key(key, value),
		}
	}

	fn write_index(&mut self, index: isize, value: JsonValue) -> bool {
		let Value::Array(items) = &mut self.object else {
			tracing::trace!(index, kind = %self.kind, "index write on non-array dropped");
			return false;
		};

		match usize::try_from(index).ok().and_then(|pos| items.get_mut(pos)) {
			Some(slot) => {
				*slot = value.object;
				true
			}
			None => {
				tracing::trace!(index, len = items.len(), "index write out of bounds dropped");
				false
			}
		}
	}

	fn write_key(&mut self, key: &str, value: JsonValue) -> bool {
		let Value::Object(map) = &mut self.object else {
			tracing::trace!(key, kind = %self.kind, "key write on non-object dropped");
			return false;
		};

		map.insert(key.to_owned(), value.object);
		true
	}

	/// Number of elements or members; zero for scalars.
	pub fn len(&self) -> usize {
		match &self.object {
			Value::Array(items) => items.len(),
			Value::Object(map) => map.len(),
			_ => 0,
		}
	}

	/// Whether an array or object has no children. Scalars are never empty.
	pub fn is_empty(&self) -> bool {
		match &self.object {
			Value::Array(items) => items.is_empty(),
			Value::Object(map) => map.is_empty(),
			_ => false,
		}
	}
}
