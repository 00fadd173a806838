use super::{JsonValue, stringify};
use std::fmt::{self, Debug};

/// A JSON object that keeps its members in insertion order.
#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(Vec<(String, JsonValue)>);

impl JsonObject {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	/// Sets `key` to `value`. An existing member keeps its position.
	pub fn set(&mut self, key: &str, value: impl Into<JsonValue>) {
		let value = value.into();
		match self.0.iter_mut().find(|(k, _)| k == key) {
			Some(entry) => entry.1 = value,
			None => self.0.push((key.to_string(), value)),
		}
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn stringify(&self) -> String {
		stringify(&JsonValue::Object(self.clone()))
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.0.iter().map(|(k, v)| (k, v))).finish()
	}
}

impl<K: Into<String>, V: Into<JsonValue>> FromIterator<(K, V)> for JsonObject {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut object = JsonObject::new();
		for (key, value) in iter {
			let key: String = key.into();
			object.set(&key, value);
		}
		object
	}
}
