use super::AttributeValue;
use anyhow::Result;
use geovec_core::json::JsonObject;
use std::{
	collections::{BTreeMap, btree_map},
	fmt::Debug,
};

/// Attribute data of a shape: string keys in sorted order, each mapped to an [`AttributeValue`].
#[derive(Clone, Default, PartialEq)]
pub struct AttributeMap(BTreeMap<String, AttributeValue>);

impl AttributeMap {
	#[must_use]
	pub const fn new() -> Self {
		Self(BTreeMap::new())
	}

	/// Inserts a value, returning the one it replaced.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Option<AttributeValue> {
		self.0.insert(key.into(), value.into())
	}

	pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
		self.0.remove(key)
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&AttributeValue> {
		self.0.get(key)
	}

	#[must_use]
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Copies every entry of `other` into this map, overwriting equal keys.
	pub fn update(&mut self, other: &AttributeMap) {
		for (key, value) in &other.0 {
			self.0.insert(key.clone(), value.clone());
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> btree_map::Iter<'_, String, AttributeValue> {
		self.0.iter()
	}

	pub fn values(&self) -> btree_map::Values<'_, String, AttributeValue> {
		self.0.values()
	}

	/// Converts to a JSON object with members in key order.
	pub fn to_json(&self) -> Result<JsonObject> {
		let mut object = JsonObject::new();
		for (key, value) in &self.0 {
			object.set(key, value.to_json()?);
		}
		Ok(object)
	}
}

impl<'a> IntoIterator for &'a AttributeMap {
	type Item = (&'a String, &'a AttributeValue);
	type IntoIter = btree_map::Iter<'a, String, AttributeValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl IntoIterator for AttributeMap {
	type Item = (String, AttributeValue);
	type IntoIter = btree_map::IntoIter<String, AttributeValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl FromIterator<(String, AttributeValue)> for AttributeMap {
	fn from_iter<T: IntoIterator<Item = (String, AttributeValue)>>(iter: T) -> Self {
		Self(BTreeMap::from_iter(iter))
	}
}

impl From<Vec<(&str, AttributeValue)>> for AttributeMap {
	fn from(value: Vec<(&str, AttributeValue)>) -> Self {
		value.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
	}
}

impl From<Vec<(&str, &str)>> for AttributeMap {
	fn from(value: Vec<(&str, &str)>) -> Self {
		value
			.into_iter()
			.map(|(k, v)| (k.to_string(), AttributeValue::from(v)))
			.collect()
	}
}

impl Debug for AttributeMap {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(&self.0).finish()
	}
}
