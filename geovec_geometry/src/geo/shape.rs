use super::*;
use anyhow::Result;
use geovec_core::json::{JsonObject, JsonValue};

/// One geometry together with its attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
	geometry: Geometry,
	attributes: AttributeMap,
}

impl Shape {
	/// Creates a shape with an empty attribute map.
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self {
			geometry,
			attributes: AttributeMap::new(),
		}
	}

	#[must_use]
	pub fn with_attributes(geometry: Geometry, attributes: AttributeMap) -> Self {
		Self { geometry, attributes }
	}

	#[must_use]
	pub fn geometry(&self) -> &Geometry {
		&self.geometry
	}

	#[must_use]
	pub fn attributes(&self) -> &AttributeMap {
		&self.attributes
	}

	pub fn attributes_mut(&mut self) -> &mut AttributeMap {
		&mut self.attributes
	}

	pub fn set_attributes(&mut self, attributes: AttributeMap) {
		self.attributes = attributes;
	}

	#[must_use]
	pub fn into_parts(self) -> (Geometry, AttributeMap) {
		(self.geometry, self.attributes)
	}

	/// The shape as a GeoJSON `Feature` with members `type`, `geometry`, `properties`.
	pub fn to_json(&self, precision: Option<u8>) -> Result<JsonObject> {
		let mut geometry = JsonObject::new();
		geometry.set("type", self.geometry.type_name());
		geometry.set("coordinates", self.geometry.to_coord_json(precision)?);

		let mut feature = JsonObject::new();
		feature.set("type", "Feature");
		feature.set("geometry", geometry);
		feature.set("properties", JsonValue::Object(self.attributes.to_json()?));
		Ok(feature)
	}
}
