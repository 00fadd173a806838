use super::*;
use crate::geojson::parse_geojson;
use anyhow::{Context, Result};
use geovec_core::json::{JsonObject, JsonValue};

static EMPTY_ATTRIBUTES: AttributeMap = AttributeMap::new();

/// An ordered sequence of shapes.
///
/// Built incrementally with the `add_*` methods, or read with
/// [`parse_geojson`](crate::geojson::parse_geojson) and [`load_binary`](crate::binary::load_binary).
/// A failing `add_*` call leaves the collection unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VectorCollection {
	shapes: Vec<Shape>,
}

impl VectorCollection {
	#[must_use]
	pub fn new() -> Self {
		Self { shapes: Vec::new() }
	}

	#[must_use]
	pub fn from_shapes(shapes: Vec<Shape>) -> Self {
		Self { shapes }
	}

	pub fn from_geojson(text: &str) -> Result<Self> {
		parse_geojson(text)
	}

	/// Appends a point with empty attributes.
	pub fn add_point(&mut self, coord: impl Into<Coordinates>) {
		self.shapes.push(Shape::new(Geometry::new_point(coord)));
	}

	/// Appends a line string. Fails with `InvalidGeometry` for fewer than 2 positions.
	pub fn add_linear<C: Into<Coordinates>>(&mut self, coords: impl IntoIterator<Item = C>) -> Result<()> {
		let geometry = Geometry::LineString(LineStringGeometry::new(coords)?);
		self.shapes.push(Shape::new(geometry));
		Ok(())
	}

	/// Appends a polygon with `coords` as outer ring, closing it if needed.
	///
	/// Fails with `InvalidGeometry` for fewer than 3 distinct positions.
	pub fn add_areal<C: Into<Coordinates>>(&mut self, coords: impl IntoIterator<Item = C>) -> Result<()> {
		let outer = RingGeometry::new(coords)?;
		self.shapes.push(Shape::new(Geometry::Polygon(PolygonGeometry::new(outer, Vec::new()))));
		Ok(())
	}

	/// Like [`VectorCollection::add_areal`], with holes validated and closed the same way.
	pub fn add_areal_with_holes<C, H>(
		&mut self,
		outer: impl IntoIterator<Item = C>,
		holes: impl IntoIterator<Item = H>,
	) -> Result<()>
	where
		C: Into<Coordinates>,
		H: IntoIterator<Item = C>,
	{
		let outer = RingGeometry::new(outer).context("invalid outer ring")?;
		let holes = holes
			.into_iter()
			.enumerate()
			.map(|(index, hole)| RingGeometry::new(hole).with_context(|| format!("invalid hole {index}")))
			.collect::<Result<Vec<_>>>()?;
		self.shapes.push(Shape::new(Geometry::Polygon(PolygonGeometry::new(outer, holes))));
		Ok(())
	}

	pub fn push(&mut self, shape: Shape) {
		self.shapes.push(shape);
	}

	/// Attributes of the first shape, or an empty map for an empty collection.
	#[must_use]
	pub fn attributes(&self) -> &AttributeMap {
		self.shapes.first().map_or(&EMPTY_ATTRIBUTES, Shape::attributes)
	}

	/// Mutable attributes of the first shape.
	pub fn attributes_mut(&mut self) -> Option<&mut AttributeMap> {
		self.shapes.first_mut().map(Shape::attributes_mut)
	}

	#[must_use]
	pub fn shapes(&self) -> &[Shape] {
		&self.shapes
	}

	pub fn shapes_mut(&mut self) -> &mut [Shape] {
		&mut self.shapes
	}

	#[must_use]
	pub fn into_shapes(self) -> Vec<Shape> {
		self.shapes
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&Shape> {
		self.shapes.get(index)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.shapes.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.shapes.is_empty()
	}

	/// Appends clones of all shapes of `other`.
	pub fn extend_from(&mut self, other: &VectorCollection) {
		self.shapes.extend_from_slice(&other.shapes);
	}

	/// `[x_min, y_min, x_max, y_max]` over all positions, `None` when empty.
	#[must_use]
	pub fn bounds(&self) -> Option<[f64; 4]> {
		self
			.shapes
			.iter()
			.fold(None, |bounds, shape| merge_bounds(bounds, shape.geometry().compute_bounds()))
	}

	/// Center of [`VectorCollection::bounds`].
	#[must_use]
	pub fn center(&self) -> Option<Coordinates> {
		self
			.bounds()
			.map(|[x0, y0, x1, y1]| Coordinates::new(x0 + (x1 - x0) / 2.0, y0 + (y1 - y0) / 2.0))
	}

	/// Re-checks every shape's geometry.
	pub fn verify(&self) -> Result<()> {
		for (index, shape) in self.shapes.iter().enumerate() {
			shape.geometry().verify().with_context(|| format!("shape {index}"))?;
		}
		Ok(())
	}

	/// The collection as a GeoJSON `FeatureCollection` object.
	pub fn to_json(&self, precision: Option<u8>) -> Result<JsonObject> {
		let features = self
			.shapes
			.iter()
			.enumerate()
			.map(|(index, shape)| {
				shape
					.to_json(precision)
					.map(JsonValue::Object)
					.with_context(|| format!("while writing shape {index}"))
			})
			.collect::<Result<Vec<_>>>()?;

		let mut object = JsonObject::new();
		object.set("type", "FeatureCollection");
		object.set("features", JsonValue::Array(features));
		Ok(object)
	}
}

impl From<Vec<Shape>> for VectorCollection {
	fn from(shapes: Vec<Shape>) -> Self {
		Self::from_shapes(shapes)
	}
}

impl FromIterator<Shape> for VectorCollection {
	fn from_iter<T: IntoIterator<Item = Shape>>(iter: T) -> Self {
		Self::from_shapes(iter.into_iter().collect())
	}
}

impl Extend<Shape> for VectorCollection {
	fn extend<T: IntoIterator<Item = Shape>>(&mut self, iter: T) {
		self.shapes.extend(iter);
	}
}

impl IntoIterator for VectorCollection {
	type Item = Shape;
	type IntoIter = std::vec::IntoIter<Shape>;

	fn into_iter(self) -> Self::IntoIter {
		self.shapes.into_iter()
	}
}

impl<'a> IntoIterator for &'a VectorCollection {
	type Item = &'a Shape;
	type IntoIter = std::slice::Iter<'a, Shape>;

	fn into_iter(self) -> Self::IntoIter {
		self.shapes.iter()
	}
}
