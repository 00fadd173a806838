use super::*;
use anyhow::Result;
use geovec_core::json::JsonValue;
use std::fmt::Debug;

/// The geometry of a shape.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
}

impl Geometry {
	#[must_use]
	pub fn new_point(coord: impl Into<Coordinates>) -> Self {
		Self::Point(PointGeometry::new(coord))
	}

	pub fn new_line_string<C: Into<Coordinates>>(coords: impl IntoIterator<Item = C>) -> Result<Self> {
		Ok(Self::LineString(LineStringGeometry::new(coords)?))
	}

	/// Outer ring first. Unclosed rings are closed.
	pub fn new_polygon<C, R>(rings: impl IntoIterator<Item = R>) -> Result<Self>
	where
		C: Into<Coordinates>,
		R: IntoIterator<Item = C>,
	{
		let rings = rings.into_iter().map(RingGeometry::new).collect::<Result<Vec<_>>>()?;
		Ok(Self::Polygon(PolygonGeometry::from_rings(rings)?))
	}

	/// GeoJSON type name.
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
		}
	}

	/// Calls `f` for every position, ring by ring.
	pub fn for_each_coord(&self, mut f: impl FnMut(&Coordinates)) {
		match self {
			Geometry::Point(g) => f(g.as_coord()),
			Geometry::LineString(g) => g.coords().iter().for_each(f),
			Geometry::Polygon(g) => g.rings().iter().flat_map(RingGeometry::coords).for_each(f),
		}
	}
}

impl GeometryTrait for Geometry {
	fn area(&self) -> f64 {
		match self {
			Geometry::Point(g) => g.area(),
			Geometry::LineString(g) => g.area(),
			Geometry::Polygon(g) => g.area(),
		}
	}

	fn verify(&self) -> Result<()> {
		match self {
			Geometry::Point(g) => g.verify(),
			Geometry::LineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
		}
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Result<JsonValue> {
		match self {
			Geometry::Point(g) => g.to_coord_json(precision),
			Geometry::LineString(g) => g.to_coord_json(precision),
			Geometry::Polygon(g) => g.to_coord_json(precision),
		}
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		match self {
			Geometry::Point(g) => g.compute_bounds(),
			Geometry::LineString(g) => g.compute_bounds(),
			Geometry::Polygon(g) => g.compute_bounds(),
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

impl From<&Geometry> for geo::Geometry {
	fn from(geometry: &Geometry) -> Self {
		let line = |coords: &[Coordinates]| {
			geo::LineString::from(coords.iter().map(|c| geo::Coord::from(*c)).collect::<Vec<_>>())
		};
		match geometry {
			Geometry::Point(g) => geo::Geometry::Point(geo::Point(geo::Coord::from(g.0))),
			Geometry::LineString(g) => geo::Geometry::LineString(line(g.coords())),
			Geometry::Polygon(g) => geo::Geometry::Polygon(geo::Polygon::new(
				line(g.outer().coords()),
				g.holes().iter().map(|ring| line(ring.coords())).collect(),
			)),
		}
	}
}

impl TryFrom<geo::Geometry> for Geometry {
	type Error = anyhow::Error;

	/// Multi-geometries and collections need more than one shape and are rejected.
	fn try_from(geometry: geo::Geometry) -> Result<Self> {
		Ok(match geometry {
			geo::Geometry::Point(g) => Geometry::Point(PointGeometry::from(g)),
			geo::Geometry::LineString(g) => Geometry::LineString(LineStringGeometry::try_from(g)?),
			geo::Geometry::Polygon(g) => Geometry::Polygon(PolygonGeometry::try_from(g)?),
			_ => geovec_core::bail_kind!(UnsupportedGeometry, "only points, line strings and polygons are supported"),
		})
	}
}
