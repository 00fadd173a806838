use super::{GeometryTrait, RingGeometry, merge_bounds};
use anyhow::Result;
use geovec_core::{ensure_kind, json::JsonValue};
use std::fmt::Debug;

/// An outer ring plus zero or more holes.
///
/// Holes that cross the outer ring or each other are not detected.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(Vec<RingGeometry>);

impl PolygonGeometry {
	#[must_use]
	pub fn new(outer: RingGeometry, holes: Vec<RingGeometry>) -> Self {
		let mut rings = Vec::with_capacity(holes.len() + 1);
		rings.push(outer);
		rings.extend(holes);
		Self(rings)
	}

	/// First ring is the outer ring. Fails with `InvalidGeometry` without any ring.
	pub fn from_rings(rings: Vec<RingGeometry>) -> Result<Self> {
		ensure_kind!(!rings.is_empty(), InvalidGeometry, "a polygon needs at least one ring");
		Ok(Self(rings))
	}

	#[must_use]
	pub fn outer(&self) -> &RingGeometry {
		&self.0[0]
	}

	#[must_use]
	pub fn holes(&self) -> &[RingGeometry] {
		&self.0[1..]
	}

	#[must_use]
	pub fn rings(&self) -> &[RingGeometry] {
		&self.0
	}

	#[must_use]
	pub fn into_rings(self) -> Vec<RingGeometry> {
		self.0
	}
}

impl GeometryTrait for PolygonGeometry {
	fn area(&self) -> f64 {
		self.outer().area() - self.holes().iter().map(RingGeometry::area).sum::<f64>()
	}

	fn verify(&self) -> Result<()> {
		ensure_kind!(!self.0.is_empty(), InvalidGeometry, "a polygon needs at least one ring");
		for ring in &self.0 {
			ring.verify()?;
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Result<JsonValue> {
		let rings = self
			.0
			.iter()
			.map(|ring| ring.to_coord_json(precision))
			.collect::<Result<Vec<_>>>()?;
		Ok(JsonValue::Array(rings))
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		self.0.iter().fold(None, |bounds, ring| merge_bounds(bounds, ring.compute_bounds()))
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl TryFrom<geo::Polygon> for PolygonGeometry {
	type Error = anyhow::Error;

	fn try_from(polygon: geo::Polygon) -> Result<Self> {
		let (exterior, interiors) = polygon.into_inner();
		let holes = interiors.into_iter().map(RingGeometry::try_from).collect::<Result<Vec<_>>>()?;
		Ok(Self::new(RingGeometry::try_from(exterior)?, holes))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use geovec_core::{ErrorKind, error_kind};

	fn ring(coords: &[[f64; 2]]) -> RingGeometry {
		RingGeometry::new(coords.iter().copied()).unwrap()
	}

	fn square_with_hole() -> PolygonGeometry {
		PolygonGeometry::new(
			ring(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]),
			vec![ring(&[[2.0, 2.0], [2.0, 4.0], [4.0, 4.0], [4.0, 2.0]])],
		)
	}

	#[test]
	fn rings_and_area() {
		let polygon = square_with_hole();
		assert_eq!(polygon.rings().len(), 2);
		assert_eq!(polygon.outer().len(), 5);
		assert_eq!(polygon.holes().len(), 1);
		assert_eq!(polygon.area(), 96.0);
		assert!(polygon.verify().is_ok());
		assert_eq!(polygon.compute_bounds(), Some([0.0, 0.0, 10.0, 10.0]));
	}

	#[test]
	fn needs_a_ring() {
		let err = PolygonGeometry::from_rings(vec![]).unwrap_err();
		assert_eq!(error_kind(&err), Some(ErrorKind::InvalidGeometry));
	}

	#[test]
	fn json() {
		let polygon = PolygonGeometry::from_rings(vec![ring(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]])]).unwrap();
		assert_eq!(polygon.to_coord_json(None).unwrap().stringify(), "[[[0,0],[1,0],[1,1],[0,0]]]");
	}

	#[test]
	fn from_geo_polygon() {
		let polygon = geo::Polygon::new(
			geo::LineString::from(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)]),
			vec![geo::LineString::from(vec![(1.0, 1.0), (2.0, 1.0), (2.0, 2.0)])],
		);
		let polygon = PolygonGeometry::try_from(polygon).unwrap();
		assert_eq!(polygon.holes().len(), 1);
		assert_eq!(polygon.outer().len(), 4);
		assert_eq!(polygon.into_rings()[1].len(), 4);
	}
}
