use super::{Coordinates, GeometryTrait, bounds_of, ensure_finite};
use anyhow::Result;
use geovec_core::{ensure_kind, json::JsonValue};
use std::fmt::Debug;

/// A closed ring: at least 4 positions, first equal to last within [`super::COORDINATE_TOLERANCE`].
///
/// Rings are the building blocks of polygons. The first ring of a polygon is the outer boundary,
/// further rings are holes.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(Vec<Coordinates>);

impl RingGeometry {
	/// Builds a ring, appending the first position if the caller did not close it.
	///
	/// Fails with `InvalidGeometry` when fewer than 3 distinct positions are given or a position
	/// is NaN or infinite.
	pub fn new<C: Into<Coordinates>>(coords: impl IntoIterator<Item = C>) -> Result<Self> {
		let mut coords: Vec<Coordinates> = coords.into_iter().map(Into::into).collect();
		ensure_finite(&coords)?;
		let distinct = count_distinct(&coords, 3);
		ensure_kind!(
			distinct >= 3,
			InvalidGeometry,
			"a ring needs at least 3 distinct points, got {distinct}"
		);

		let first = coords[0];
		if !coords[coords.len() - 1].approx_eq(&first) {
			coords.push(first);
		}
		Ok(Self(coords))
	}

	/// Takes the positions as they are; they must already form a closed ring.
	pub fn from_closed(coords: Vec<Coordinates>) -> Result<Self> {
		let ring = Self(coords);
		ring.verify()?;
		Ok(ring)
	}

	#[must_use]
	pub fn coords(&self) -> &[Coordinates] {
		&self.0
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
	pub fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}

	/// Shoelace area, positive for counterclockwise rings.
	#[must_use]
	pub fn signed_area(&self) -> f64 {
		let sum: f64 = self.0.windows(2).map(|w| w[0].x() * w[1].y() - w[1].x() * w[0].y()).sum();
		sum / 2.0
	}
}

/// Counts distinct positions, stopping once `limit` is reached.
fn count_distinct(coords: &[Coordinates], limit: usize) -> usize {
	let mut seen: Vec<&Coordinates> = Vec::with_capacity(limit);
	for c in coords {
		if !seen.iter().any(|s| s.approx_eq(c)) {
			seen.push(c);
			if seen.len() >= limit {
				break;
			}
		}
	}
	seen.len()
}

impl GeometryTrait for RingGeometry {
	fn area(&self) -> f64 {
		self.signed_area().abs()
	}

	fn verify(&self) -> Result<()> {
		ensure_kind!(
			self.0.len() >= 4,
			InvalidGeometry,
			"a ring needs at least 4 points, got {}",
			self.0.len()
		);
		ensure_finite(&self.0)?;
		ensure_kind!(
			self.0[0].approx_eq(&self.0[self.0.len() - 1]),
			InvalidGeometry,
			"ring is not closed"
		);
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Result<JsonValue> {
		let coords = self.0.iter().map(|c| c.to_json(precision)).collect::<Result<Vec<_>>>()?;
		Ok(JsonValue::Array(coords))
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		bounds_of(&self.0)
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl TryFrom<geo::LineString> for RingGeometry {
	type Error = anyhow::Error;

	fn try_from(line: geo::LineString) -> Result<Self> {
		Self::new(line.0)
	}
}
