use super::{Coordinates, GeometryTrait, bounds_of, ensure_finite};
use anyhow::Result;
use geovec_core::{ensure_kind, json::JsonValue};
use std::fmt::Debug;

/// An open path of at least two positions.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(Vec<Coordinates>);

impl LineStringGeometry {
	/// Fails with `InvalidGeometry` for fewer than 2 positions or a non-finite position.
	pub fn new<C: Into<Coordinates>>(coords: impl IntoIterator<Item = C>) -> Result<Self> {
		let line = Self(coords.into_iter().map(Into::into).collect());
		line.verify()?;
		Ok(line)
	}

	#[must_use]
	pub fn coords(&self) -> &[Coordinates] {
		&self.0
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Always false for a valid line; present for API symmetry with `len`.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}

	/// Sum of the segment lengths in coordinate units.
	#[must_use]
	pub fn length(&self) -> f64 {
		self.0.windows(2).map(|w| (w[1].x() - w[0].x()).hypot(w[1].y() - w[0].y())).sum()
	}
}

impl GeometryTrait for LineStringGeometry {
	fn area(&self) -> f64 {
		0.0
	}

	fn verify(&self) -> Result<()> {
		ensure_kind!(
			self.0.len() >= 2,
			InvalidGeometry,
			"a line string needs at least 2 points, got {}",
			self.0.len()
		);
		ensure_finite(&self.0)
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Result<JsonValue> {
		let coords = self.0.iter().map(|c| c.to_json(precision)).collect::<Result<Vec<_>>>()?;
		Ok(JsonValue::Array(coords))
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		bounds_of(&self.0)
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl TryFrom<geo::LineString> for LineStringGeometry {
	type Error = anyhow::Error;

	fn try_from(line: geo::LineString) -> Result<Self> {
		Self::new(line.0)
	}
}
