use super::{Coordinates, GeometryTrait};
use anyhow::Result;
use geovec_core::json::JsonValue;
use std::fmt::Debug;

/// A single position.
#[derive(Clone, Copy, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn new(c: impl Into<Coordinates>) -> Self {
		Self(c.into())
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}

	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	fn area(&self) -> f64 {
		0.0
	}

	fn verify(&self) -> Result<()> {
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Result<JsonValue> {
		self.0.to_json(precision)
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		Some([self.x(), self.y(), self.x(), self.y()])
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl From<geo::Point> for PointGeometry {
	fn from(point: geo::Point) -> Self {
		Self(Coordinates::from(point.0))
	}
}
