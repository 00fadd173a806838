use geovec_core::{ensure_kind, json::JsonValue};
use anyhow::Result;
use std::fmt::Debug;

/// Maximum per-axis difference at which two coordinates count as the same point.
///
/// Used for ring closure and for counting distinct ring points.
pub const COORDINATE_TOLERANCE: f64 = 1e-9;

/// A position: longitude/latitude or projected x/y.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self([x, y])
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}

	#[must_use]
	pub fn is_finite(&self) -> bool {
		self.0[0].is_finite() && self.0[1].is_finite()
	}

	/// Whether both axes differ by at most [`COORDINATE_TOLERANCE`].
	#[must_use]
	pub fn approx_eq(&self, other: &Coordinates) -> bool {
		(self.0[0] - other.0[0]).abs() <= COORDINATE_TOLERANCE && (self.0[1] - other.0[1]).abs() <= COORDINATE_TOLERANCE
	}

	/// Returns `[x, y]`, optionally rounded to `precision` decimal places.
	///
	/// Fails with `InvalidGeometry` for NaN or infinite values, which JSON cannot represent.
	pub fn to_json(&self, precision: Option<u8>) -> Result<JsonValue> {
		ensure_kind!(self.is_finite(), InvalidGeometry, "coordinate {:?} is not finite", self);
		let [x, y] = match precision {
			Some(precision) => [round(self.0[0], precision), round(self.0[1], precision)],
			None => self.0,
		};
		Ok(JsonValue::from(vec![x, y]))
	}
}

fn round(value: f64, precision: u8) -> f64 {
	let factor = 10f64.powi(i32::from(precision));
	let rounded = (value * factor).round() / factor;
	// large precisions overflow the scaled value
	if rounded.is_finite() { rounded } else { value }
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates(value)
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<&Coordinates> for Coordinates {
	fn from(value: &Coordinates) -> Self {
		*value
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		value.0
	}
}

impl From<geo::Coord> for Coordinates {
	fn from(value: geo::Coord) -> Self {
		Coordinates([value.x, value.y])
	}
}

impl From<Coordinates> for geo::Coord {
	fn from(value: Coordinates) -> Self {
		geo::Coord {
			x: value.0[0],
			y: value.0[1],
		}
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
