use super::Coordinates;
use anyhow::Result;
use geovec_core::{bail_kind, json::JsonValue};
use std::fmt::Debug;

/// Common interface of all geometry types.
pub trait GeometryTrait: Debug + Clone {
	/// Area enclosed by the geometry; zero for points and lines.
	fn area(&self) -> f64;

	/// Re-checks the structural invariants, failing with `InvalidGeometry`.
	fn verify(&self) -> Result<()>;

	/// The GeoJSON `coordinates` member of this geometry.
	fn to_coord_json(&self, precision: Option<u8>) -> Result<JsonValue>;

	/// `[x_min, y_min, x_max, y_max]`, or `None` without coordinates.
	fn compute_bounds(&self) -> Option<[f64; 4]>;
}

pub(crate) fn bounds_of<'a>(coords: impl IntoIterator<Item = &'a Coordinates>) -> Option<[f64; 4]> {
	coords.into_iter().fold(None, |bounds, c| {
		merge_bounds(bounds, Some([c.x(), c.y(), c.x(), c.y()]))
	})
}

/// Fails with `InvalidGeometry` at the first NaN or infinite position.
pub(crate) fn ensure_finite(coords: &[Coordinates]) -> Result<()> {
	if let Some(index) = coords.iter().position(|c| !c.is_finite()) {
		bail_kind!(InvalidGeometry, "position {index} is not finite: {:?}", coords[index]);
	}
	Ok(())
}

pub(crate) fn merge_bounds(a: Option<[f64; 4]>, b: Option<[f64; 4]>) -> Option<[f64; 4]> {
	match (a, b) {
		(Some(a), Some(b)) => Some([a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])]),
		(a, None) => a,
		(None, b) => b,
	}
}
