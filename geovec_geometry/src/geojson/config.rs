/// Options for GeoJSON parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseConfig {
	/// Include the bytes preceding a syntax error in the error message.
	pub debug: bool,
}

impl Default for ParseConfig {
	fn default() -> Self {
		Self { debug: true }
	}
}

/// Options for GeoJSON output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeoJsonWriteConfig {
	/// Round coordinates to this many decimal places. `None` writes them unchanged.
	pub precision: Option<u8>,
}

impl GeoJsonWriteConfig {
	#[must_use]
	pub fn with_precision(precision: u8) -> Self {
		Self {
			precision: Some(precision),
		}
	}
}
