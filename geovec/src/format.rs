use anyhow::{Result, bail};
use geovec_geometry::{
	GeoJsonWriteConfig, VectorCollection, load_binary, read_geojson_file, read_ndgeojson_file, save_binary,
	write_geojson_file, write_ndgeojson_file,
};
use std::{fmt::Display, path::Path};

/// File formats, chosen by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileFormat {
	GeoJson,
	NdGeoJson,
	Binary,
}

impl FileFormat {
	pub fn from_path(path: &Path) -> Result<Self> {
		let extension = path
			.extension()
			.and_then(|e| e.to_str())
			.unwrap_or_default()
			.to_ascii_lowercase();
		Ok(match extension.as_str() {
			"geojson" | "json" => FileFormat::GeoJson,
			"ndjson" | "geojsonl" => FileFormat::NdGeoJson,
			"gvec" => FileFormat::Binary,
			_ => bail!(
				"unknown file extension of '{}', expected .geojson, .json, .ndjson, .geojsonl or .gvec",
				path.display()
			),
		})
	}

	pub fn as_str(self) -> &'static str {
		match self {
			FileFormat::GeoJson => "GeoJSON",
			FileFormat::NdGeoJson => "newline-delimited GeoJSON",
			FileFormat::Binary => "GVEC",
		}
	}
}

impl Display for FileFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Reads a collection in the format matching the file extension.
pub fn read_collection(path: &Path) -> Result<VectorCollection> {
	let format = FileFormat::from_path(path)?;
	log::debug!("reading '{}' as {format}", path.display());
	match format {
		FileFormat::GeoJson => read_geojson_file(path),
		FileFormat::NdGeoJson => read_ndgeojson_file(path),
		FileFormat::Binary => load_binary(path),
	}
}

/// Writes a collection in the format matching the file extension.
///
/// `config` only applies to the GeoJSON formats.
pub fn write_collection(collection: &VectorCollection, path: &Path, config: &GeoJsonWriteConfig) -> Result<()> {
	let format = FileFormat::from_path(path)?;
	log::debug!("writing '{}' as {format}", path.display());
	match format {
		FileFormat::GeoJson => write_geojson_file(collection, path, config),
		FileFormat::NdGeoJson => write_ndgeojson_file(collection, path, config),
		FileFormat::Binary => save_binary(collection, path),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use geovec_core::{ErrorKind, error_kind};
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case("a.geojson", FileFormat::GeoJson)]
	#[case("dir/a.JSON", FileFormat::GeoJson)]
	#[case("a.ndjson", FileFormat::NdGeoJson)]
	#[case("a.geojsonl", FileFormat::NdGeoJson)]
	#[case("/tmp/a.gvec", FileFormat::Binary)]
	fn formats_by_extension(#[case] path: &str, #[case] expected: FileFormat) {
		assert_eq!(FileFormat::from_path(Path::new(path)).unwrap(), expected);
	}

	#[rstest]
	#[case("a.txt")]
	#[case("gvec")]
	#[case("a.gvec.bak")]
	fn unknown_extensions(#[case] path: &str) {
		let err = FileFormat::from_path(Path::new(path)).unwrap_err();
		assert!(err.to_string().starts_with("unknown file extension"), "{err}");
	}

	#[rstest]
	#[case("shapes.geojson")]
	#[case("shapes.ndjson")]
	#[case("shapes.gvec")]
	fn write_then_read(#[case] filename: &str) -> Result<()> {
		let mut collection = VectorCollection::new();
		collection.add_point([1.0, 2.0]);
		collection.add_areal([[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]])?;
		collection.attributes_mut().unwrap().insert("name", "corner");

		let dir = tempfile::tempdir()?;
		let path = dir.path().join(filename);
		write_collection(&collection, &path, &GeoJsonWriteConfig::default())?;
		assert_eq!(read_collection(&path)?, collection);
		Ok(())
	}

	#[test]
	fn missing_input() {
		let err = read_collection(Path::new("/definitely/not/here.gvec")).unwrap_err();
		assert_eq!(error_kind(&err), Some(ErrorKind::Io));
	}
}
