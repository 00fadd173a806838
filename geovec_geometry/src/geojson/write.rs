use super::GeoJsonWriteConfig;
use crate::VectorCollection;
use anyhow::{Context, Result};
use geovec_core::{ErrorKind, KindContext, json::JsonValue};
use std::{fs, io::Write, path::Path};

/// The collection as a JSON tree: a `FeatureCollection` with one `Feature` per shape.
pub fn to_geojson_value(collection: &VectorCollection, config: &GeoJsonWriteConfig) -> Result<JsonValue> {
	collection.to_json(config.precision).map(JsonValue::Object)
}

/// Serializes the collection as compact GeoJSON text.
///
/// Fails with `InvalidGeometry` for non-finite coordinates and with `UnsupportedAttributeValue` for
/// non-finite attribute doubles.
pub fn to_geojson(collection: &VectorCollection, config: &GeoJsonWriteConfig) -> Result<String> {
	Ok(to_geojson_value(collection, config)?.stringify())
}

pub fn write_geojson(collection: &VectorCollection, mut writer: impl Write, config: &GeoJsonWriteConfig) -> Result<()> {
	let text = to_geojson(collection, config)?;
	writer
		.write_all(text.as_bytes())
		.and_then(|()| writer.flush())
		.kind_context(ErrorKind::Io, || String::from("failed to write GeoJSON"))
}

/// Serializes the collection as newline-delimited GeoJSON, one `Feature` per line.
pub fn to_ndgeojson(collection: &VectorCollection, config: &GeoJsonWriteConfig) -> Result<String> {
	let mut text = String::new();
	for (index, shape) in collection.shapes().iter().enumerate() {
		let feature = shape
			.to_json(config.precision)
			.with_context(|| format!("while writing shape {index}"))?;
		text.push_str(&feature.stringify());
		text.push('\n');
	}
	Ok(text)
}

pub fn write_ndgeojson_file(collection: &VectorCollection, path: &Path, config: &GeoJsonWriteConfig) -> Result<()> {
	let text = to_ndgeojson(collection, config)?;
	log::debug!(
		"writing {} shapes as newline-delimited GeoJSON to '{}'",
		collection.len(),
		path.display()
	);
	fs::write(path, text).kind_context(ErrorKind::Io, || format!("failed to write '{}'", path.display()))
}

/// Writes the collection to a file. Nothing is written if serialization fails.
pub fn write_geojson_file(collection: &VectorCollection, path: &Path, config: &GeoJsonWriteConfig) -> Result<()> {
	let text = to_geojson(collection, config)?;
	log::debug!(
		"writing {} shapes as GeoJSON to '{}'",
		collection.len(),
		path.display()
	);
	fs::write(path, text).kind_context(ErrorKind::Io, || format!("failed to write '{}'", path.display()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{AttributeValue, Geometry, GeometryTrait, Shape, parse_geojson, read_geojson_file, read_ndgeojson_file};
	use approx::assert_abs_diff_eq;
	use geovec_core::error_kind;
	use pretty_assertions::assert_eq;

	fn example() -> VectorCollection {
		let mut collection = VectorCollection::new();
		collection.add_point([1.0, 2.0]);
		collection.add_linear([[0.0, 0.0], [1.5, -2.25]]).unwrap();
		collection.add_areal([[0.0, 0.0], [4.0, 0.0], [4.0, 4.0]]).unwrap();
		let attributes = collection.attributes_mut().unwrap();
		attributes.insert("name", "first \"one\"\n");
		attributes.insert("rank", 1u64);
		attributes.insert("tags", vec!["a", "b"]);
		collection
	}

	#[test]
	fn writes_feature_collection() {
		let text = to_geojson(&example(), &GeoJsonWriteConfig::default()).unwrap();
		assert_eq!(
			text,
			concat!(
				r#"{"type":"FeatureCollection","features":["#,
				r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"properties":{"name":"first \"one\"\n","rank":1,"tags":["a","b"]}},"#,
				r#"{"type":"Feature","geometry":{"type":"LineString","coordinates":[[0,0],[1.5,-2.25]]},"properties":{}},"#,
				r#"{"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[0,0],[4,0],[4,4],[0,0]]]},"properties":{}}"#,
				"]}"
			)
		);
	}

	#[test]
	fn empty_collection() {
		let text = to_geojson(&VectorCollection::new(), &GeoJsonWriteConfig::default()).unwrap();
		assert_eq!(text, r#"{"type":"FeatureCollection","features":[]}"#);
	}

	#[test]
	fn precision_rounds_coordinates() {
		let mut collection = VectorCollection::new();
		collection.add_point([13.404_954, 52.520_008]);
		let text = to_geojson(&collection, &GeoJsonWriteConfig::with_precision(2)).unwrap();
		assert!(text.contains("[13.4,52.52]"), "{text}");
	}

	#[test]
	fn round_trip_through_text() {
		let original = example();
		let text = to_geojson(&original, &GeoJsonWriteConfig::default()).unwrap();
		let parsed = parse_geojson(&text).unwrap();

		assert_eq!(parsed.len(), original.len());
		for (a, b) in original.shapes().iter().zip(parsed.shapes()) {
			assert_eq!(a.geometry().type_name(), b.geometry().type_name());
			let mut coords_a = Vec::new();
			let mut coords_b = Vec::new();
			a.geometry().for_each_coord(|c| coords_a.push(*c));
			b.geometry().for_each_coord(|c| coords_b.push(*c));
			assert_eq!(coords_a.len(), coords_b.len());
			for (ca, cb) in coords_a.iter().zip(&coords_b) {
				assert_abs_diff_eq!(ca.x(), cb.x(), epsilon = 1e-9);
				assert_abs_diff_eq!(ca.y(), cb.y(), epsilon = 1e-9);
			}
			assert_eq!(a.attributes(), b.attributes());
		}
	}

	#[test]
	fn newline_delimited() -> Result<()> {
		let text = to_ndgeojson(&example(), &GeoJsonWriteConfig::default())?;
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(lines.len(), 3);
		assert_eq!(
			lines[1],
			r#"{"type":"Feature","geometry":{"type":"LineString","coordinates":[[0,0],[1.5,-2.25]]},"properties":{}}"#
		);

		let dir = tempfile::tempdir()?;
		let path = dir.path().join("out.ndjson");
		write_ndgeojson_file(&example(), &path, &GeoJsonWriteConfig::default())?;
		assert_eq!(read_ndgeojson_file(&path)?, parse_geojson(&to_geojson(&example(), &GeoJsonWriteConfig::default())?)?);
		Ok(())
	}

	#[test]
	fn non_finite_attribute() {
		let mut shape = Shape::new(Geometry::new_point([0.0, 0.0]));
		shape.attributes_mut().insert("bad", AttributeValue::Double(f64::NAN));
		let collection = VectorCollection::from_shapes(vec![shape]);
		let err = to_geojson(&collection, &GeoJsonWriteConfig::default()).unwrap_err();
		assert_eq!(error_kind(&err), Some(ErrorKind::UnsupportedAttributeValue));
	}

	#[test]
	fn non_finite_coordinate() {
		let mut collection = VectorCollection::new();
		collection.add_point([f64::INFINITY, 0.0]);
		let err = to_geojson(&collection, &GeoJsonWriteConfig::default()).unwrap_err();
		assert_eq!(error_kind(&err), Some(ErrorKind::InvalidGeometry));
		assert!(format!("{err:#}").starts_with("while writing shape 0"));
	}

	#[test]
	fn writer_and_file() -> Result<()> {
		let mut buffer = Vec::new();
		write_geojson(&example(), &mut buffer, &GeoJsonWriteConfig::default())?;
		assert_eq!(
			String::from_utf8(buffer)?,
			to_geojson(&example(), &GeoJsonWriteConfig::default())?
		);

		let dir = tempfile::tempdir()?;
		let path = dir.path().join("out.geojson");
		write_geojson_file(&example(), &path, &GeoJsonWriteConfig::default())?;
		let read = read_geojson_file(&path)?;
		assert_eq!(read.len(), 3);
		assert!(read.verify().is_ok());
		assert_abs_diff_eq!(read.shapes()[2].geometry().area(), 8.0);
		Ok(())
	}

	#[test]
	fn failed_serialization_writes_no_file() -> Result<()> {
		let mut collection = VectorCollection::new();
		collection.add_point([f64::NAN, 0.0]);
		let dir = tempfile::tempdir()?;
		let path = dir.path().join("never.geojson");
		assert!(write_geojson_file(&collection, &path, &GeoJsonWriteConfig::default()).is_err());
		assert!(!path.exists());
		Ok(())
	}
}
