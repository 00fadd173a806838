use super::{parse_geojson_assembly_iter, parse_geojson_iter};
use crate::VectorCollection;
use anyhow::{Context, Result};
use geovec_core::{ErrorKind, KindContext, byte_iterator::ByteIterator};
use std::{
	collections::BTreeMap,
	fs::File,
	io::{BufRead, BufReader, Read},
	path::Path,
};

/// Parses a GeoJSON document streamed from `reader`.
pub fn read_geojson(reader: impl Read) -> Result<VectorCollection> {
	parse_geojson_iter(&mut ByteIterator::from_reader(reader, true))
}

/// Parses a GeoJSON file. The file is closed before this returns.
pub fn read_geojson_file(path: &Path) -> Result<VectorCollection> {
	let file = open(path)?;
	read_geojson(BufReader::new(file)).with_context(|| format!("while reading '{}'", path.display()))
}

/// Parses a GeoJSON document streamed from `reader` into keyed collections.
///
/// Keys follow [`super::parse_geojson_assembly`], including the merge of features with equal keys.
pub fn read_geojson_assembly(reader: impl Read) -> Result<BTreeMap<String, VectorCollection>> {
	parse_geojson_assembly_iter(&mut ByteIterator::from_reader(reader, true))
}

/// Like [`read_geojson_assembly`]; features sharing a key are merged into one entry.
pub fn read_geojson_assembly_file(path: &Path) -> Result<BTreeMap<String, VectorCollection>> {
	let file = open(path)?;
	read_geojson_assembly(BufReader::new(file)).with_context(|| format!("while reading '{}'", path.display()))
}

fn open(path: &Path) -> Result<File> {
	log::debug!("opening GeoJSON file '{}'", path.display());
	File::open(path).kind_context(ErrorKind::Io, || format!("failed to open '{}'", path.display()))
}

fn process_line(line: std::io::Result<Vec<u8>>, index: usize) -> Result<Option<VectorCollection>> {
	match line {
		Ok(line) if line.iter().all(u8::is_ascii_whitespace) => Ok(None),
		Ok(line) => parse_geojson_iter(&mut ByteIterator::from_reader(line.as_slice(), true))
			.map(Some)
			.with_context(|| format!("line {}", index + 1)),
		Err(e) => Err(e).kind_context(ErrorKind::Io, || format!("failed to read line {}", index + 1)),
	}
}

/// Reads a newline-delimited GeoJSON file into one collection, failing on the first broken line.
pub fn read_ndgeojson_file(path: &Path) -> Result<VectorCollection> {
	let file = open(path)?;
	let mut collection = VectorCollection::new();
	for result in read_ndgeojson_iter(BufReader::new(file)) {
		collection.extend(result.with_context(|| format!("while reading '{}'", path.display()))?);
	}
	Ok(collection)
}

/// Parses newline-delimited GeoJSON, one collection per non-empty line.
///
/// Each line is parsed independently, so a broken line does not stop the iteration. Lines are
/// handed to the parser as raw bytes; invalid UTF-8 is reported as `MalformedJson`.
pub fn read_ndgeojson_iter(reader: impl BufRead) -> impl Iterator<Item = Result<VectorCollection>> {
	reader
		.split(b'\n')
		.enumerate()
		.filter_map(|(index, line)| process_line(line, index).transpose())
}
