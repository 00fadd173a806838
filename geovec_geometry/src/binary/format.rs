use super::attributes::{read_attribute_block, write_attribute_block};
use crate::{
	Coordinates, Geometry, LineStringGeometry, PointGeometry, PolygonGeometry, RingGeometry, Shape, VectorCollection,
};
use anyhow::{Context, Result};
use byteorder::LE;
use geovec_core::{
	ErrorKind, KindContext, bail_kind, ensure_kind,
	io::{ValueReader, ValueReaderSlice, ValueWriter, ValueWriterVec},
};

pub const MAGIC: &[u8; 4] = b"GVEC";
pub const VERSION: u8 = 1;

const TAG_POINT: u8 = 1;
const TAG_LINE_STRING: u8 = 2;
const TAG_POLYGON: u8 = 3;

/// Smallest possible encoded shape: tag, ring count, attribute length.
const MIN_SHAPE_SIZE: u64 = 1 + 4 + 4;
const POINT_SIZE: u64 = 16;

/// Encodes the collection into the `GVEC` binary format.
pub fn encode_binary(collection: &VectorCollection) -> Result<Vec<u8>> {
	let mut writer = ValueWriterVec::new_le();
	writer.write_slice(MAGIC)?;
	writer.write_u8(VERSION)?;
	write_count(&mut writer, collection.len(), "shapes")?;
	for (index, shape) in collection.shapes().iter().enumerate() {
		write_shape(&mut writer, shape).with_context(|| format!("while encoding shape {index}"))?;
	}
	let data = writer.into_vec();
	log::debug!("encoded {} shapes into {} bytes", collection.len(), data.len());
	Ok(data)
}

fn write_count(writer: &mut dyn ValueWriter<LE>, count: usize, what: &str) -> Result<()> {
	let count = u32::try_from(count).with_context(|| format!("too many {what}: {count}"))?;
	writer.write_u32(count)
}

fn write_points(writer: &mut dyn ValueWriter<LE>, coords: &[Coordinates]) -> Result<()> {
	write_count(writer, coords.len(), "points")?;
	for coord in coords {
		writer.write_f64(coord.x())?;
		writer.write_f64(coord.y())?;
	}
	Ok(())
}

fn write_shape(writer: &mut dyn ValueWriter<LE>, shape: &Shape) -> Result<()> {
	match shape.geometry() {
		Geometry::Point(point) => {
			writer.write_u8(TAG_POINT)?;
			writer.write_u32(1)?;
			write_points(writer, &[point.0])?;
		}
		Geometry::LineString(line) => {
			writer.write_u8(TAG_LINE_STRING)?;
			writer.write_u32(1)?;
			write_points(writer, line.coords())?;
		}
		Geometry::Polygon(polygon) => {
			writer.write_u8(TAG_POLYGON)?;
			write_count(writer, polygon.rings().len(), "rings")?;
			for ring in polygon.rings() {
				write_points(writer, ring.coords())?;
			}
		}
	}

	let mut block = ValueWriterVec::new_le();
	write_attribute_block(&mut block, shape.attributes())?;
	let block = block.into_vec();
	write_count(writer, block.len(), "attribute bytes")?;
	writer.write_slice(&block)
}

/// Decodes data produced by [`encode_binary`].
///
/// Every inconsistency, including bytes after the last shape, fails with `CorruptData`.
pub fn decode_binary(data: &[u8]) -> Result<VectorCollection> {
	let mut reader = ValueReaderSlice::new_le(data);

	let magic = reader.read_bytes(4).context("while reading the header")?;
	ensure_kind!(magic == MAGIC, CorruptData, "not a GVEC file");
	let version = reader.read_u8().context("while reading the header")?;
	ensure_kind!(version == VERSION, CorruptData, "unsupported version {version}");

	let count = u64::from(reader.read_u32().context("while reading the header")?);
	check_count(&mut reader, count, MIN_SHAPE_SIZE, "shapes")?;

	let mut shapes = Vec::with_capacity(count as usize);
	for index in 0..count {
		let shape = read_shape(&mut reader).with_context(|| format!("while decoding shape {index}"))?;
		log::trace!("decoded shape {index}: {:?}", shape.geometry());
		shapes.push(shape);
	}

	let remaining = reader.remaining();
	ensure_kind!(remaining == 0, CorruptData, "{remaining} unexpected bytes after the last shape");
	log::debug!("decoded {} shapes from {} bytes", shapes.len(), data.len());
	Ok(VectorCollection::from_shapes(shapes))
}

fn check_count(reader: &mut dyn ValueReader<'_, LE>, count: u64, min_size: u64, what: &str) -> Result<()> {
	let remaining = reader.remaining();
	ensure_kind!(
		count.saturating_mul(min_size) <= remaining,
		CorruptData,
		"{count} {what} cannot fit into the {remaining} remaining bytes"
	);
	Ok(())
}

fn read_points(reader: &mut dyn ValueReader<'_, LE>) -> Result<Vec<Coordinates>> {
	let count = u64::from(reader.read_u32()?);
	check_count(reader, count, POINT_SIZE, "points")?;
	let mut coords = Vec::with_capacity(count as usize);
	for _ in 0..count {
		let x = reader.read_f64()?;
		let y = reader.read_f64()?;
		coords.push(Coordinates::new(x, y));
	}
	Ok(coords)
}

fn read_shape(reader: &mut dyn ValueReader<'_, LE>) -> Result<Shape> {
	let tag = reader.read_u8()?;
	let ring_count = u64::from(reader.read_u32()?);

	let geometry = match tag {
		TAG_POINT | TAG_LINE_STRING => {
			ensure_kind!(ring_count == 1, CorruptData, "expected 1 ring, found {ring_count}");
			let coords = read_points(reader)?;
			if tag == TAG_POINT {
				ensure_kind!(coords.len() == 1, CorruptData, "a point needs 1 position, found {}", coords.len());
				Geometry::Point(PointGeometry(coords[0]))
			} else {
				Geometry::LineString(
					LineStringGeometry::new(coords).kind_context(ErrorKind::CorruptData, || "invalid line string".into())?,
				)
			}
		}
		TAG_POLYGON => {
			ensure_kind!(ring_count >= 1, CorruptData, "a polygon needs at least 1 ring");
			check_count(reader, ring_count, 4, "rings")?;
			let mut rings = Vec::with_capacity(ring_count as usize);
			for index in 0..ring_count {
				let ring = RingGeometry::from_closed(read_points(reader)?)
					.kind_context(ErrorKind::CorruptData, || format!("invalid ring {index}"))?;
				rings.push(ring);
			}
			Geometry::Polygon(PolygonGeometry::from_rings(rings)?)
		}
		t => bail_kind!(CorruptData, "unknown shape tag {t}"),
	};

	let attr_len = u64::from(reader.read_u32()?);
	let mut block = reader.get_sub_reader(attr_len)?;
	let attributes = read_attribute_block(block.as_mut()).context("while reading attributes")?;
	let leftover = block.remaining();
	ensure_kind!(leftover == 0, CorruptData, "{leftover} unexpected bytes in attribute block");

	Ok(Shape::with_attributes(geometry, attributes))
}
