//! Attribute block codec.
//!
//! A block is a varint entry count followed by the entries. An entry is a varint key length, the
//! UTF-8 key and a value. A value is a type byte followed by its payload.

use crate::{AttributeMap, AttributeValue, MAX_ATTRIBUTE_DEPTH};
use anyhow::{Context, Result};
use byteorder::LE;
use geovec_core::{
	bail_kind, ensure_kind,
	io::{ValueReader, ValueWriter},
};

const TYPE_NULL: u8 = 0;
const TYPE_BOOL: u8 = 1;
const TYPE_INT: u8 = 2;
const TYPE_UINT: u8 = 3;
const TYPE_DOUBLE: u8 = 4;
const TYPE_STRING: u8 = 5;
const TYPE_LIST: u8 = 6;
const TYPE_MAP: u8 = 7;

pub fn write_attribute_block(writer: &mut dyn ValueWriter<LE>, map: &AttributeMap) -> Result<()> {
	write_map(writer, map, 0)
}

fn write_map(writer: &mut dyn ValueWriter<LE>, map: &AttributeMap, depth: usize) -> Result<()> {
	writer.write_varint(map.len() as u64)?;
	for (key, value) in map {
		writer.write_varint(key.len() as u64)?;
		writer.write_string(key)?;
		write_value(writer, value, depth).with_context(|| format!("attribute '{key}'"))?;
	}
	Ok(())
}

fn write_value(writer: &mut dyn ValueWriter<LE>, value: &AttributeValue, depth: usize) -> Result<()> {
	use AttributeValue::*;
	if matches!(value, List(_) | Map(_)) {
		ensure_kind!(
			depth < MAX_ATTRIBUTE_DEPTH,
			UnsupportedAttributeValue,
			"attribute values are nested deeper than {MAX_ATTRIBUTE_DEPTH} levels"
		);
	}
	match value {
		Null => writer.write_u8(TYPE_NULL)?,
		Bool(v) => {
			writer.write_u8(TYPE_BOOL)?;
			writer.write_u8(u8::from(*v))?;
		}
		Int(v) => {
			writer.write_u8(TYPE_INT)?;
			writer.write_svarint(*v)?;
		}
		UInt(v) => {
			writer.write_u8(TYPE_UINT)?;
			writer.write_varint(*v)?;
		}
		Double(v) => {
			writer.write_u8(TYPE_DOUBLE)?;
			writer.write_f64(*v)?;
		}
		String(v) => {
			writer.write_u8(TYPE_STRING)?;
			writer.write_varint(v.len() as u64)?;
			writer.write_string(v)?;
		}
		List(list) => {
			writer.write_u8(TYPE_LIST)?;
			writer.write_varint(list.len() as u64)?;
			for item in list {
				write_value(writer, item, depth + 1)?;
			}
		}
		Map(map) => {
			writer.write_u8(TYPE_MAP)?;
			write_map(writer, map, depth + 1)?;
		}
	}
	Ok(())
}

/// Reads a block written by [`write_attribute_block`]. Every failure is `CorruptData`.
pub fn read_attribute_block(reader: &mut dyn ValueReader<'_, LE>) -> Result<AttributeMap> {
	read_map(reader, 0)
}

/// Fails unless `count` items of at least `min_size` bytes each can still follow.
fn check_count(reader: &mut dyn ValueReader<'_, LE>, count: u64, min_size: u64) -> Result<()> {
	let remaining = reader.remaining();
	ensure_kind!(
		count.saturating_mul(min_size) <= remaining,
		CorruptData,
		"count {count} exceeds the {remaining} remaining bytes"
	);
	Ok(())
}

fn read_map(reader: &mut dyn ValueReader<'_, LE>, depth: usize) -> Result<AttributeMap> {
	let count = reader.read_varint()?;
	check_count(reader, count, 2)?;
	let mut map = AttributeMap::new();
	for _ in 0..count {
		let key_length = reader.read_varint()?;
		let key = reader.read_string(key_length)?;
		let value = read_value(reader, depth).with_context(|| format!("attribute '{key}'"))?;
		map.insert(key, value);
	}
	Ok(map)
}

fn read_value(reader: &mut dyn ValueReader<'_, LE>, depth: usize) -> Result<AttributeValue> {
	let value_type = reader.read_u8()?;
	if matches!(value_type, TYPE_LIST | TYPE_MAP) {
		ensure_kind!(
			depth < MAX_ATTRIBUTE_DEPTH,
			CorruptData,
			"attribute values are nested deeper than {MAX_ATTRIBUTE_DEPTH} levels"
		);
	}
	Ok(match value_type {
		TYPE_NULL => AttributeValue::Null,
		TYPE_BOOL => match reader.read_u8()? {
			0 => AttributeValue::Bool(false),
			1 => AttributeValue::Bool(true),
			b => bail_kind!(CorruptData, "invalid boolean byte {b}"),
		},
		TYPE_INT => AttributeValue::Int(reader.read_svarint()?),
		TYPE_UINT => AttributeValue::UInt(reader.read_varint()?),
		TYPE_DOUBLE => AttributeValue::Double(reader.read_f64()?),
		TYPE_STRING => {
			let length = reader.read_varint()?;
			AttributeValue::String(reader.read_string(length)?)
		}
		TYPE_LIST => {
			let count = reader.read_varint()?;
			check_count(reader, count, 1)?;
			let mut list = Vec::with_capacity(count as usize);
			for _ in 0..count {
				list.push(read_value(reader, depth + 1)?);
			}
			AttributeValue::List(list)
		}
		TYPE_MAP => AttributeValue::Map(read_map(reader, depth + 1)?),
		t => bail_kind!(CorruptData, "unknown attribute value type {t}"),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use geovec_core::{
		ErrorKind, error_kind,
		io::{ValueReaderSlice, ValueWriterVec},
	};
	use pretty_assertions::assert_eq;

	fn encode(map: &AttributeMap) -> Result<Vec<u8>> {
		let mut writer = ValueWriterVec::new_le();
		write_attribute_block(&mut writer, map)?;
		Ok(writer.into_vec())
	}

	fn decode(data: &[u8]) -> Result<AttributeMap> {
		let mut reader = ValueReaderSlice::new_le(data);
		let map = read_attribute_block(&mut reader)?;
		assert!(!reader.has_remaining());
		Ok(map)
	}

	fn nested_list(levels: usize) -> AttributeValue {
		(0..levels).fold(AttributeValue::Null, |value, _| AttributeValue::List(vec![value]))
	}

	#[test]
	fn byte_layout() {
		let map = AttributeMap::from(vec![
			("b", AttributeValue::Bool(true)),
			("i", AttributeValue::Int(-2)),
			("s", AttributeValue::from("hé")),
		]);
		assert_eq!(
			encode(&map).unwrap(),
			vec![
				3, // entries
				1, b'b', TYPE_BOOL, 1, //
				1, b'i', TYPE_INT, 3, //
				1, b's', TYPE_STRING, 3, b'h', 0xC3, 0xA9,
			]
		);
	}

	#[test]
	fn empty_block() {
		assert_eq!(encode(&AttributeMap::new()).unwrap(), vec![0]);
		assert!(decode(&[0]).unwrap().is_empty());
	}

	#[test]
	fn all_value_types_survive() {
		let mut inner = AttributeMap::new();
		inner.insert("deep", vec![1.5, f64::INFINITY]);
		let map = AttributeMap::from(vec![
			("null", AttributeValue::Null),
			("bool", AttributeValue::Bool(false)),
			("int", AttributeValue::Int(i64::MIN)),
			("uint", AttributeValue::UInt(u64::MAX)),
			("double", AttributeValue::Double(-0.125)),
			("string", AttributeValue::from("")),
			("list", AttributeValue::from(vec![AttributeValue::Null, AttributeValue::from("x")])),
			("map", AttributeValue::from(inner)),
		]);
		assert_eq!(decode(&encode(&map).unwrap()).unwrap(), map);
	}

	#[test]
	fn nesting_limit() {
		let ok = AttributeMap::from(vec![("v", nested_list(MAX_ATTRIBUTE_DEPTH))]);
		assert_eq!(decode(&encode(&ok).unwrap()).unwrap(), ok);

		let too_deep = AttributeMap::from(vec![("v", nested_list(MAX_ATTRIBUTE_DEPTH + 1))]);
		let err = encode(&too_deep).unwrap_err();
		assert_eq!(error_kind(&err), Some(ErrorKind::UnsupportedAttributeValue));

		let mut data = vec![1, 1, b'v'];
		for _ in 0..=MAX_ATTRIBUTE_DEPTH {
			data.extend_from_slice(&[TYPE_LIST, 1]);
		}
		data.push(TYPE_NULL);
		let err = decode(&data).unwrap_err();
		assert_eq!(error_kind(&err), Some(ErrorKind::CorruptData));
	}

	#[test]
	fn corrupt_blocks() {
		let kind = |data: &[u8]| error_kind(&decode(data).unwrap_err());
		// unknown type
		assert_eq!(kind(&[1, 1, b'k', 9]), Some(ErrorKind::CorruptData));
		// bool byte out of range
		assert_eq!(kind(&[1, 1, b'k', TYPE_BOOL, 2]), Some(ErrorKind::CorruptData));
		// invalid UTF-8 key
		assert_eq!(kind(&[1, 1, 0xFF, TYPE_NULL]), Some(ErrorKind::CorruptData));
		// truncated double
		assert_eq!(kind(&[1, 1, b'k', TYPE_DOUBLE, 0, 0]), Some(ErrorKind::CorruptData));
		// absurd counts
		assert_eq!(kind(&[0xFF, 0xFF, 0xFF, 0xFF, 0x0F]), Some(ErrorKind::CorruptData));
		assert_eq!(kind(&[1, 1, b'k', TYPE_LIST, 0x80, 0x80, 0x04]), Some(ErrorKind::CorruptData));
	}
}
