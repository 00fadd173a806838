//! The [`ValueReader`] trait.
//!
//! ```
//! use geovec_core::io::{ValueReader, ValueReaderSlice};
//!
//! let mut reader = ValueReaderSlice::new_le(&[0xAC, 0x02, 0x2A, 0x00, 0x00, 0x00]);
//! assert_eq!(reader.read_varint().unwrap(), 300);
//! assert_eq!(reader.read_u32().unwrap(), 42);
//! assert!(!reader.has_remaining());
//! ```

use crate::{ErrorKind, KindContext, bail_kind};
use anyhow::Result;
use byteorder::{ByteOrder, ReadBytesExt};
use std::io::{Read, Seek};

/// Anything that is both [`Read`] and [`Seek`].
pub trait SeekRead: Seek + Read {}

/// Reads binary values in byte order `E`.
///
/// Every failure caused by missing or inconsistent bytes is reported as
/// [`ErrorKind::CorruptData`].
pub trait ValueReader<'a, E: ByteOrder + 'a> {
	/// Returns the underlying reader to access raw bytes.
	///
	/// # Returns
	/// A mutable reference to the underlying reader implementing `SeekRead`.
	fn get_reader(&mut self) -> &mut dyn SeekRead;

	/// Total number of readable bytes.
	fn len(&self) -> u64;

	/// Current read position, in bytes from the start.
	fn position(&mut self) -> u64;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Number of bytes left to read.
	///
	/// # Returns
	/// Zero if the position is at or beyond the end.
	fn remaining(&mut self) -> u64 {
		self.len().saturating_sub(self.position())
	}

	fn has_remaining(&mut self) -> bool {
		self.remaining() > 0
	}

	/// Reads an unsigned LEB128 varint of at most 10 bytes.
	///
	/// # Errors
	/// Returns a `CorruptData` error if the input ends early or the varint does not fit 64 bits.
	///
	/// # Returns
	/// The decoded value.
	fn read_varint(&mut self) -> Result<u64> {
		let mut value = 0u64;
		let mut shift = 0;
		loop {
			let byte = self.read_u8()?;
			value |= (u64::from(byte) & 0x7F) << shift;
			if byte & 0x80 == 0 {
				return Ok(value);
			}
			shift += 7;
			if shift >= 64 {
				bail_kind!(CorruptData, "varint too long");
			}
		}
	}

	/// Reads a zigzag-encoded signed varint.
	fn read_svarint(&mut self) -> Result<i64> {
		let value = self.read_varint()?;
		Ok(((value >> 1) as i64) ^ -((value & 1) as i64))
	}

	fn read_u8(&mut self) -> Result<u8> {
		self.get_reader().read_u8().or_kind(ErrorKind::CorruptData)
	}

	fn read_u32(&mut self) -> Result<u32> {
		self.get_reader().read_u32::<E>().or_kind(ErrorKind::CorruptData)
	}

	fn read_u64(&mut self) -> Result<u64> {
		self.get_reader().read_u64::<E>().or_kind(ErrorKind::CorruptData)
	}

	fn read_i64(&mut self) -> Result<i64> {
		self.get_reader().read_i64::<E>().or_kind(ErrorKind::CorruptData)
	}

	fn read_f64(&mut self) -> Result<f64> {
		self.get_reader().read_f64::<E>().or_kind(ErrorKind::CorruptData)
	}

	/// Reads exactly `length` bytes.
	///
	/// # Arguments
	/// * `length` - Number of bytes to read.
	///
	/// # Errors
	/// Returns a `CorruptData` error if fewer than `length` bytes remain. Nothing is allocated in
	/// that case.
	fn read_bytes(&mut self, length: u64) -> Result<Vec<u8>> {
		if length > self.remaining() {
			bail_kind!(
				CorruptData,
				"cannot read {length} bytes, only {} remaining",
				self.remaining()
			);
		}
		let mut buffer = vec![0; length as usize];
		self.get_reader().read_exact(&mut buffer).or_kind(ErrorKind::CorruptData)?;
		Ok(buffer)
	}

	/// Reads `length` bytes of UTF-8 text.
	fn read_string(&mut self, length: u64) -> Result<String> {
		let bytes = self.read_bytes(length)?;
		String::from_utf8(bytes).kind_context(ErrorKind::CorruptData, || "string is not valid UTF-8".to_string())
	}

	/// Splits off the next `length` bytes as an independent reader and skips them here.
	///
	/// # Arguments
	/// * `length` - Size of the sub reader in bytes.
	///
	/// # Errors
	/// Returns a `CorruptData` error if fewer than `length` bytes remain.
	///
	/// # Returns
	/// A boxed reader positioned at its own start.
	fn get_sub_reader<'b>(&'b mut self, length: u64) -> Result<Box<dyn ValueReader<'b, E> + 'b>>
	where
		E: 'b;
}
