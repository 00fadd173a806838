//! [`ValueReaderSlice`] reads values from a borrowed byte slice.

use super::{SeekRead, ValueReader};
use crate::bail_kind;
use anyhow::Result;
use byteorder::{ByteOrder, LittleEndian};
use std::{io::Cursor, marker::PhantomData};

pub struct ValueReaderSlice<'a, E: ByteOrder> {
	_phantom: PhantomData<E>,
	cursor: Cursor<&'a [u8]>,
	len: u64,
}

impl<'a, E: ByteOrder> ValueReaderSlice<'a, E> {
	/// Creates a reader over `slice` in byte order `E`.
	///
	/// # Arguments
	/// * `slice` - The bytes to read. The reader borrows them without copying.
	#[must_use]
	pub fn new(slice: &'a [u8]) -> ValueReaderSlice<'a, E> {
		ValueReaderSlice {
			_phantom: PhantomData,
			len: slice.len() as u64,
			cursor: Cursor::new(slice),
		}
	}
}

impl<'a> ValueReaderSlice<'a, LittleEndian> {
	/// Creates a little-endian reader, the byte order of the `.gvec` format.
	#[must_use]
	pub fn new_le(slice: &'a [u8]) -> ValueReaderSlice<'a, LittleEndian> {
		ValueReaderSlice::new(slice)
	}
}

impl SeekRead for Cursor<&[u8]> {}

impl<'a, E: ByteOrder + 'a> ValueReader<'a, E> for ValueReaderSlice<'a, E> {
	fn get_reader(&mut self) -> &mut dyn SeekRead {
		&mut self.cursor
	}

	fn len(&self) -> u64 {
		self.len
	}

	fn position(&mut self) -> u64 {
		self.cursor.position()
	}

	fn get_sub_reader<'b>(&'b mut self, length: u64) -> Result<Box<dyn ValueReader<'b, E> + 'b>>
	where
		E: 'b,
	{
		let start = self.cursor.position();
		let end = start.saturating_add(length);
		if end > self.len {
			bail_kind!(
				CorruptData,
				"block of {length} bytes at offset {start} exceeds the data length {}",
				self.len
			);
		}
		self.cursor.set_position(end);

		let slice = &self.cursor.get_ref()[start as usize..end as usize];
		Ok(Box::new(ValueReaderSlice::<E>::new(slice)))
	}
}
