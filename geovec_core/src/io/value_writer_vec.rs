//! [`ValueWriterVec`] collects written values in memory.

use super::ValueWriter;
use anyhow::Result;
use byteorder::{ByteOrder, LittleEndian};
use std::{
	io::{Cursor, Write},
	marker::PhantomData,
};

pub struct ValueWriterVec<E: ByteOrder> {
	_phantom: PhantomData<E>,
	cursor: Cursor<Vec<u8>>,
}

impl<E: ByteOrder> ValueWriterVec<E> {
	#[must_use]
	pub fn new() -> ValueWriterVec<E> {
		ValueWriterVec {
			_phantom: PhantomData,
			cursor: Cursor::new(Vec::new()),
		}
	}

	/// Consumes the writer and returns the written bytes.
	///
	/// # Returns
	/// A `Vec<u8>` with everything written so far.
	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.cursor.into_inner()
	}
}

impl<E: ByteOrder> Default for ValueWriterVec<E> {
	fn default() -> Self {
		Self::new()
	}
}

impl ValueWriterVec<LittleEndian> {
	#[must_use]
	pub fn new_le() -> ValueWriterVec<LittleEndian> {
		ValueWriterVec::new()
	}
}

impl<E: ByteOrder> ValueWriter<E> for ValueWriterVec<E> {
	fn get_writer(&mut self) -> &mut dyn Write {
		&mut self.cursor
	}

	fn position(&mut self) -> Result<u64> {
		Ok(self.cursor.position())
	}
}
