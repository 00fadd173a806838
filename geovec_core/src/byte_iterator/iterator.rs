//! A buffered byte iterator over any [`Read`] source.
//!
//! The iterator always holds one peeked byte, so parsers can decide what comes next without
//! consuming it. With debug mode enabled it keeps the most recent bytes in a ring buffer and
//! includes them in error messages, which makes syntax errors in large documents easy to locate.

use crate::ErrorKind;
use anyhow::{Error, Result};
use std::io::{self, Read};

const DEBUG_RING_BUFFER_SIZE: usize = 24;
const BUFFER_SIZE: usize = 8192;

/// Iterator over the bytes of a reader with one byte of lookahead.
pub struct ByteIterator<'a> {
	buffer: Box<[u8; BUFFER_SIZE]>,
	buffer_len: usize,
	buffer_pos: usize,
	source: Box<dyn Read + 'a>,
	peeked_byte: Option<u8>,
	position: usize,
	read_failure: Option<String>,
	debug_buffer: Option<[u8; DEBUG_RING_BUFFER_SIZE]>,
}

impl<'a> ByteIterator<'a> {
	/// Creates an iterator reading from `reader`.
	///
	/// # Arguments
	/// * `reader` - Any source implementing [`Read`]; it is read in chunks of 8 KiB.
	/// * `debug` - If `true`, error messages include the bytes preceding the error position.
	///
	/// # Returns
	/// A `ByteIterator` with the first byte already peeked.
	pub fn from_reader(reader: impl Read + 'a, debug: bool) -> Self {
		let mut instance = ByteIterator {
			buffer: Box::new([0; BUFFER_SIZE]),
			buffer_len: 0,
			buffer_pos: 0,
			source: Box::new(reader),
			peeked_byte: None,
			position: 0,
			read_failure: None,
			debug_buffer: debug.then_some([0; DEBUG_RING_BUFFER_SIZE]),
		};
		instance.advance();
		instance
	}

	/// Creates an iterator over an in-memory string.
	///
	/// # Arguments
	/// * `text` - The text to iterate over.
	/// * `debug` - See [`ByteIterator::from_reader`].
	pub fn from_text(text: &'a str, debug: bool) -> Self {
		Self::from_reader(text.as_bytes(), debug)
	}

	fn fill_buffer(&mut self) {
		self.buffer_pos = 0;
		self.buffer_len = 0;
		if self.read_failure.is_some() {
			return;
		}
		loop {
			match self.source.read(&mut self.buffer[..]) {
				Ok(len) => {
					self.buffer_len = len;
					return;
				}
				Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
				Err(e) => {
					log::warn!("reading input failed at byte {}: {e}", self.position);
					self.read_failure = Some(e.to_string());
					return;
				}
			}
		}
	}

	#[inline]
	fn next_byte(&mut self) -> Option<u8> {
		if self.buffer_pos >= self.buffer_len {
			self.fill_buffer();
			if self.buffer_len == 0 {
				return None;
			}
		}
		let byte = self.buffer[self.buffer_pos];
		self.buffer_pos += 1;
		Some(byte)
	}

	/// Builds a [`ErrorKind::MalformedJson`] error annotated with the current position.
	///
	/// If the underlying reader failed, the error is an [`ErrorKind::Io`] error instead, because
	/// the "syntax error" is only a symptom of the truncated input.
	///
	/// # Arguments
	/// * `msg` - Description of what was expected or found.
	///
	/// # Returns
	/// An [`Error`] carrying the message, the position and, in debug mode, a snippet.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		let position = self.position.saturating_sub(1);
		if let Some(failure) = &self.read_failure {
			return ErrorKind::Io.error(format!("{msg} at position {position}: read failed: {failure}"));
		}

		let Some(ring) = &self.debug_buffer else {
			return ErrorKind::MalformedJson.error(format!("{msg} at position {position}"));
		};

		let consumed = self.position.saturating_sub(1);
		let length = consumed.min(DEBUG_RING_BUFFER_SIZE - 1);
		let start = (self.position + DEBUG_RING_BUFFER_SIZE - 1 - length) % DEBUG_RING_BUFFER_SIZE;
		let snapshot: Vec<u8> = ring.iter().cycle().skip(start).take(length).copied().collect();

		let mut snippet = String::from_utf8_lossy(&snapshot).into_owned();
		if self.peeked_byte.is_none() {
			snippet.push_str("<EOF>");
		}
		ErrorKind::MalformedJson.error(format!("{msg} at position {position}: {snippet}"))
	}

	/// Absolute position of the peeked byte plus one.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.peeked_byte
	}

	/// Drops the peeked byte and loads the next one.
	#[inline]
	pub fn advance(&mut self) {
		if let (Some(ring), Some(byte)) = (self.debug_buffer.as_mut(), self.peeked_byte) {
			ring[(self.position + DEBUG_RING_BUFFER_SIZE - 1) % DEBUG_RING_BUFFER_SIZE] = byte;
		}
		self.peeked_byte = self.next_byte();
		self.position += 1;
	}

	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let current_byte = self.peeked_byte;
		self.advance();
		current_byte
	}

	/// Consumes the peeked byte, failing at the end of input.
	///
	/// # Errors
	/// Returns a `MalformedJson` error ("unexpected end") if no byte is left.
	///
	/// # Returns
	/// The consumed byte.
	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8> {
		match self.peeked_byte {
			Some(byte) => {
				self.advance();
				Ok(byte)
			}
			None => Err(self.format_error("unexpected end")),
		}
	}

	/// Returns the peeked byte without consuming it, failing at the end of input.
	///
	/// # Errors
	/// Returns a `MalformedJson` error ("unexpected end") if no byte is left.
	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peeked_byte.ok_or_else(|| self.format_error("unexpected end"))
	}

	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}

	/// Fails unless only whitespace is left.
	pub fn expect_end(&mut self) -> Result<()> {
		self.skip_whitespace();
		match self.peek() {
			None => match self.read_failure {
				Some(_) => Err(self.format_error("input ended early")),
				None => Ok(()),
			},
			Some(byte) => Err(self.format_error(&format!("unexpected trailing character '{}'", byte as char))),
		}
	}
}
