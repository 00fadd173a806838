//! JSON token helpers on top of [`ByteIterator`].
//!
//! Each helper consumes exactly one token (or one container) and leaves the iterator on the first
//! byte after it. Object and array helpers hand every member to a callback, so callers decide how to
//! parse values without building an intermediate tree. Syntax errors are reported as
//! [`ErrorKind::MalformedJson`](crate::ErrorKind::MalformedJson) with the byte position.

use super::iterator::ByteIterator;
use anyhow::Result;
use std::str::FromStr;

/// Matches a fixed ASCII tag such as `null` or `true`.
///
/// # Arguments
/// * `iter` - The iterator, positioned at the first byte of the tag.
/// * `tag` - The expected text.
///
/// # Errors
/// Returns a `MalformedJson` error at the first byte that differs from `tag`.
pub fn parse_tag(iter: &mut ByteIterator, tag: &str) -> Result<()> {
	for expected in tag.bytes() {
		if iter.expect_next_byte()? != expected {
			return Err(iter.format_error(&format!("unexpected character while parsing tag '{tag}'")));
		}
	}
	Ok(())
}

fn parse_hex4(iter: &mut ByteIterator) -> Result<u16> {
	let mut value = 0u16;
	for _ in 0..4 {
		let digit = match iter.expect_next_byte()? {
			b @ b'0'..=b'9' => b - b'0',
			b @ b'a'..=b'f' => b - b'a' + 10,
			b @ b'A'..=b'F' => b - b'A' + 10,
			_ => return Err(iter.format_error("invalid hex digit in unicode escape")),
		};
		value = (value << 4) | u16::from(digit);
	}
	Ok(value)
}

fn parse_unicode_escape(iter: &mut ByteIterator) -> Result<char> {
	let first = parse_hex4(iter)?;
	let code_point = match first {
		0xD800..=0xDBFF => {
			if iter.expect_next_byte()? != b'\\' || iter.expect_next_byte()? != b'u' {
				return Err(iter.format_error("high surrogate must be followed by a low surrogate"));
			}
			let second = parse_hex4(iter)?;
			if !(0xDC00..=0xDFFF).contains(&second) {
				return Err(iter.format_error("invalid low surrogate"));
			}
			0x10000 + ((u32::from(first) - 0xD800) << 10) + (u32::from(second) - 0xDC00)
		}
		0xDC00..=0xDFFF => return Err(iter.format_error("unexpected low surrogate")),
		_ => u32::from(first),
	};
	char::from_u32(code_point).ok_or_else(|| iter.format_error("invalid unicode code point"))
}

/// Parses a quoted JSON string, resolving all escapes including surrogate pairs.
///
/// Leading whitespace is skipped. Raw control characters inside the string are rejected.
///
/// # Errors
/// Returns a `MalformedJson` error for a missing quote, an unknown escape, an unpaired surrogate,
/// a control character or invalid UTF-8.
///
/// # Returns
/// The unescaped string.
pub fn parse_quoted_json_string(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'"' {
		return Err(iter.format_error("expected '\"' while parsing a string"));
	}

	let mut bytes = Vec::with_capacity(32);
	loop {
		match iter.expect_next_byte()? {
			b'"' => break,
			b'\\' => match iter.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(0x08),
				b'f' => bytes.push(0x0C),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					let c = parse_unicode_escape(iter)?;
					let mut buf = [0u8; 4];
					bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
				}
				c => return Err(iter.format_error(&format!("invalid escape sequence '\\{}'", c as char))),
			},
			c if c < 0x20 => return Err(iter.format_error("unescaped control character in string")),
			c => bytes.push(c),
		}
	}
	String::from_utf8(bytes).map_err(|_| iter.format_error("invalid UTF-8 in string"))
}

fn push_digits(iter: &mut ByteIterator, number: &mut Vec<u8>) -> bool {
	let mut any = false;
	while let Some(b @ b'0'..=b'9') = iter.peek() {
		number.push(b);
		iter.advance();
		any = true;
	}
	any
}

/// Parses a JSON number and returns its text.
///
/// Accepts an optional minus sign, integer digits, an optional fraction and an optional exponent.
/// Stops at the first byte that cannot continue the number.
pub fn parse_number_as_string(iter: &mut ByteIterator) -> Result<String> {
	let mut number = Vec::with_capacity(24);

	if iter.peek() == Some(b'-') {
		number.push(iter.expect_next_byte()?);
	}

	if !push_digits(iter, &mut number) {
		return Err(iter.format_error("expected digits in number"));
	}

	if iter.peek() == Some(b'.') {
		number.push(iter.expect_next_byte()?);
		if !push_digits(iter, &mut number) {
			return Err(iter.format_error("expected digits after decimal point"));
		}
		if iter.peek() == Some(b'.') {
			return Err(iter.format_error("unexpected '.' in number"));
		}
	}

	if let Some(b'e' | b'E') = iter.peek() {
		number.push(iter.expect_next_byte()?);
		if let Some(b'+' | b'-') = iter.peek() {
			number.push(iter.expect_next_byte()?);
		}
		if !push_digits(iter, &mut number) {
			return Err(iter.format_error("expected digits after exponent"));
		}
	}

	// only ASCII digits, signs, '.', 'e' and 'E' were collected
	Ok(number.into_iter().map(char::from).collect())
}

/// Parses a JSON number into any type implementing [`FromStr`].
///
/// # Errors
/// Returns a `MalformedJson` error if the text is not a JSON number or does not parse as `R`.
pub fn parse_number_as<R: FromStr>(iter: &mut ByteIterator) -> Result<R> {
	parse_number_as_string(iter)?
		.parse::<R>()
		.map_err(|_| iter.format_error("invalid number"))
}

/// Walks the members of a JSON object, calling `parse_value` with each key.
///
/// The callback gets the iterator positioned at the start of the member value and must consume
/// exactly that value.
///
/// # Arguments
/// * `iter` - The iterator, positioned at or before the opening `{`.
/// * `parse_value` - Called with every key and the iterator.
///
/// # Errors
/// Returns a `MalformedJson` error for broken syntax, and any error of `parse_value` unchanged.
pub fn parse_object_entries(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(String, &mut ByteIterator) -> Result<()>,
) -> Result<()> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'{' {
		return Err(iter.format_error("expected '{' while parsing an object"));
	}

	iter.skip_whitespace();
	if iter.peek() == Some(b'}') {
		iter.advance();
		return Ok(());
	}

	loop {
		iter.skip_whitespace();
		if iter.expect_peeked_byte()? != b'"' {
			return Err(iter.format_error("parsing object, expected '\"'"));
		}
		let key = parse_quoted_json_string(iter)?;

		iter.skip_whitespace();
		if iter.expect_next_byte()? != b':' {
			return Err(iter.format_error("expected ':'"));
		}
		iter.skip_whitespace();
		parse_value(key, iter)?;

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => {}
			b'}' => return Ok(()),
			_ => return Err(iter.format_error("parsing object, expected ',' or '}'")),
		}
	}
}

/// Parses a JSON array, collecting the result of `parse_value` for every element.
///
/// # Returns
/// The collected elements in document order.
pub fn parse_array_entries<R>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(&mut ByteIterator) -> Result<R>,
) -> Result<Vec<R>> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'[' {
		return Err(iter.format_error("expected '[' while parsing an array"));
	}

	let mut result = Vec::new();
	iter.skip_whitespace();
	if iter.peek() == Some(b']') {
		iter.advance();
		return Ok(result);
	}

	loop {
		iter.skip_whitespace();
		result.push(parse_value(iter)?);
		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => {}
			b']' => return Ok(result),
			_ => return Err(iter.format_error("parsing array, expected ',' or ']'")),
		}
	}
}

/// Nesting limit of [`skip_json_value`].
pub const MAX_SKIP_DEPTH: usize = 128;

/// Consumes one JSON value of any type without keeping it.
///
/// Used for members a parser does not know. Containers nested deeper than [`MAX_SKIP_DEPTH`]
/// are rejected.
pub fn skip_json_value(iter: &mut ByteIterator) -> Result<()> {
	skip_value_at_depth(iter, 0)
}

fn skip_value_at_depth(iter: &mut ByteIterator, depth: usize) -> Result<()> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' | b'{' if depth >= MAX_SKIP_DEPTH => Err(iter.format_error("JSON nested too deep")),
		b'[' => parse_array_entries(iter, |iter| skip_value_at_depth(iter, depth + 1)).map(|_| ()),
		b'{' => parse_object_entries(iter, |_, iter| skip_value_at_depth(iter, depth + 1)),
		b'"' => parse_quoted_json_string(iter).map(|_| ()),
		b't' => parse_tag(iter, "true"),
		b'f' => parse_tag(iter, "false"),
		b'n' => parse_tag(iter, "null"),
		b'-' | b'0'..=b'9' => parse_number_as_string(iter).map(|_| ()),
		c => Err(iter.format_error(&format!("unexpected character '{}' while parsing a value", c as char))),
	}
}
