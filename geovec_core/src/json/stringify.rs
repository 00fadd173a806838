use super::JsonValue;
use std::fmt::Write;

/// Serializes `json` as compact JSON text.
///
/// Floats use the shortest text that parses back to the same value, so `1.0` becomes `1`.
/// Non-finite floats have no JSON representation; callers must reject them beforehand.
#[must_use]
pub fn stringify(json: &JsonValue) -> String {
	let mut output = String::new();
	write_value(json, &mut output);
	output
}

fn write_value(json: &JsonValue, output: &mut String) {
	match json {
		JsonValue::Array(array) => {
			output.push('[');
			for (index, value) in array.iter().enumerate() {
				if index > 0 {
					output.push(',');
				}
				write_value(value, output);
			}
			output.push(']');
		}
		JsonValue::Boolean(b) => output.push_str(if *b { "true" } else { "false" }),
		JsonValue::Int(v) => {
			let _ = write!(output, "{v}");
		}
		JsonValue::Null => output.push_str("null"),
		JsonValue::Number(v) => {
			let _ = write!(output, "{v}");
		}
		JsonValue::Object(object) => {
			output.push('{');
			for (index, (key, value)) in object.iter().enumerate() {
				if index > 0 {
					output.push(',');
				}
				write_quoted(key, output);
				output.push(':');
				write_value(value, output);
			}
			output.push('}');
		}
		JsonValue::String(text) => write_quoted(text, output),
		JsonValue::UInt(v) => {
			let _ = write!(output, "{v}");
		}
	}
}

fn write_quoted(text: &str, output: &mut String) {
	output.push('"');
	output.push_str(&escape_json_string(text));
	output.push('"');
}

/// Escapes quotes, backslashes and control characters for use inside a JSON string literal.
#[must_use]
pub fn escape_json_string(input: &str) -> String {
	let mut output = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'"' => output.push_str("\\\""),
			'\\' => output.push_str("\\\\"),
			'\n' => output.push_str("\\n"),
			'\r' => output.push_str("\\r"),
			'\t' => output.push_str("\\t"),
			'\u{08}' => output.push_str("\\b"),
			'\u{0c}' => output.push_str("\\f"),
			c if c.is_control() => {
				let _ = write!(output, "\\u{:04x}", c as u32);
			}
			c => output.push(c),
		}
	}
	output
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::json::JsonObject;
	use rstest::rstest;

	#[rstest]
	#[case(JsonValue::Null, "null")]
	#[case(JsonValue::Boolean(false), "false")]
	#[case(JsonValue::Number(1.0), "1")]
	#[case(JsonValue::Number(0.1), "0.1")]
	#[case(JsonValue::Number(-2.5), "-2.5")]
	#[case(JsonValue::Number(1e21), "1000000000000000000000")]
	#[case(JsonValue::Int(i64::MIN), "-9223372036854775808")]
	#[case(JsonValue::UInt(u64::MAX), "18446744073709551615")]
	#[case(JsonValue::from("a\"b"), r#""a\"b""#)]
	fn primitives(#[case] value: JsonValue, #[case] expected: &str) {
		assert_eq!(stringify(&value), expected);
	}

	#[test]
	fn nested() {
		let mut object = JsonObject::new();
		object.set("list", vec![JsonValue::from(1u64), JsonValue::Null]);
		object.set("empty", JsonObject::new());
		object.set("arr", JsonValue::Array(vec![]));
		assert_eq!(stringify(&object.into()), r#"{"list":[1,null],"empty":{},"arr":[]}"#);
	}

	#[rstest]
	#[case("plain", "plain")]
	#[case("tab\there", "tab\\there")]
	#[case("back\\slash", "back\\\\slash")]
	#[case("\u{08}\u{0c}\n\r", "\\b\\f\\n\\r")]
	#[case("\u{01}\u{1f}\u{7f}", "\\u0001\\u001f\\u007f")]
	#[case("Zürich", "Zürich")]
	fn escaping(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape_json_string(input), expected);
	}
}
