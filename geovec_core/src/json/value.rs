use super::{JsonObject, stringify};

/// Any JSON value.
///
/// Integers keep their own variants so that 64-bit values are written without passing through `f64`.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
	Array(Vec<JsonValue>),
	Boolean(bool),
	Int(i64),
	Null,
	Number(f64),
	Object(JsonObject),
	String(String),
	UInt(u64),
}

impl JsonValue {
	#[must_use]
	pub fn type_as_str(&self) -> &'static str {
		use JsonValue::*;
		match self {
			Array(_) => "array",
			Boolean(_) => "boolean",
			Int(_) | Number(_) | UInt(_) => "number",
			Null => "null",
			Object(_) => "object",
			String(_) => "string",
		}
	}

	/// Serializes to compact JSON text.
	#[must_use]
	pub fn stringify(&self) -> String {
		stringify(self)
	}

	#[must_use]
	pub fn as_object(&self) -> Option<&JsonObject> {
		match self {
			JsonValue::Object(object) => Some(object),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_array(&self) -> Option<&[JsonValue]> {
		match self {
			JsonValue::Array(array) => Some(array),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			JsonValue::String(text) => Some(text),
			_ => None,
		}
	}

	/// Numeric value as `f64`, converting integers.
	#[must_use]
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			JsonValue::Int(v) => Some(*v as f64),
			JsonValue::Number(v) => Some(*v),
			JsonValue::UInt(v) => Some(*v as f64),
			_ => None,
		}
	}
}

impl From<&str> for JsonValue {
	fn from(value: &str) -> Self {
		JsonValue::String(value.to_string())
	}
}

impl From<String> for JsonValue {
	fn from(value: String) -> Self {
		JsonValue::String(value)
	}
}

impl From<bool> for JsonValue {
	fn from(value: bool) -> Self {
		JsonValue::Boolean(value)
	}
}

impl From<f64> for JsonValue {
	fn from(value: f64) -> Self {
		JsonValue::Number(value)
	}
}

impl From<i64> for JsonValue {
	fn from(value: i64) -> Self {
		JsonValue::Int(value)
	}
}

impl From<u64> for JsonValue {
	fn from(value: u64) -> Self {
		JsonValue::UInt(value)
	}
}

impl From<JsonObject> for JsonValue {
	fn from(value: JsonObject) -> Self {
		JsonValue::Object(value)
	}
}

impl<T: Into<JsonValue>> From<Vec<T>> for JsonValue {
	fn from(value: Vec<T>) -> Self {
		JsonValue::Array(value.into_iter().map(Into::into).collect())
	}
}
