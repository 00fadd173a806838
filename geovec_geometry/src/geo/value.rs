use super::AttributeMap;
use anyhow::Result;
use geovec_core::{bail_kind, json::JsonValue};
use std::fmt::{self, Debug, Display};

/// Maximum nesting of lists and maps inside an attribute value accepted by the codecs.
pub const MAX_ATTRIBUTE_DEPTH: usize = 64;

/// A single attribute value.
///
/// JSON integers without fraction or exponent become [`AttributeValue::UInt`] when non-negative and
/// [`AttributeValue::Int`] when negative. Every other number is a [`AttributeValue::Double`].
#[derive(Clone, PartialEq)]
pub enum AttributeValue {
	Bool(bool),
	Double(f64),
	Int(i64),
	List(Vec<AttributeValue>),
	Map(AttributeMap),
	Null,
	String(String),
	UInt(u64),
}

impl AttributeValue {
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			AttributeValue::Bool(_) => "bool",
			AttributeValue::Double(_) => "double",
			AttributeValue::Int(_) => "int",
			AttributeValue::List(_) => "list",
			AttributeValue::Map(_) => "map",
			AttributeValue::Null => "null",
			AttributeValue::String(_) => "string",
			AttributeValue::UInt(_) => "uint",
		}
	}

	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			AttributeValue::String(v) => Some(v),
			_ => None,
		}
	}

	/// Numeric value as `f64`.
	#[must_use]
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			AttributeValue::Double(v) => Some(*v),
			AttributeValue::Int(v) => Some(*v as f64),
			AttributeValue::UInt(v) => Some(*v as f64),
			_ => None,
		}
	}

	/// Text form of strings and numbers, as used for feature keys.
	#[must_use]
	pub fn to_key(&self) -> Option<String> {
		match self {
			AttributeValue::String(v) => Some(v.clone()),
			AttributeValue::Double(v) => Some(v.to_string()),
			AttributeValue::Int(v) => Some(v.to_string()),
			AttributeValue::UInt(v) => Some(v.to_string()),
			_ => None,
		}
	}

	/// Converts to JSON, failing with `UnsupportedAttributeValue` for NaN or infinite doubles.
	pub fn to_json(&self) -> Result<JsonValue> {
		Ok(match self {
			AttributeValue::Bool(v) => JsonValue::Boolean(*v),
			AttributeValue::Double(v) => {
				if !v.is_finite() {
					bail_kind!(UnsupportedAttributeValue, "{v} cannot be represented in JSON");
				}
				JsonValue::Number(*v)
			}
			AttributeValue::Int(v) => JsonValue::Int(*v),
			AttributeValue::List(list) => {
				JsonValue::Array(list.iter().map(AttributeValue::to_json).collect::<Result<Vec<_>>>()?)
			}
			AttributeValue::Map(map) => JsonValue::Object(map.to_json()?),
			AttributeValue::Null => JsonValue::Null,
			AttributeValue::String(v) => JsonValue::String(v.clone()),
			AttributeValue::UInt(v) => JsonValue::UInt(*v),
		})
	}

	/// Nesting depth: 0 for scalars, 1 for a flat list or map.
	#[must_use]
	pub fn depth(&self) -> usize {
		match self {
			AttributeValue::List(list) => 1 + list.iter().map(AttributeValue::depth).max().unwrap_or(0),
			AttributeValue::Map(map) => 1 + map.values().map(AttributeValue::depth).max().unwrap_or(0),
			_ => 0,
		}
	}
}

impl Debug for AttributeValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::List(v) => f.debug_list().entries(v).finish(),
			Self::Map(v) => v.fmt(f),
			Self::Null => f.write_str("Null"),
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
			Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
		}
	}
}

impl Display for AttributeValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AttributeValue::Bool(v) => write!(f, "{v}"),
			AttributeValue::Double(v) => write!(f, "{v}"),
			AttributeValue::Int(v) => write!(f, "{v}"),
			AttributeValue::String(v) => f.write_str(v),
			AttributeValue::UInt(v) => write!(f, "{v}"),
			AttributeValue::Null => f.write_str("null"),
			AttributeValue::List(_) | AttributeValue::Map(_) => match self.to_json() {
				Ok(json) => f.write_str(&json.stringify()),
				Err(_) => write!(f, "{self:?}"),
			},
		}
	}
}

impl From<&str> for AttributeValue {
	fn from(value: &str) -> Self {
		AttributeValue::String(value.to_string())
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> Self {
		AttributeValue::String(value)
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> Self {
		AttributeValue::Bool(value)
	}
}

impl From<f64> for AttributeValue {
	fn from(value: f64) -> Self {
		AttributeValue::Double(value)
	}
}

impl From<f32> for AttributeValue {
	fn from(value: f32) -> Self {
		AttributeValue::Double(f64::from(value))
	}
}

impl From<i64> for AttributeValue {
	fn from(value: i64) -> Self {
		AttributeValue::Int(value)
	}
}

impl From<i32> for AttributeValue {
	/// Non-negative values become `UInt`, matching how JSON integers are parsed.
	fn from(value: i32) -> Self {
		match u64::try_from(value) {
			Ok(v) => AttributeValue::UInt(v),
			Err(_) => AttributeValue::Int(i64::from(value)),
		}
	}
}

impl From<u64> for AttributeValue {
	fn from(value: u64) -> Self {
		AttributeValue::UInt(value)
	}
}

impl From<u32> for AttributeValue {
	fn from(value: u32) -> Self {
		AttributeValue::UInt(u64::from(value))
	}
}

impl From<AttributeMap> for AttributeValue {
	fn from(value: AttributeMap) -> Self {
		AttributeValue::Map(value)
	}
}

impl<T: Into<AttributeValue>> From<Vec<T>> for AttributeValue {
	fn from(value: Vec<T>) -> Self {
		AttributeValue::List(value.into_iter().map(Into::into).collect())
	}
}
