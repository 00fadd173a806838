//! Error kinds reported by construction, parse, load and save operations.
//!
//! Every fallible function in the geovec crates returns an [`anyhow::Result`]. The root cause of such
//! an error, or its outermost tagged context, is a [`VectorError`]. Callers that need more than a
//! message recover the [`ErrorKind`] with [`error_kind`]:
//!
//! ```
//! use geovec_core::{ErrorKind, error_kind};
//!
//! let err = ErrorKind::CorruptData.error("bad magic");
//! assert_eq!(error_kind(&err), Some(ErrorKind::CorruptData));
//! ```

use std::fmt::{self, Display};

/// Distinguishable failure categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// Too few points or rings, or coordinate nesting that does not fit the geometry type.
	InvalidGeometry,
	/// JSON syntax error.
	MalformedJson,
	/// Unknown or missing GeoJSON `type`, or a missing `coordinates`/`geometry` member.
	UnsupportedGeometry,
	/// An attribute value the target format cannot represent.
	UnsupportedAttributeValue,
	/// Filesystem-level failure.
	Io,
	/// Inconsistent or truncated binary data.
	CorruptData,
}

impl ErrorKind {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			ErrorKind::InvalidGeometry => "invalid geometry",
			ErrorKind::MalformedJson => "malformed JSON",
			ErrorKind::UnsupportedGeometry => "unsupported geometry",
			ErrorKind::UnsupportedAttributeValue => "unsupported attribute value",
			ErrorKind::Io => "I/O error",
			ErrorKind::CorruptData => "corrupt data",
		}
	}

	/// Builds an [`anyhow::Error`] of this kind.
	#[must_use]
	pub fn error(self, message: impl Into<String>) -> anyhow::Error {
		anyhow::Error::new(VectorError::new(self, message))
	}
}

impl Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A message tagged with an [`ErrorKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VectorError {
	kind: ErrorKind,
	message: String,
}

impl VectorError {
	pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}

	#[must_use]
	pub fn kind(&self) -> ErrorKind {
		self.kind
	}

	#[must_use]
	pub fn message(&self) -> &str {
		&self.message
	}
}

impl Display for VectorError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)
	}
}

impl std::error::Error for VectorError {}

/// Returns the kind of the outermost [`VectorError`] found in `error`.
///
/// Plain string contexts added with [`anyhow::Context`] are looked through.
#[must_use]
pub fn error_kind(error: &anyhow::Error) -> Option<ErrorKind> {
	error.downcast_ref::<VectorError>().map(VectorError::kind)
}

/// Tagging helpers for results whose errors do not carry a kind yet.
pub trait KindContext<T> {
	/// Tags the error with `kind` unless it already carries one.
	fn or_kind(self, kind: ErrorKind) -> anyhow::Result<T>;

	/// Wraps the error in a [`VectorError`] of `kind`, overriding any inner kind.
	fn kind_context<F>(self, kind: ErrorKind, message: F) -> anyhow::Result<T>
	where
		F: FnOnce() -> String;
}

impl<T, E> KindContext<T> for Result<T, E>
where
	E: Into<anyhow::Error>,
{
	fn or_kind(self, kind: ErrorKind) -> anyhow::Result<T> {
		self.map_err(|e| {
			let e: anyhow::Error = e.into();
			if error_kind(&e).is_some() {
				e
			} else {
				e.context(VectorError::new(kind, kind.as_str()))
			}
		})
	}

	fn kind_context<F>(self, kind: ErrorKind, message: F) -> anyhow::Result<T>
	where
		F: FnOnce() -> String,
	{
		self.map_err(|e| e.into().context(VectorError::new(kind, message())))
	}
}

/// Returns early with an error of the given [`ErrorKind`] variant.
///
/// ```
/// use geovec_core::{bail_kind, error_kind, ErrorKind};
///
/// fn check(n: usize) -> anyhow::Result<()> {
///     if n < 2 {
///         bail_kind!(InvalidGeometry, "need at least 2 points, got {n}");
///     }
///     Ok(())
/// }
/// assert_eq!(error_kind(&check(1).unwrap_err()), Some(ErrorKind::InvalidGeometry));
/// ```
#[macro_export]
macro_rules! bail_kind {
	($kind:ident, $($arg:tt)+) => {
		return Err($crate::ErrorKind::$kind.error(format!($($arg)+)))
	};
}

/// Like [`bail_kind!`], but only if `$cond` is false.
#[macro_export]
macro_rules! ensure_kind {
	($cond:expr, $kind:ident, $($arg:tt)+) => {
		if !$cond {
			$crate::bail_kind!($kind, $($arg)+);
		}
	};
}
