//! Shared building blocks of the geovec crates.
//!
//! - [`byte_iterator`]: a buffered byte iterator with the JSON token helpers the GeoJSON parser is built on
//! - [`io`]: little-endian value readers and writers used by the binary format
//! - [`json`]: JSON values for output, with compact stringification
//! - [`ErrorKind`] / [`VectorError`]: the error taxonomy shared by every fallible operation

pub mod byte_iterator;
mod error;
pub mod io;
pub mod json;

pub use error::*;
