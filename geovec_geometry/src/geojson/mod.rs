//! GeoJSON import and export.
//!
//! Parsing streams the input through a [`ByteIterator`](geovec_core::byte_iterator::ByteIterator)
//! and builds [`VectorCollection`](crate::VectorCollection)s directly. Writing produces a
//! `FeatureCollection` with one `Feature` per shape.

mod config;
mod parse;
mod read;
mod write;

pub use config::*;
pub use parse::*;
pub use read::*;
pub use write::*;
