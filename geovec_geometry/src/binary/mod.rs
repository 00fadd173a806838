//! The `GVEC` binary format.
//!
//! All values are little endian:
//!
//! ```text
//! magic       4 bytes  "GVEC"
//! version     u8       1
//! shape_count u32
//! per shape:
//!   tag         u8     1 = Point, 2 = LineString, 3 = Polygon
//!   ring_count  u32    1 for points and line strings
//!   per ring:
//!     point_count u32
//!     points      point_count × (f64 x, f64 y)
//!   attr_len    u32
//!   attr_block  attr_len bytes
//! ```
//!
//! Geometry is stored bit-exact. Saving encodes the whole collection in memory before the file is
//! created, loading reads the whole file before decoding, so neither leaves partial results behind.

mod attributes;
mod file;
mod format;

pub use file::*;
pub use format::*;
