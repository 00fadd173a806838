//! Little-endian value readers and writers for the binary vector format.
//!
//! [`ValueReader`] and [`ValueWriter`] carry the encoding logic (fixed-width integers, floats,
//! LEB128 varints, zigzag varints, length-prefixed strings) as default methods. The concrete types
//! only hand out the underlying cursor.

mod value_reader;
mod value_reader_slice;
mod value_writer;
mod value_writer_vec;

pub use value_reader::*;
pub use value_reader_slice::*;
pub use value_writer::*;
pub use value_writer_vec::*;
