//! Byte-level iteration over text input and the JSON token helpers built on top of it.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::*;
