//! JSON values for output.
//!
//! Input JSON is never materialized as a tree: the GeoJSON parser streams it through
//! [`crate::byte_iterator`]. Output goes through [`JsonValue`], whose objects keep insertion order so
//! writers control member order.

mod object;
mod stringify;
mod value;

pub use object::JsonObject;
pub use stringify::*;
pub use value::JsonValue;
