mod attributes;
mod collection;
mod geometry;
mod shape;
mod types;
mod value;

pub use attributes::*;
pub use collection::*;
pub use geometry::*;
pub use shape::*;
pub use types::*;
pub use value::*;
