mod coordinates;
mod line_string;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use line_string::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
