//! Vector geometry collections with GeoJSON and binary persistence.
//!
//! A [`VectorCollection`] is an ordered list of [`Shape`]s. Each shape is a point, a line string or
//! a polygon with holes, and owns its own [`AttributeMap`].
//!
//! ```
//! use geovec_geometry::{GeoJsonWriteConfig, VectorCollection, decode_binary, encode_binary, to_geojson};
//!
//! let mut collection = VectorCollection::new();
//! collection.add_point([13.4, 52.5]);
//! collection.add_areal([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]).unwrap();
//! collection.attributes_mut().unwrap().insert("name", "Berlin");
//!
//! let text = to_geojson(&collection, &GeoJsonWriteConfig::default()).unwrap();
//! assert!(text.starts_with(r#"{"type":"FeatureCollection""#));
//!
//! let restored = decode_binary(&encode_binary(&collection).unwrap()).unwrap();
//! assert_eq!(restored, collection);
//! ```

pub mod binary;
mod geo;
pub mod geojson;

pub use binary::*;
pub use geo::*;
pub use geojson::*;
