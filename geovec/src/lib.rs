//! # geovec
//!
//! Vector geometry collections that can be built in code, parsed from GeoJSON and stored in a
//! compact binary format.
//!
//! ## Supported files
//! - `*.geojson`, `*.json`: GeoJSON documents
//! - `*.ndjson`, `*.geojsonl`: newline-delimited GeoJSON, one object per line
//! - `*.gvec`: the binary format of [`geometry::binary`]
//!
//! ## Usage Example
//!
//! ```rust
//! use geovec::{geometry::*, read_collection, write_collection};
//!
//! let mut collection = VectorCollection::new();
//! collection.add_linear([[13.3, 52.5], [13.4, 52.5]]).unwrap();
//!
//! let path = std::env::temp_dir().join("geovec-doc.gvec");
//! write_collection(&collection, &path, &GeoJsonWriteConfig::default()).unwrap();
//! assert_eq!(read_collection(&path).unwrap(), collection);
//! ```

mod format;

pub use format::*;
pub use geovec_core as core;
pub use geovec_geometry as geometry;
