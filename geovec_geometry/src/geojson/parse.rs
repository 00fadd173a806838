use super::ParseConfig;
use crate::{
	AttributeMap, AttributeValue, Coordinates, Geometry, LineStringGeometry, MAX_ATTRIBUTE_DEPTH, PointGeometry,
	PolygonGeometry, RingGeometry, Shape, VectorCollection,
};
use anyhow::{Context, Result};
use geovec_core::{
	ErrorKind, bail_kind,
	byte_iterator::{
		ByteIterator, parse_array_entries, parse_number_as, parse_number_as_string, parse_object_entries,
		parse_quoted_json_string, parse_tag, skip_json_value,
	},
	ensure_kind,
};
use std::collections::BTreeMap;

/// Nesting limit for GeoJSON objects (features inside collections, geometry collections).
const MAX_OBJECT_DEPTH: usize = 32;

/// Parses a GeoJSON document into one collection.
///
/// Every kind of GeoJSON object is accepted. Features contribute their geometry's shapes with the
/// feature's `properties` attached to each, feature collections are flattened in order.
pub fn parse_geojson(text: &str) -> Result<VectorCollection> {
	parse_geojson_with(text, &ParseConfig::default())
}

pub fn parse_geojson_with(text: &str, config: &ParseConfig) -> Result<VectorCollection> {
	parse_geojson_iter(&mut ByteIterator::from_text(text, config.debug))
}

/// Parses a GeoJSON document from an iterator, requiring that nothing but whitespace follows it.
pub fn parse_geojson_iter(iter: &mut ByteIterator) -> Result<VectorCollection> {
	let object = parse_document(iter)?;
	let mut shapes = Vec::new();
	object.into_shapes(&mut shapes)?;
	log::debug!("parsed {} shapes from GeoJSON", shapes.len());
	Ok(VectorCollection::from_shapes(shapes))
}

/// Parses a GeoJSON document into one collection per feature.
///
/// Keys are the feature's `id`, else `properties.id`, else the feature index. A single feature
/// gives one entry, a bare geometry gives the entry `"0"`. One invalid feature fails the whole
/// assembly.
///
/// Features are not guaranteed one entry each: features with equal keys are merged into one
/// collection, their shapes appended in document order.
pub fn parse_geojson_assembly(text: &str) -> Result<BTreeMap<String, VectorCollection>> {
	parse_geojson_assembly_with(text, &ParseConfig::default())
}

pub fn parse_geojson_assembly_with(text: &str, config: &ParseConfig) -> Result<BTreeMap<String, VectorCollection>> {
	parse_geojson_assembly_iter(&mut ByteIterator::from_text(text, config.debug))
}

pub fn parse_geojson_assembly_iter(iter: &mut ByteIterator) -> Result<BTreeMap<String, VectorCollection>> {
	let object = parse_document(iter)?;
	let mut assembly: BTreeMap<String, VectorCollection> = BTreeMap::new();

	let object_type = object.object_type.clone();
	match object_type.as_deref() {
		Some("FeatureCollection") => {
			for (index, feature) in object.into_features()?.into_iter().enumerate() {
				let key = feature.assembly_key(index);
				let mut shapes = Vec::new();
				feature
					.into_feature_shapes(&mut shapes)
					.with_context(|| format!("while parsing feature {index}"))?;
				log::trace!("feature {index} has key '{key}' and {} shapes", shapes.len());
				assembly.entry(key).or_default().extend(shapes);
			}
		}
		Some("Feature") => {
			let key = object.assembly_key(0);
			let mut shapes = Vec::new();
			object.into_feature_shapes(&mut shapes)?;
			assembly.insert(key, VectorCollection::from_shapes(shapes));
		}
		_ => {
			let mut shapes = Vec::new();
			object.into_shapes(&mut shapes)?;
			assembly.insert(String::from("0"), VectorCollection::from_shapes(shapes));
		}
	}

	log::debug!("parsed GeoJSON assembly with {} entries", assembly.len());
	Ok(assembly)
}

fn parse_document(iter: &mut ByteIterator) -> Result<GeoJsonObject> {
	let object = parse_object(iter, 0)?;
	iter.expect_end()?;
	Ok(object)
}

/// The members of a GeoJSON object that matter for any of its possible types.
///
/// Members can come in any order, so everything is collected before `type` is looked at.
#[derive(Default)]
struct GeoJsonObject {
	object_type: Option<String>,
	id: Option<AttributeValue>,
	coordinates: Option<TemporaryCoordinates>,
	geometry: Option<Option<Box<GeoJsonObject>>>,
	geometries: Option<Vec<GeoJsonObject>>,
	features: Option<Vec<GeoJsonObject>>,
	properties: Option<AttributeMap>,
}

fn parse_object(iter: &mut ByteIterator, depth: usize) -> Result<GeoJsonObject> {
	iter.skip_whitespace();
	if iter.peek() != Some(b'{') {
		skip_json_value(iter)?;
		bail_kind!(UnsupportedGeometry, "expected a GeoJSON object");
	}
	ensure_kind!(depth < MAX_OBJECT_DEPTH, UnsupportedGeometry, "GeoJSON objects are nested too deep");

	let mut object = GeoJsonObject::default();
	parse_object_entries(iter, |key, iter| {
		match key.as_str() {
			"type" => object.object_type = Some(parse_type(iter)?),
			"id" => object.id = Some(parse_attribute_value(iter, 0)?),
			"coordinates" => object.coordinates = Some(parse_coordinates(iter, 0)?),
			"geometry" => {
				object.geometry = Some(if iter.peek() == Some(b'n') {
					parse_tag(iter, "null")?;
					None
				} else {
					Some(Box::new(parse_object(iter, depth + 1)?))
				});
			}
			"geometries" => object.geometries = Some(parse_object_list(iter, depth, "geometries")?),
			"features" => object.features = Some(parse_object_list(iter, depth, "features")?),
			"properties" => object.properties = Some(parse_properties(iter)?),
			_ => skip_json_value(iter)?,
		}
		Ok(())
	})?;
	Ok(object)
}

fn parse_type(iter: &mut ByteIterator) -> Result<String> {
	if iter.peek() != Some(b'"') {
		skip_json_value(iter)?;
		bail_kind!(UnsupportedGeometry, "'type' must be a string");
	}
	parse_quoted_json_string(iter)
}

fn parse_object_list(iter: &mut ByteIterator, depth: usize, name: &str) -> Result<Vec<GeoJsonObject>> {
	if iter.peek() != Some(b'[') {
		skip_json_value(iter)?;
		bail_kind!(UnsupportedGeometry, "'{name}' must be an array");
	}
	parse_array_entries(iter, |iter| parse_object(iter, depth + 1))
}

fn parse_properties(iter: &mut ByteIterator) -> Result<AttributeMap> {
	match iter.peek() {
		Some(b'n') => {
			parse_tag(iter, "null")?;
			Ok(AttributeMap::new())
		}
		Some(b'{') => parse_attribute_map(iter, 0),
		_ => {
			skip_json_value(iter)?;
			bail_kind!(UnsupportedAttributeValue, "'properties' must be an object or null");
		}
	}
}

fn parse_attribute_map(iter: &mut ByteIterator, depth: usize) -> Result<AttributeMap> {
	let mut map = AttributeMap::new();
	parse_object_entries(iter, |key, iter| {
		let value = parse_attribute_value(iter, depth)?;
		map.insert(key, value);
		Ok(())
	})?;
	Ok(map)
}

/// `depth` counts the lists and maps enclosing the value.
fn parse_attribute_value(iter: &mut ByteIterator, depth: usize) -> Result<AttributeValue> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' | b'{' if depth >= MAX_ATTRIBUTE_DEPTH => {
			bail_kind!(
				UnsupportedAttributeValue,
				"attribute values are nested deeper than {MAX_ATTRIBUTE_DEPTH} levels"
			)
		}
		b'[' => parse_array_entries(iter, |iter| parse_attribute_value(iter, depth + 1)).map(AttributeValue::List),
		b'{' => parse_attribute_map(iter, depth + 1).map(AttributeValue::Map),
		b'"' => parse_quoted_json_string(iter).map(AttributeValue::String),
		b't' => parse_tag(iter, "true").map(|()| AttributeValue::Bool(true)),
		b'f' => parse_tag(iter, "false").map(|()| AttributeValue::Bool(false)),
		b'n' => parse_tag(iter, "null").map(|()| AttributeValue::Null),
		b'-' | b'0'..=b'9' => parse_attribute_number(iter),
		c => Err(iter.format_error(&format!("unexpected character '{}' while parsing a value", c as char))),
	}
}

fn parse_attribute_number(iter: &mut ByteIterator) -> Result<AttributeValue> {
	let number = parse_number_as_string(iter)?;
	let parse_double = |number: &str| {
		number
			.parse::<f64>()
			.map(AttributeValue::Double)
			.map_err(|_| iter.format_error("invalid number"))
	};

	if number.contains(['.', 'e', 'E']) {
		parse_double(&number)
	} else if number.starts_with('-') {
		match number.parse::<i64>() {
			Ok(v) => Ok(u64::try_from(v).map_or(AttributeValue::Int(v), AttributeValue::UInt)),
			Err(_) => parse_double(&number),
		}
	} else {
		match number.parse::<u64>() {
			Ok(v) => Ok(AttributeValue::UInt(v)),
			Err(_) => parse_double(&number),
		}
	}
}

/// Coordinates as read, before the object's `type` says what they must be.
enum TemporaryCoordinates {
	Value(f64),
	Position(Coordinates),
	List(Vec<TemporaryCoordinates>),
}

/// Arrays at this depth or deeper cannot be part of any geometry.
const MAX_COORDINATE_DEPTH: usize = 4;

fn parse_coordinates(iter: &mut ByteIterator, depth: usize) -> Result<TemporaryCoordinates> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' => {
			ensure_kind!(
				depth < MAX_COORDINATE_DEPTH,
				InvalidGeometry,
				"coordinates are nested too deep"
			);
			let items = parse_array_entries(iter, |iter| parse_coordinates(iter, depth + 1))?;
			TemporaryCoordinates::from_items(items)
		}
		b'-' | b'0'..=b'9' => {
			let value = parse_number_as::<f64>(iter)?;
			ensure_kind!(value.is_finite(), InvalidGeometry, "coordinate {value} is out of range");
			Ok(TemporaryCoordinates::Value(value))
		}
		c => Err(iter.format_error(&format!(
			"expected an array or number while parsing coordinates, but got '{}'",
			c as char
		))),
	}
}

impl TemporaryCoordinates {
	fn from_items(items: Vec<TemporaryCoordinates>) -> Result<Self> {
		use TemporaryCoordinates::*;

		let values = items.iter().filter(|item| matches!(item, Value(_))).count();
		if values == 0 {
			return Ok(List(items));
		}
		ensure_kind!(
			values == items.len(),
			InvalidGeometry,
			"numbers and arrays are mixed in coordinates"
		);
		match items.as_slice() {
			[Value(x), Value(y)] | [Value(x), Value(y), Value(_)] => Ok(Position(Coordinates::new(*x, *y))),
			_ => bail_kind!(InvalidGeometry, "a position needs 2 or 3 numbers, got {}", items.len()),
		}
	}

	fn describe(&self) -> &'static str {
		match self {
			TemporaryCoordinates::Value(_) => "a number",
			TemporaryCoordinates::Position(_) => "a position",
			TemporaryCoordinates::List(_) => "an array",
		}
	}

	fn into_position(self) -> Result<Coordinates> {
		match self {
			TemporaryCoordinates::Position(c) => Ok(c),
			other => bail_kind!(InvalidGeometry, "expected a position, found {}", other.describe()),
		}
	}

	fn into_list(self) -> Result<Vec<TemporaryCoordinates>> {
		match self {
			TemporaryCoordinates::List(items) => Ok(items),
			other => bail_kind!(InvalidGeometry, "expected an array, found {}", other.describe()),
		}
	}

	fn into_positions(self) -> Result<Vec<Coordinates>> {
		self.into_list()?.into_iter().map(Self::into_position).collect()
	}

	fn into_rings(self) -> Result<Vec<Vec<Coordinates>>> {
		self.into_list()?.into_iter().map(Self::into_positions).collect()
	}

	fn into_polygons(self) -> Result<Vec<Vec<Vec<Coordinates>>>> {
		self.into_list()?.into_iter().map(Self::into_rings).collect()
	}
}

fn polygon_from_rings(rings: Vec<Vec<Coordinates>>) -> Result<Geometry> {
	let rings = rings
		.into_iter()
		.enumerate()
		.map(|(index, ring)| RingGeometry::new(ring).with_context(|| format!("ring {index}")))
		.collect::<Result<Vec<_>>>()?;
	Ok(Geometry::Polygon(PolygonGeometry::from_rings(rings)?))
}

impl GeoJsonObject {
	fn type_name(&self) -> Result<&str> {
		self
			.object_type
			.as_deref()
			.ok_or_else(|| ErrorKind::UnsupportedGeometry.error("GeoJSON object is missing 'type'"))
	}

	fn take_coordinates(&mut self) -> Result<TemporaryCoordinates> {
		let type_name = self.type_name()?.to_string();
		self
			.coordinates
			.take()
			.ok_or_else(|| ErrorKind::UnsupportedGeometry.error(format!("{type_name} is missing 'coordinates'")))
	}

	fn into_features(self) -> Result<Vec<GeoJsonObject>> {
		self
			.features
			.ok_or_else(|| ErrorKind::UnsupportedGeometry.error("FeatureCollection is missing 'features'"))
	}

	fn assembly_key(&self, index: usize) -> String {
		self
			.id
			.as_ref()
			.and_then(AttributeValue::to_key)
			.or_else(|| {
				self
					.properties
					.as_ref()
					.and_then(|p| p.get("id"))
					.and_then(AttributeValue::to_key)
			})
			.unwrap_or_else(|| index.to_string())
	}

	/// Appends the shapes of any GeoJSON object.
	fn into_shapes(self, shapes: &mut Vec<Shape>) -> Result<()> {
		let type_name = self.type_name()?.to_string();
		match type_name.as_str() {
			"Feature" => self.into_feature_shapes(shapes),
			"FeatureCollection" => {
				for (index, feature) in self.into_features()?.into_iter().enumerate() {
					feature
						.into_feature_shapes(shapes)
						.with_context(|| format!("while parsing feature {index}"))?;
				}
				Ok(())
			}
			_ => self.into_geometry_shapes(&AttributeMap::new(), shapes),
		}
	}

	fn into_feature_shapes(mut self, shapes: &mut Vec<Shape>) -> Result<()> {
		let type_name = self.type_name()?;
		ensure_kind!(
			type_name == "Feature",
			UnsupportedGeometry,
			"expected a Feature, found '{type_name}'"
		);
		let properties = self.properties.take().unwrap_or_default();
		match self.geometry.take() {
			None => bail_kind!(UnsupportedGeometry, "Feature is missing 'geometry'"),
			Some(None) => Ok(()),
			Some(Some(geometry)) => geometry.into_geometry_shapes(&properties, shapes),
		}
	}

	fn into_geometry_shapes(mut self, attributes: &AttributeMap, shapes: &mut Vec<Shape>) -> Result<()> {
		let mut push = |geometry: Geometry| {
			log::trace!("parsed {geometry:?}");
			shapes.push(Shape::with_attributes(geometry, attributes.clone()));
		};

		let type_name = self.type_name()?.to_string();
		match type_name.as_str() {
			"Point" => push(Geometry::Point(PointGeometry(self.take_coordinates()?.into_position()?))),
			"LineString" => push(Geometry::LineString(LineStringGeometry::new(
				self.take_coordinates()?.into_positions()?,
			)?)),
			"Polygon" => push(polygon_from_rings(self.take_coordinates()?.into_rings()?)?),
			"MultiPoint" => {
				for position in self.take_coordinates()?.into_positions()? {
					push(Geometry::Point(PointGeometry(position)));
				}
			}
			"MultiLineString" => {
				for (index, line) in self.take_coordinates()?.into_rings()?.into_iter().enumerate() {
					push(Geometry::LineString(
						LineStringGeometry::new(line).with_context(|| format!("line string {index}"))?,
					));
				}
			}
			"MultiPolygon" => {
				for (index, polygon) in self.take_coordinates()?.into_polygons()?.into_iter().enumerate() {
					push(polygon_from_rings(polygon).with_context(|| format!("polygon {index}"))?);
				}
			}
			"GeometryCollection" => {
				let geometries = self.geometries.take().ok_or_else(|| {
					ErrorKind::UnsupportedGeometry.error("GeometryCollection is missing 'geometries'")
				})?;
				for (index, geometry) in geometries.into_iter().enumerate() {
					geometry
						.into_geometry_shapes(attributes, shapes)
						.with_context(|| format!("while parsing geometry {index}"))?;
				}
			}
			"Feature" | "FeatureCollection" => {
				bail_kind!(UnsupportedGeometry, "a {type_name} cannot be used as a geometry")
			}
			other => bail_kind!(UnsupportedGeometry, "unknown geometry type '{other}'"),
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::GeometryTrait;
	use geovec_core::error_kind;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	const TWO_FEATURES: &str = r#"{
		"type": "FeatureCollection",
		"features": [
			{"type": "Feature", "geometry": {"type": "Point", "coordinates": [1, 2]}, "properties": {"name": "A"}},
			{"type": "Feature", "geometry": {"type": "Point", "coordinates": [3, 4]}, "properties": {"name": "B"}}
		]
	}"#;

	fn kind_of(text: &str) -> Option<ErrorKind> {
		error_kind(&parse_geojson(text).unwrap_err())
	}

	fn single_geometry(text: &str) -> Geometry {
		let collection = parse_geojson(text).unwrap();
		assert_eq!(collection.len(), 1);
		collection.shapes()[0].geometry().clone()
	}

	#[test]
	fn flattens_feature_collection() {
		let collection = parse_geojson(TWO_FEATURES).unwrap();
		assert_eq!(collection.len(), 2);
		assert_eq!(collection.attributes(), &AttributeMap::from(vec![("name", "A")]));
		assert_eq!(collection.shapes()[1].attributes(), &AttributeMap::from(vec![("name", "B")]));
		assert_eq!(collection.shapes()[1].geometry(), &Geometry::new_point([3.0, 4.0]));
	}

	#[test]
	fn assembly_of_two_features() {
		let assembly = parse_geojson_assembly(TWO_FEATURES).unwrap();
		let keys: Vec<&str> = assembly.keys().map(String::as_str).collect();
		assert_eq!(keys, vec!["0", "1"]);
		assert_eq!(assembly["0"].attributes(), &AttributeMap::from(vec![("name", "A")]));
		assert_eq!(assembly["1"].attributes(), &AttributeMap::from(vec![("name", "B")]));
		assert_eq!(assembly["1"].len(), 1);
	}

	#[test]
	fn assembly_keys() {
		let text = r#"{"type":"FeatureCollection","features":[
			{"type":"Feature","id":"berlin","geometry":{"type":"Point","coordinates":[13.4,52.5]},"properties":{"id":"ignored"}},
			{"type":"Feature","geometry":{"type":"Point","coordinates":[2.35,48.86]},"properties":{"id":7}},
			{"type":"Feature","id":12,"geometry":null,"properties":null},
			{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{"id":true}},
			{"type":"Feature","id":"berlin","geometry":{"type":"Point","coordinates":[13.3,52.4]},"properties":{}}
		]}"#;
		let assembly = parse_geojson_assembly(text).unwrap();
		let keys: Vec<&str> = assembly.keys().map(String::as_str).collect();
		assert_eq!(keys, vec!["12", "3", "7", "berlin"]);
		assert_eq!(assembly["berlin"].len(), 2);
		assert_eq!(assembly["berlin"].shapes()[1].geometry(), &Geometry::new_point([13.3, 52.4]));
		assert_eq!(assembly["berlin"].attributes().get("id"), Some(&AttributeValue::from("ignored")));
		assert!(assembly["12"].is_empty());
	}

	#[test]
	fn assembly_of_single_feature_and_geometry() {
		let assembly =
			parse_geojson_assembly(r#"{"type":"Feature","id":"x","geometry":{"type":"Point","coordinates":[0,0]}}"#)
				.unwrap();
		assert_eq!(assembly.len(), 1);
		assert_eq!(assembly["x"].len(), 1);

		let assembly = parse_geojson_assembly(r#"{"type":"LineString","coordinates":[[0,0],[1,1]]}"#).unwrap();
		assert_eq!(assembly.len(), 1);
		assert_eq!(assembly["0"].shapes()[0].geometry().type_name(), "LineString");
	}

	#[test]
	fn assembly_is_all_or_nothing() {
		let text = r#"{"type":"FeatureCollection","features":[
			{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{}},
			{"type":"Feature","geometry":{"type":"LineString","coordinates":[[0,0]]},"properties":{}}
		]}"#;
		let err = parse_geojson_assembly(text).unwrap_err();
		assert_eq!(error_kind(&err), Some(ErrorKind::InvalidGeometry));
		assert!(format!("{err:#}").starts_with("while parsing feature 1: "));
	}

	#[test]
	fn polygon_with_single_closed_ring() {
		let geometry = single_geometry(r#"{"type":"Polygon","coordinates":[[[0,0],[0,1],[1,1],[1,0],[0,0]]]}"#);
		let Geometry::Polygon(polygon) = geometry else {
			panic!("expected a polygon");
		};
		assert_eq!(polygon.rings().len(), 1);
		assert_eq!(polygon.outer().len(), 5);
		assert!(polygon.verify().is_ok());
	}

	#[test]
	fn polygon_rings_are_closed_and_holes_kept() {
		let geometry = single_geometry(
			r#"{"type":"Polygon","coordinates":[[[0,0],[4,0],[4,4],[0,4]],[[1,1],[1,2],[2,2],[1,1]]]}"#,
		);
		let Geometry::Polygon(polygon) = geometry else {
			panic!("expected a polygon");
		};
		assert_eq!(polygon.outer().len(), 5);
		assert_eq!(polygon.holes().len(), 1);
		assert_eq!(polygon.holes()[0].len(), 4);
	}

	#[test]
	fn members_in_any_order_and_third_dimension() {
		let geometry = single_geometry(r#"{"coordinates":[1.5,-2,100],"bbox":[0,0,1,1],"type":"Point"}"#);
		assert_eq!(geometry, Geometry::new_point([1.5, -2.0]));
	}

	#[test]
	fn multi_geometries_become_several_shapes() {
		let text = r#"{"type":"Feature","properties":{"kind":"multi"},"geometry":{"type":"GeometryCollection","geometries":[
			{"type":"MultiPoint","coordinates":[[0,0],[1,1]]},
			{"type":"MultiLineString","coordinates":[[[0,0],[1,1]],[[2,2],[3,3],[4,4]]]},
			{"type":"MultiPolygon","coordinates":[[[[0,0],[1,0],[1,1]]],[[[5,5],[6,5],[6,6],[5,5]]]]}
		]}}"#;
		let collection = parse_geojson(text).unwrap();
		let types: Vec<&str> = collection.shapes().iter().map(|s| s.geometry().type_name()).collect();
		assert_eq!(
			types,
			vec!["Point", "Point", "LineString", "LineString", "Polygon", "Polygon"]
		);
		assert!(
			collection
				.shapes()
				.iter()
				.all(|s| s.attributes().get("kind") == Some(&AttributeValue::from("multi")))
		);
	}

	#[test]
	fn null_geometry_and_null_properties() {
		let collection = parse_geojson(r#"{"type":"Feature","geometry":null,"properties":null}"#).unwrap();
		assert!(collection.is_empty());

		let collection =
			parse_geojson(r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":null}"#)
				.unwrap();
		assert!(collection.attributes().is_empty());
	}

	#[test]
	fn empty_multi_geometries() {
		assert!(parse_geojson(r#"{"type":"MultiPoint","coordinates":[]}"#).unwrap().is_empty());
		assert!(parse_geojson(r#"{"type":"FeatureCollection","features":[]}"#).unwrap().is_empty());
		assert!(parse_geojson(r#"{"type":"GeometryCollection","geometries":[]}"#).unwrap().is_empty());
	}

	#[test]
	fn attribute_values() {
		let text = r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{
			"s":"téxt","u":42,"i":-7,"z":-0,"d":1.5,"e":1e3,"big":18446744073709551616,
			"b":false,"n":null,"l":[1,"a",[true]],"m":{"k":{"x":0.25}}
		}}"#;
		let collection = parse_geojson(text).unwrap();
		let attributes = collection.attributes();
		assert_eq!(attributes.get("s"), Some(&AttributeValue::from("téxt")));
		assert_eq!(attributes.get("u"), Some(&AttributeValue::UInt(42)));
		assert_eq!(attributes.get("i"), Some(&AttributeValue::Int(-7)));
		assert_eq!(attributes.get("z"), Some(&AttributeValue::UInt(0)));
		assert_eq!(attributes.get("d"), Some(&AttributeValue::Double(1.5)));
		assert_eq!(attributes.get("e"), Some(&AttributeValue::Double(1000.0)));
		assert_eq!(attributes.get("big"), Some(&AttributeValue::Double(18_446_744_073_709_551_616.0)));
		assert_eq!(attributes.get("b"), Some(&AttributeValue::Bool(false)));
		assert_eq!(attributes.get("n"), Some(&AttributeValue::Null));
		assert_eq!(
			attributes.get("l"),
			Some(&AttributeValue::from(vec![
				AttributeValue::UInt(1),
				AttributeValue::from("a"),
				AttributeValue::from(vec![true]),
			]))
		);
		let inner = AttributeMap::from(vec![("x", AttributeValue::Double(0.25))]);
		assert_eq!(
			attributes.get("m"),
			Some(&AttributeValue::from(AttributeMap::from(vec![(
				"k",
				AttributeValue::from(inner)
			)])))
		);
	}

	#[test]
	fn deeply_nested_attributes_are_rejected() {
		let nested = |levels: usize| {
			format!(
				r#"{{"type":"Feature","geometry":null,"properties":{{"deep":{}1{}}}}}"#,
				"[".repeat(levels),
				"]".repeat(levels)
			)
		};
		assert!(parse_geojson(&nested(MAX_ATTRIBUTE_DEPTH)).is_ok());
		assert_eq!(kind_of(&nested(MAX_ATTRIBUTE_DEPTH + 1)), Some(ErrorKind::UnsupportedAttributeValue));
	}

	#[rstest]
	#[case(r#"{"type":"Point","coordinates":[0,0]"#)]
	#[case(r#"{"type":"Point","coordinates":[0,0]} x"#)]
	#[case(r#"{"type":"Point","coordinates":[0,0],}"#)]
	#[case(r#"{"type":"Point","coordinates":["0",0]}"#)]
	#[case(r#"{"type":"Point","coordinates":"x"}"#)]
	#[case(r#"{"type":"Feature","geometry":null,"properties":{"a":"\q"}}"#)]
	#[case(r#"{"type":"Feature","geometry":null,"properties":{"a":tru}}"#)]
	#[case("")]
	fn malformed_json(#[case] text: &str) {
		assert_eq!(kind_of(text), Some(ErrorKind::MalformedJson), "{text}");
	}

	#[rstest]
	#[case(r#"{"type":"Circle","coordinates":[0,0]}"#)]
	#[case(r#"{"coordinates":[0,0]}"#)]
	#[case(r#"{"type":"Point"}"#)]
	#[case(r#"{"type":"Feature","properties":{}}"#)]
	#[case(r#"{"type":"FeatureCollection"}"#)]
	#[case(r#"{"type":"GeometryCollection"}"#)]
	#[case(r#"{"type":"FeatureCollection","features":[{"type":"Point","coordinates":[0,0]}]}"#)]
	#[case(r#"{"type":"Feature","geometry":{"type":"Feature","geometry":null}}"#)]
	#[case(r#"{"type":7,"coordinates":[0,0]}"#)]
	#[case(r#"{"type":"FeatureCollection","features":null}"#)]
	#[case("[1,2]")]
	fn unsupported_geometry(#[case] text: &str) {
		assert_eq!(kind_of(text), Some(ErrorKind::UnsupportedGeometry), "{text}");
	}

	#[rstest]
	#[case(r#"{"type":"Point","coordinates":[0]}"#)]
	#[case(r#"{"type":"Point","coordinates":[0,1,2,3]}"#)]
	#[case(r#"{"type":"Point","coordinates":[[0,1]]}"#)]
	#[case(r#"{"type":"Point","coordinates":[]}"#)]
	#[case(r#"{"type":"LineString","coordinates":[[0,0]]}"#)]
	#[case(r#"{"type":"LineString","coordinates":[0,0]}"#)]
	#[case(r#"{"type":"LineString","coordinates":[[0,0],1]}"#)]
	#[case(r#"{"type":"Polygon","coordinates":[[[0,0],[1,1],[0,0]]]}"#)]
	#[case(r#"{"type":"Polygon","coordinates":[]}"#)]
	#[case(r#"{"type":"Polygon","coordinates":[[0,0],[1,0],[1,1]]}"#)]
	#[case(r#"{"type":"MultiPolygon","coordinates":[[[[[0,0]]]]]}"#)]
	#[case(r#"{"type":"Point","coordinates":[1e400,2]}"#)]
	#[case(r#"{"type":"LineString","coordinates":[[0,0],[1,-1e999]]}"#)]
	#[case(r#"{"type":"Polygon","coordinates":[[[1e400,0],[1,0],[1,1],[1e400,0]]]}"#)]
	fn invalid_geometry(#[case] text: &str) {
		assert_eq!(kind_of(text), Some(ErrorKind::InvalidGeometry), "{text}");
	}

	#[test]
	fn errors_carry_positions_and_snippets() {
		let text = r#"{"type":"Point","coordinates":[1,2]]"#;
		let err = parse_geojson(text).unwrap_err();
		assert!(err.to_string().contains("at position 36"), "{err}");
		assert!(err.to_string().contains("coordinates\":[1,2]"), "{err}");

		let err = parse_geojson_with(text, &ParseConfig { debug: false }).unwrap_err();
		assert_eq!(err.to_string(), "parsing object, expected ',' or '}' at position 36");
	}

	#[test]
	fn unsupported_properties() {
		let text = r#"{"type":"Feature","geometry":null,"properties":[1]}"#;
		assert_eq!(kind_of(text), Some(ErrorKind::UnsupportedAttributeValue));
	}
}
