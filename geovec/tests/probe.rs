use assert_cmd::{Command, cargo};
use assert_fs::{TempDir, prelude::*};
use predicates::{prelude::PredicateBooleanExt, str};

#[test]
fn probe_geojson() {
	let dir = TempDir::new().unwrap();
	let input = dir.child("mixed.geojson");
	input
		.write_str(
			r#"{"type":"GeometryCollection","geometries":[
				{"type":"MultiPoint","coordinates":[[-1,-2],[3,4]]},
				{"type":"LineString","coordinates":[[0,0],[1,1]]},
				{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1]]]}
			]}"#,
		)
		.unwrap();

	Command::new(cargo::cargo_bin!())
		.args(["probe", input.path().to_str().unwrap()])
		.assert()
		.success()
		.stdout(str::diff(
			"shapes: 4\n  points: 2\n  line strings: 1\n  polygons: 1\nbounds: [-1, -2, 3, 4]\ncenter: [1, 1]\n",
		));
}

#[test]
fn probe_empty_collection() {
	let dir = TempDir::new().unwrap();
	let input = dir.child("empty.geojson");
	input.write_str(r#"{"type":"FeatureCollection","features":[]}"#).unwrap();

	Command::new(cargo::cargo_bin!())
		.args(["probe", input.path().to_str().unwrap()])
		.assert()
		.success()
		.stdout(str::contains("shapes: 0").and(str::contains("bounds: none")));
}

#[test]
fn probe_unknown_extension() {
	Command::new(cargo::cargo_bin!())
		.args(["probe", "shapes.kml"])
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("unknown file extension"));
}

#[test]
fn assembly_lists_keys() {
	let dir = TempDir::new().unwrap();
	let input = dir.child("features.geojson");
	input
		.write_str(
			r#"{"type":"FeatureCollection","features":[
				{"type":"Feature","id":"b","geometry":{"type":"MultiPoint","coordinates":[[0,0],[1,1]]},"properties":{}},
				{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{"id":"a"}},
				{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":null}
			]}"#,
		)
		.unwrap();

	Command::new(cargo::cargo_bin!())
		.args(["assembly", input.path().to_str().unwrap()])
		.assert()
		.success()
		.stdout(str::diff("2: 1 shapes\na: 1 shapes\nb: 2 shapes\n"));
}
