use anyhow::Result;
use clap::Args;
use geovec::{geometry::Geometry, read_collection};
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// file you want to probe
	/// supported formats are: *.geojson, *.json, *.ndjson, *.geojsonl, *.gvec
	#[arg(required = true, verbatim_doc_comment)]
	filename: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let collection = read_collection(&arguments.filename)?;

	let (mut points, mut line_strings, mut polygons) = (0, 0, 0);
	for shape in &collection {
		match shape.geometry() {
			Geometry::Point(_) => points += 1,
			Geometry::LineString(_) => line_strings += 1,
			Geometry::Polygon(_) => polygons += 1,
		}
	}

	println!("shapes: {}", collection.len());
	println!("  points: {points}");
	println!("  line strings: {line_strings}");
	println!("  polygons: {polygons}");
	match (collection.bounds(), collection.center()) {
		(Some([x_min, y_min, x_max, y_max]), Some(center)) => {
			println!("bounds: [{x_min}, {y_min}, {x_max}, {y_max}]");
			println!("center: [{}, {}]", center.x(), center.y());
		}
		_ => println!("bounds: none"),
	}
	Ok(())
}
