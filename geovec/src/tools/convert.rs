use anyhow::Result;
use geovec::{FileFormat, geometry::GeoJsonWriteConfig, read_collection, write_collection};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// supported formats: *.geojson, *.json, *.ndjson, *.geojsonl or *.gvec
	#[arg()]
	input_file: PathBuf,

	/// supported formats: *.geojson, *.json, *.ndjson, *.geojsonl or *.gvec
	#[arg()]
	output_file: PathBuf,

	/// round GeoJSON coordinates to this many decimal places
	#[arg(long, value_name = "int", display_order = 1)]
	precision: Option<u8>,

	/// check every geometry before writing
	#[arg(long, display_order = 2)]
	verify: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!("convert from {:?} to {:?}", arguments.input_file, arguments.output_file);

	// fail on a bad output extension before doing any work
	FileFormat::from_path(&arguments.output_file)?;

	let collection = read_collection(&arguments.input_file)?;
	if arguments.verify {
		collection.verify()?;
	}

	let config = GeoJsonWriteConfig {
		precision: arguments.precision,
	};
	write_collection(&collection, &arguments.output_file, &config)?;

	log::info!("converted {} shapes", collection.len());
	Ok(())
}
