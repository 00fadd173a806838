use anyhow::Result;
use clap::Args;
use geovec::geometry::read_geojson_assembly_file;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file, usually a FeatureCollection
	#[arg()]
	input_file: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let assembly = read_geojson_assembly_file(&arguments.input_file)?;
	for (key, collection) in &assembly {
		println!("{key}: {} shapes", collection.len());
	}
	Ok(())
}
