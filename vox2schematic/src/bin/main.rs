extern crate block_palette;
extern crate clap;
extern crate dot_vox;
extern crate env_logger;
extern crate image;
#[macro_use]
extern crate log;
extern crate schematic;
extern crate vox2schematic;

use clap::{App, Arg};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::process;
use std::str::FromStr;

use block_palette::Rgb;
use schematic::{BlockToken, Dimensions, Grid, MATERIALS_ALPHA};
use vox2schematic::{raster, voxel, Error, Mode};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Format {
	Png,
	Vox
}

impl Format {
	const NAMES: &'static [&'static str] = &["png", "vox"];

	fn from_name(name: &str) -> Option<Self> {
		match name {
			"png" => Some(Format::Png),
			"vox" => Some(Format::Vox),
			_ => None
		}
	}

	fn from_path(path: &Path) -> Option<Self> {
		path.extension().and_then(|extension| extension.to_str()).and_then(Format::from_name)
	}
}

/// Input format plus the dimensions it needs.
#[derive(Debug, Clone, Copy)]
enum Source {
	/// PNG slices take their size from the command line.
	Png(Dimensions),
	/// Models carry their own size; requested dimensions are only compared against it.
	Vox(Option<Dimensions>)
}

struct Options {
	input: String,
	output: String,
	source: Source,
	block: BlockToken,
	mode: Mode,
	fallback: bool
}

fn validate_block(block: String) -> Result<(), String> {
	BlockToken::from_str(&block).map(|_| ()).map_err(|e| e.to_string())
}

/// Schematic sizes are stored as signed shorts.
fn validate_dimension(number: String) -> Result<(), String> {
	match number.parse::<u32>() {
		Ok(0) => Err("zero values are not a valid dimension".to_owned()),
		Ok(x) if x > std::i16::MAX as u32 => Err(format!("dimensions larger than {} do not fit in a schematic", std::i16::MAX)),
		Ok(_) => Ok(()),
		Err(parse) => Err(parse.to_string())
	}
}

/// `<input file stem>.schematic`, in the working directory.
fn default_output(input: &Path) -> String {
	let stem = input.file_stem().map(|stem| stem.to_string_lossy()).unwrap_or_default();

	format!("{}.schematic", stem)
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let matches = App::new("vox2schematic")
		.version("0.1.0")
		.about("Converts various voxel formats to Minecraft .schematic files")
		.arg(Arg::with_name("input")
			.value_name("FILE")
			.help("File to convert")
			.required(true)
			.index(1)
		)
		.arg(Arg::with_name("output")
			.short("o")
			.long("output")
			.value_name("OUTPUT")
			.help("Filename of the resulting file, defaults to <input name>.schematic")
			.takes_value(true)
		)
		.arg(Arg::with_name("format")
			.short("f")
			.long("format")
			.value_name("FORMAT")
			.help("Input file format: \"png\" for a 2D PNG slice (requires --dimensions) or \"vox\". Redundant if the file has a valid extension")
			.possible_values(Format::NAMES)
			.takes_value(true)
		)
		.arg(Arg::with_name("dimensions")
			.short("d")
			.long("dimensions")
			.value_names(&["WIDTH", "LENGTH", "HEIGHT"])
			.help("Dimensions of the schematic, as shown by MagicaVoxel")
			.number_of_values(3)
			.validator(validate_dimension)
		)
		.arg(Arg::with_name("block")
			.short("b")
			.long("blockid")
			.value_name("BLOCK")
			.help("Block to use for solid pixels and single block mode, as \"id\" or \"id:data\"")
			.default_value("1")
			.validator(validate_block)
		)
		.arg(Arg::with_name("mode")
			.short("m")
			.long("mode")
			.value_name("MODE")
			.long_help("How voxel colors are turned into blocks:\n\
			             single: every voxel becomes --blockid\n\
			             terracotta_wool: closest stained clay, concrete, or wool\n\
			             all: closest block of any kind")
			.possible_values(Mode::NAMES)
			.default_value("all")
		)
		.arg(Arg::with_name("fallback")
			.long("fallback")
			.help("Use --blockid for colors without any matching block instead of failing")
		)
		.get_matches();

	let input = matches.value_of("input").unwrap_or_default().to_owned();
	let input_path = Path::new(&input);

	let format = match matches.value_of("format").and_then(Format::from_name).or_else(|| Format::from_path(input_path)) {
		Some(format) => format,
		None => {
			error!("Could not deduce the format of {} from its extension, specify it explicitly with -f", input);
			process::exit(2);
		}
	};

	let dimensions = matches.values_of("dimensions").map(|values| {
		let values: Vec<usize> = values.filter_map(|value| usize::from_str(value).ok()).collect();

		Dimensions::new(values[0], values[1], values[2])
	});

	let source = match (format, dimensions) {
		(Format::Png, Some(dimensions)) => Source::Png(dimensions),
		(Format::Png, None) => {
			error!("PNG format requires dimensions to be specified with -d");
			process::exit(2);
		},
		(Format::Vox, requested) => Source::Vox(requested)
	};

	let output = matches.value_of("output").map(str::to_owned).unwrap_or_else(|| default_output(input_path));

	// Both were checked by validators.
	let block = matches.value_of("block").and_then(|block| BlockToken::from_str(block).ok()).unwrap_or(BlockToken::Bare(1));
	let mode = matches.value_of("mode").and_then(|mode| Mode::from_name(mode, block)).unwrap_or_default();

	let options = Options {
		input,
		output,
		source,
		block,
		mode,
		fallback: matches.is_present("fallback")
	};

	if let Err(e) = execute(options) {
		error!("{}", e);
		process::exit(1);
	}
}

fn execute(options: Options) -> Result<(), Error> {
	info!("Converting {} ({:?}) to {}", options.input, options.source, options.output);

	let grid = match options.source {
		Source::Png(dimensions) => convert_png(&options, dimensions)?,
		Source::Vox(requested) => convert_vox(&options, requested)?
	};

	let file = File::create(&options.output).map_err(schematic::Error::from)?;
	schematic::write(&grid, MATERIALS_ALPHA, BufWriter::new(file))?;

	info!("Wrote a {} schematic to {}", grid.dimensions(), options.output);

	Ok(())
}

fn decode_error<E: ToString>(path: &str) -> impl FnOnce(E) -> Error {
	let path = path.to_owned();

	move |e| Error::Decode { path, reason: e.to_string() }
}

fn convert_png(options: &Options, dimensions: Dimensions) -> Result<Grid, Error> {
	let image = image::open(&options.input).map_err(decode_error(&options.input))?.to_rgba8();
	let pixels: Vec<[u8; 4]> = image.pixels().map(|pixel| pixel.0).collect();

	debug!("Image is {}x{} pixels", image.width(), image.height());

	Ok(raster::build(&pixels, options.block, dimensions))
}

fn convert_vox(options: &Options, requested: Option<Dimensions>) -> Result<Grid, Error> {
	let data = dot_vox::load(&options.input).map_err(decode_error(&options.input))?;

	let model = data.models.first().ok_or_else(|| Error::Decode {
		path: options.input.clone(),
		reason: "file contains no models".to_owned()
	})?;

	if data.models.len() > 1 {
		warn!("{} contains {} models, only the first one is converted", options.input, data.models.len());
	}

	let (dimensions, voxels) = voxel::from_model(
		(model.size.x, model.size.y, model.size.z),
		model.voxels.iter().map(|voxel| (voxel.x, voxel.y, voxel.z, voxel.i))
	);

	if let Some(requested) = requested {
		if requested != dimensions {
			warn!("Ignoring --dimensions {}, the model is {}", requested, dimensions);
		}
	}

	let palette: Vec<Rgb> = data.palette.iter().map(|color| Rgb::new(color.r, color.g, color.b)).collect();

	info!("Model is {} with {} voxels and {} palette colors, mode {}", dimensions, voxels.len(), palette.len(), options.mode);

	let fallback = if options.fallback { Some(options.block) } else { None };

	voxel::build(dimensions, &palette, &voxels, &options.mode, fallback)
}
