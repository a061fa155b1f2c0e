extern crate block_palette;
extern crate schematic;
extern crate vox2schematic;

use block_palette::Rgb;
use schematic::{BlockToken, Dimensions, MATERIALS_ALPHA};
use vox2schematic::{raster, voxel, Mode, SourceVoxel};

/// Returns the payload of the named byte array, without its length prefix.
fn byte_array<'b>(buffer: &'b [u8], name: &str) -> &'b [u8] {
	let mut header = vec![7, 0, name.len() as u8];
	header.extend_from_slice(name.as_bytes());

	let start = buffer.windows(header.len()).position(|window| window == &header[..]).expect("missing byte array") + header.len();

	let mut len = [0; 4];
	len.copy_from_slice(&buffer[start..start + 4]);
	let len = u32::from_be_bytes(len) as usize;

	&buffer[start + 4..start + 4 + len]
}

fn short(buffer: &[u8], name: &str) -> i16 {
	let mut header = vec![2, 0, name.len() as u8];
	header.extend_from_slice(name.as_bytes());

	let start = buffer.windows(header.len()).position(|window| window == &header[..]).expect("missing short") + header.len();

	i16::from_be_bytes([buffer[start], buffer[start + 1]])
}

#[test]
fn test_voxel_model_to_schematic() {
	let dimensions = Dimensions::new(3, 2, 4);
	let palette = [Rgb::new(161, 39, 35), Rgb::new(152, 94, 67)];
	let voxels = [
		SourceVoxel::new(0, 0, 0, 1),
		SourceVoxel::new(2, 3, 1, 2),
	];

	let grid = voxel::build(dimensions, &palette, &voxels, &Mode::Full, None).unwrap();

	let mut buffer = Vec::new();
	schematic::write(&grid, MATERIALS_ALPHA, &mut buffer).unwrap();

	assert_eq!(&buffer[..12], b"\x0a\x00\x09Schematic");
	assert_eq!(short(&buffer, "Width"), 3);
	assert_eq!(short(&buffer, "Length"), 2);
	assert_eq!(short(&buffer, "Height"), 4);

	let blocks = byte_array(&buffer, "Blocks");
	let data = byte_array(&buffer, "Data");

	assert_eq!(blocks.len(), dimensions.volume());
	assert_eq!(data.len(), dimensions.volume());

	// Red wool at the origin, hardened clay at the far corner.
	assert_eq!((blocks[0], data[0]), (35, 14));
	assert_eq!((blocks[23], data[23]), (172, 0));
	assert_eq!(blocks.iter().filter(|&&id| id != 0).count(), 2);
}

#[test]
fn test_png_slice_to_schematic() {
	let clear = [0, 0, 0, 0];
	let solid = [0, 0, 0, 255];

	// 3x2 image, top row solid.
	let pixels = [solid, solid, solid, clear, clear, clear];
	let grid = raster::build(&pixels, BlockToken::Bare(57), Dimensions::new(3, 1, 2));

	let mut buffer = Vec::new();
	schematic::write(&grid, MATERIALS_ALPHA, &mut buffer).unwrap();

	assert_eq!(byte_array(&buffer, "Blocks"), &[0, 0, 0, 57, 57, 57]);
	assert_eq!(byte_array(&buffer, "Data"), &[0; 6]);
}

#[test]
fn test_conversion_is_deterministic() {
	let palette: Vec<Rgb> = (0..=255u8).map(|value| Rgb::new(value, 255 - value, value / 2)).collect();
	let voxels: Vec<SourceVoxel> = (0..64).map(|index| SourceVoxel::new(index % 4, index / 16, (index / 4) % 4, index * 3 + 1)).collect();

	let convert = || {
		let grid = voxel::build(Dimensions::new(4, 4, 4), &palette, &voxels, &Mode::WoolAndTerracotta, None).unwrap();
		let mut buffer = Vec::new();

		schematic::write(&grid, MATERIALS_ALPHA, &mut buffer).unwrap();
		buffer
	};

	assert_eq!(convert(), convert());
}
