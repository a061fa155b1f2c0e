//! Conversion of sparse, palette-indexed voxel models.

use crate::{Error, Mode};
use block_palette::{IdFilter, Palette, Rgb};
use schematic::{BlockToken, Dimensions, Grid};

/// An occupied cell of the source model, already in schematic axes: X along
/// the width, Y up, and Z along the length.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SourceVoxel {
	pub x: usize,
	pub y: usize,
	pub z: usize,
	/// 1-based index into the model palette.
	pub color_index: usize,
}

impl SourceVoxel {
	pub fn new(x: usize, y: usize, z: usize, color_index: usize) -> Self {
		SourceVoxel { x, y, z, color_index }
	}
}

/// Remaps a MagicaVoxel model into schematic axes.
///
/// `size` and each voxel are in model order `(x, y, z)`, Z up. The model's X
/// runs along the schematic length, its Y along the width, and its Z becomes
/// the height. Voxel color indices are taken as 0-based, as `dot_vox` reports
/// them, and shifted to the 1-based convention of [`SourceVoxel`].
pub fn from_model<I>(size: (u32, u32, u32), voxels: I) -> (Dimensions, Vec<SourceVoxel>) where I: IntoIterator<Item = (u8, u8, u8, u8)> {
	let (length, width, height) = size;
	let dimensions = Dimensions::new(width as usize, length as usize, height as usize);

	let voxels = voxels.into_iter()
		.map(|(x, y, z, index)| SourceVoxel::new(y as usize, z as usize, x as usize, index as usize + 1))
		.collect();

	(dimensions, voxels)
}

/// How each voxel color turns into a block.
enum Classify {
	Fixed(BlockToken),
	Closest(IdFilter),
}

impl<'m> From<&'m Mode> for Classify {
	fn from(mode: &'m Mode) -> Self {
		match *mode {
			Mode::Single(token) => Classify::Fixed(token),
			Mode::WoolAndTerracotta => Classify::Closest(IdFilter::wool_and_terracotta()),
			Mode::Full => Classify::Closest(IdFilter::all()),
		}
	}
}

/// Converts voxels into a grid, classifying each color according to `mode`
/// against the standard block palette.
///
/// Cells without a voxel are air. When the matcher has no candidate colors,
/// `fallback` is used if set, otherwise the conversion fails.
pub fn build(dimensions: Dimensions, palette: &[Rgb], voxels: &[SourceVoxel], mode: &Mode, fallback: Option<BlockToken>) -> Result<Grid, Error> {
	build_with_blocks(Palette::standard(), dimensions, palette, voxels, mode, fallback)
}

/// Like [`build`], but classifies against a caller supplied block palette.
pub fn build_with_blocks(blocks: Palette, dimensions: Dimensions, palette: &[Rgb], voxels: &[SourceVoxel], mode: &Mode, fallback: Option<BlockToken>) -> Result<Grid, Error> {
	let classify = Classify::from(mode);

	let mut grid = Grid::new(dimensions);
	let mut fallbacks = 0;

	for voxel in voxels {
		let color = voxel.color_index.checked_sub(1)
			.and_then(|index| palette.get(index))
			.copied()
			.ok_or(Error::PaletteIndex {
				x: voxel.x,
				y: voxel.y,
				z: voxel.z,
				index: voxel.color_index,
				len: palette.len(),
			})?;

		let token = match classify {
			Classify::Fixed(token) => token,
			Classify::Closest(ref filter) => match (blocks.closest(color, filter), fallback) {
				(Ok(token), _) => token,
				(Err(block_palette::Error::EmptyPalette), Some(fallback)) => {
					fallbacks += 1;
					fallback
				},
				(Err(e), None) => return Err(e.into()),
			},
		};

		grid.set(voxel.x, voxel.y, voxel.z, token)?;
	}

	if let (true, Some(fallback)) = (fallbacks > 0, fallback) {
		warn!("{} voxel(s) had no matching block, used {} instead", fallbacks, fallback);
	}

	debug!("Placed {} voxel(s) into a {} grid using mode {}", voxels.len(), dimensions, mode);

	Ok(grid)
}
