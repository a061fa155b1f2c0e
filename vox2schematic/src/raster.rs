//! Extrusion of a transparent PNG slice into a schematic.

use schematic::{BlockToken, Dimensions, Grid};

/// Builds a grid from RGBA pixels given in row-major order (rows top to
/// bottom, pixels left to right).
///
/// Opaque pixels, meaning any alpha other than 0, become `fill`; transparent
/// ones become air. The scan is emitted in reverse, so the last pixel of the
/// image is the first cell of the schematic.
///
/// `dimensions` are used as is. The pixel count is expected to match their
/// volume; a mismatch is logged but not rejected.
pub fn build(pixels: &[[u8; 4]], fill: BlockToken, dimensions: Dimensions) -> Grid {
	let cells: Vec<BlockToken> = pixels.iter()
		.rev()
		.map(|&[_, _, _, alpha]| if alpha != 0 { fill } else { BlockToken::AIR })
		.collect();

	debug!("Extruded {} pixels ({} solid) into a {} grid",
		pixels.len(),
		cells.iter().filter(|cell| !cell.is_air()).count(),
		dimensions
	);

	Grid::from_cells(dimensions, cells)
}

#[cfg(test)]
mod test {
	use super::build;
	use schematic::{BlockToken, Dimensions};

	const CLEAR: [u8; 4] = [255, 255, 255, 0];
	const SOLID: [u8; 4] = [10, 20, 30, 255];

	#[test]
	fn test_transparent() {
		let grid = build(&[CLEAR; 6], BlockToken::Bare(1), Dimensions::new(3, 1, 2));

		assert_eq!(grid.block_ids(), vec![0; 6]);
		assert_eq!(grid.block_data(), vec![0; 6]);
	}

	#[test]
	fn test_opaque() {
		let grid = build(&[SOLID; 6], BlockToken::Bare(4), Dimensions::new(3, 1, 2));

		assert_eq!(grid.block_ids(), vec![4; 6]);
		assert_eq!(grid.block_data(), vec![0; 6]);
	}

	#[test]
	fn test_any_alpha_is_solid() {
		let grid = build(&[[0, 0, 0, 1]], BlockToken::Bare(1), Dimensions::new(1, 1, 1));

		assert_eq!(grid.block_ids(), vec![1]);
	}

	#[test]
	fn test_scan_is_reversed() {
		// 2x2 image with only the top left pixel set.
		let pixels = [SOLID, CLEAR, CLEAR, CLEAR];
		let grid = build(&pixels, BlockToken::Bare(1), Dimensions::new(2, 1, 2));

		assert_eq!(grid.block_ids(), vec![0, 0, 0, 1]);
		assert_eq!(grid.get(1, 1, 0), Some(BlockToken::Bare(1)));
	}

	#[test]
	fn test_dimensions_are_verbatim() {
		let grid = build(&[SOLID; 4], BlockToken::Bare(1), Dimensions::new(5, 5, 5));

		assert_eq!(grid.dimensions(), Dimensions::new(5, 5, 5));
		assert_eq!(grid.cells().len(), 4);
	}

	#[test]
	fn test_variant_fill() {
		let grid = build(&[SOLID, CLEAR], BlockToken::WithVariant(35, 14), Dimensions::new(2, 1, 1));

		assert_eq!(grid.block_ids(), vec![0, 35]);
		assert_eq!(grid.block_data(), vec![0, 14]);
	}
}
