//! Converts PNG slices and MagicaVoxel models into MCEdit schematics.
//!
//! Input decoding happens in the binary; the library works on decoded pixels
//! and voxels and produces a [`Grid`](schematic::Grid) ready for
//! [`schematic::write`].

extern crate block_palette;
extern crate schematic;
extern crate thiserror;
#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

pub mod raster;
pub mod voxel;

mod mode;

pub use mode::Mode;
pub use voxel::SourceVoxel;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	#[error(transparent)]
	Schematic(#[from] schematic::Error),
	#[error(transparent)]
	Palette(#[from] block_palette::Error),
	#[error("voxel at ({x}, {y}, {z}) uses color index {index}, but the palette has {len} colors")]
	PaletteIndex { x: usize, y: usize, z: usize, index: usize, len: usize },
	#[error("could not decode {path}: {reason}")]
	Decode { path: String, reason: String },
}
