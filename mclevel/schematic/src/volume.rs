use crate::{BlockToken, Error};
use std::fmt::{self, Display, Formatter};

/// Size of a schematic. X runs along the width, Z along the length, and Y
/// along the height.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Dimensions {
	pub width: usize,
	pub length: usize,
	pub height: usize
}

impl Dimensions {
	pub fn new(width: usize, length: usize, height: usize) -> Self {
		Dimensions { width, length, height }
	}

	pub fn volume(&self) -> usize {
		self.width * self.length * self.height
	}
}

impl Display for Dimensions {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{}x{}x{}", self.width, self.length, self.height)
	}
}

/// A dense volume of block tokens in schematic order: Y is the outermost axis,
/// then Z, with X varying fastest.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
	dimensions: Dimensions,
	cells: Box<[BlockToken]>
}

impl Grid {
	/// A grid filled with air.
	pub fn new(dimensions: Dimensions) -> Self {
		Grid {
			dimensions,
			cells: vec![BlockToken::AIR; dimensions.volume()].into_boxed_slice()
		}
	}

	/// Wraps cells that are already in schematic order.
	///
	/// The cell count is expected to equal the volume of the dimensions, but
	/// this is not enforced: legacy raster conversions take the dimensions
	/// verbatim from the user.
	pub fn from_cells(dimensions: Dimensions, cells: Vec<BlockToken>) -> Self {
		if cells.len() != dimensions.volume() {
			warn!("Grid of {} holds {} cells, but its volume is {}", dimensions, cells.len(), dimensions.volume());
		}

		Grid { dimensions, cells: cells.into_boxed_slice() }
	}

	pub fn dimensions(&self) -> Dimensions {
		self.dimensions
	}

	pub fn index(&self, x: usize, y: usize, z: usize) -> Option<usize> {
		let Dimensions { width, length, height } = self.dimensions;

		if x >= width || y >= height || z >= length {
			return None;
		}

		Some((y * length + z) * width + x)
	}

	pub fn get(&self, x: usize, y: usize, z: usize) -> Option<BlockToken> {
		self.index(x, y, z).and_then(|index| self.cells.get(index).copied())
	}

	pub fn set(&mut self, x: usize, y: usize, z: usize, token: BlockToken) -> Result<(), Error> {
		let dimensions = self.dimensions;
		let out_of_range = move || Error::GridIndexOutOfRange { x, y, z, dimensions };

		let index = self.index(x, y, z).ok_or_else(out_of_range)?;
		let cell = self.cells.get_mut(index).ok_or_else(out_of_range)?;

		*cell = token;

		Ok(())
	}

	pub fn cells(&self) -> &[BlockToken] {
		&self.cells
	}

	/// Block ids of every cell, the `Blocks` array of the container.
	pub fn block_ids(&self) -> Vec<u8> {
		self.cells.iter().map(BlockToken::id).collect()
	}

	/// Data values of every cell, the `Data` array of the container.
	pub fn block_data(&self) -> Vec<u8> {
		self.cells.iter().map(BlockToken::variant).collect()
	}
}
