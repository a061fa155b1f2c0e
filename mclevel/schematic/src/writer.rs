use crate::{Error, Grid};
use nbt_turbo::writer::{CompoundWriter, Kind, Output};
use std::convert::TryFrom;
use std::io::Write;

/// Materials value for classic (pre-Anvil) block ids.
pub const MATERIALS_ALPHA: &str = "Alpha";

#[derive(Debug, Clone)]
pub struct Schematic<'g> {
	pub materials: &'g str,
	pub grid: &'g Grid
}

impl<'g> Schematic<'g> {
	pub fn new(grid: &'g Grid) -> Self {
		Schematic { materials: MATERIALS_ALPHA, grid }
	}

	pub fn write<T: Output>(&self, out: T) -> Result<T, Error> {
		let dimensions = self.grid.dimensions();

		let width = short("Width", dimensions.width)?;
		let length = short("Length", dimensions.length)?;
		let height = short("Height", dimensions.height)?;

		let blocks = self.grid.block_ids();
		let data = self.grid.block_data();

		let out = CompoundWriter::write("Schematic", out, |writer| {
			writer
				.i16("Width", width)?
				.i16("Length", length)?
				.i16("Height", height)?
				.string("Materials", self.materials)?
				.u8_array("Blocks", &blocks)?
				.u8_array("Data", &data)?
				.empty_list("Entities", Kind::Compound)?
				.empty_list("TileEntities", Kind::Compound)?;

			Ok(())
		})?;

		Ok(out)
	}
}

fn short(axis: &'static str, value: usize) -> Result<i16, Error> {
	i16::try_from(value).map_err(|_| Error::DimensionTooLarge { axis, value })
}

/// Serializes the grid and hands the finished container to `sink` in one
/// piece. Nothing reaches the sink if serialization fails.
pub fn write<W: Write>(grid: &Grid, materials: &str, mut sink: W) -> Result<(), Error> {
	let schematic = Schematic { materials, grid };

	let buffer = schematic.write(Vec::with_capacity(grid.cells().len() * 2 + 128))?;

	debug!("Writing {} byte schematic ({})", buffer.len(), grid.dimensions());

	sink.write_all(&buffer)?;
	sink.flush()?;

	Ok(())
}
