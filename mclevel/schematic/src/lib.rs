//! The MCEdit `.schematic` container: a dense grid of block ids and block data
//! written as an uncompressed NBT compound named `Schematic`.

extern crate nbt_turbo;
extern crate thiserror;
#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

mod token;
mod volume;
mod writer;

pub use token::BlockToken;
pub use volume::{Dimensions, Grid};
pub use writer::{write, Schematic, MATERIALS_ALPHA};

use nbt_turbo::writer::TagError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	#[error("block ({x}, {y}, {z}) lies outside of a {dimensions} grid")]
	GridIndexOutOfRange { x: usize, y: usize, z: usize, dimensions: Dimensions },
	#[error("unsupported block token {0:?}, expected \"<id>\" or \"<id>:<data>\" with values in 0..=255")]
	UnsupportedTokenFormat(String),
	#[error("{axis} of {value} does not fit in a schematic (maximum: {})", std::i16::MAX)]
	DimensionTooLarge { axis: &'static str, value: usize },
	#[error("malformed NBT: {0}")]
	Tag(#[from] TagError),
	#[error("failed to write schematic: {0}")]
	Io(#[from] io::Error)
}
