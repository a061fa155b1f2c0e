use schematic::BlockToken;
use std::fmt::{self, Display, Formatter};

/// How voxel colors become blocks.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Mode {
	/// Every voxel becomes the same block.
	Single(BlockToken),
	/// Closest stained clay, concrete, or wool.
	WoolAndTerracotta,
	/// Closest block in the whole palette.
	Full,
}

impl Mode {
	pub const NAMES: &'static [&'static str] = &["single", "terracotta_wool", "all"];

	/// Parses a mode by its command line name. `single` uses `block`.
	pub fn from_name(name: &str, block: BlockToken) -> Option<Self> {
		match name {
			"single" => Some(Mode::Single(block)),
			"terracotta_wool" => Some(Mode::WoolAndTerracotta),
			"all" => Some(Mode::Full),
			_ => None,
		}
	}
}

impl Default for Mode {
	fn default() -> Self {
		Mode::Full
	}
}

impl Display for Mode {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match *self {
			Mode::Single(block) => write!(f, "single ({})", block),
			Mode::WoolAndTerracotta => f.write_str("terracotta_wool"),
			Mode::Full => f.write_str("all"),
		}
	}
}
