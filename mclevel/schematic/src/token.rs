use crate::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The content of a single schematic cell.
///
/// Tokens are either a bare block id, or a block id with a data value (wool
/// color, concrete color, ...). A bare token writes a data value of 0.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BlockToken {
	Bare(u8),
	WithVariant(u8, u8)
}

impl BlockToken {
	pub const AIR: BlockToken = BlockToken::Bare(0);

	pub fn id(&self) -> u8 {
		match *self {
			BlockToken::Bare(id) => id,
			BlockToken::WithVariant(id, _) => id
		}
	}

	pub fn variant(&self) -> u8 {
		match *self {
			BlockToken::Bare(_) => 0,
			BlockToken::WithVariant(_, variant) => variant
		}
	}

	pub fn is_air(&self) -> bool {
		self.id() == 0
	}
}

impl Default for BlockToken {
	fn default() -> Self {
		BlockToken::AIR
	}
}

impl FromStr for BlockToken {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		fn number(part: &str, s: &str) -> Result<u8, Error> {
			part.trim().parse::<u8>().map_err(|_| Error::UnsupportedTokenFormat(s.to_owned()))
		}

		let mut parts = s.split(':');

		let token = match (parts.next(), parts.next(), parts.next()) {
			(Some(id), None, None) => BlockToken::Bare(number(id, s)?),
			(Some(id), Some(variant), None) => BlockToken::WithVariant(number(id, s)?, number(variant, s)?),
			_ => return Err(Error::UnsupportedTokenFormat(s.to_owned()))
		};

		Ok(token)
	}
}

impl Display for BlockToken {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match *self {
			BlockToken::Bare(id) => write!(f, "{}", id),
			BlockToken::WithVariant(id, variant) => write!(f, "{}:{}", id, variant)
		}
	}
}
