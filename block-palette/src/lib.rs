//! Nearest-color classification of voxel colors into schematic blocks.

extern crate fxhash;
extern crate schematic;
extern crate thiserror;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

pub mod filter;
pub mod table;

pub use filter::IdFilter;

use schematic::BlockToken;
use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum Error {
	#[error("no palette entry passes the block filter")]
	EmptyPalette,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rgb {
	pub red: u8,
	pub green: u8,
	pub blue: u8,
}

impl Rgb {
	pub const fn new(red: u8, green: u8, blue: u8) -> Self {
		Rgb { red, green, blue }
	}

	/// Squared euclidean distance in RGB space.
	pub fn distance_squared(self, other: Rgb) -> u32 {
		fn channel(a: u8, b: u8) -> u32 {
			let delta = a as i32 - b as i32;

			(delta * delta) as u32
		}

		channel(self.red, other.red) + channel(self.green, other.green) + channel(self.blue, other.blue)
	}
}

impl From<[u8; 3]> for Rgb {
	fn from(rgb: [u8; 3]) -> Self {
		Rgb::new(rgb[0], rgb[1], rgb[2])
	}
}

/// Alpha is dropped.
impl From<[u8; 4]> for Rgb {
	fn from(rgba: [u8; 4]) -> Self {
		Rgb::new(rgba[0], rgba[1], rgba[2])
	}
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Entry {
	pub color: Rgb,
	pub token: BlockToken,
}

impl Entry {
	pub const fn new(color: Rgb, token: BlockToken) -> Self {
		Entry { color, token }
	}
}

/// An ordered set of block colors.
#[derive(Copy, Clone, Debug)]
pub struct Palette<'p> {
	entries: &'p [Entry],
}

impl Palette<'static> {
	/// Clay, concrete, concrete powder, and wool colors.
	pub fn standard() -> Self {
		Palette { entries: table::STANDARD }
	}
}

impl<'p> Palette<'p> {
	pub fn new(entries: &'p [Entry]) -> Self {
		Palette { entries }
	}

	pub fn entries(&self) -> &'p [Entry] {
		self.entries
	}

	/// Finds the entry whose color is closest to `color` among the entries
	/// accepted by `filter`. Ties go to the entry listed first.
	pub fn closest_entry(&self, color: Rgb, filter: &IdFilter) -> Result<&'p Entry, Error> {
		let mut closest: Option<(u32, &'p Entry)> = None;

		for entry in self.entries.iter().filter(|entry| filter.matches(&entry.token)) {
			let distance = color.distance_squared(entry.color);

			match closest {
				Some((best, _)) if best <= distance => (),
				_ => closest = Some((distance, entry)),
			}
		}

		closest.map(|(_, entry)| entry).ok_or(Error::EmptyPalette)
	}

	pub fn closest(&self, color: Rgb, filter: &IdFilter) -> Result<BlockToken, Error> {
		self.closest_entry(color, filter).map(|entry| entry.token)
	}
}

impl Default for Palette<'static> {
	fn default() -> Self {
		Palette::standard()
	}
}

#[cfg(test)]
mod test {
	use super::{Entry, Error, IdFilter, Palette, Rgb};
	use schematic::BlockToken;

	static BLACK_WHITE: &[Entry] = &[
		Entry::new(Rgb::new(0, 0, 0), BlockToken::Bare(1)),
		Entry::new(Rgb::new(255, 255, 255), BlockToken::Bare(2)),
	];

	#[test]
	fn test_black_white() {
		let palette = Palette::new(BLACK_WHITE);

		assert_eq!(palette.closest(Rgb::new(10, 10, 10), &IdFilter::all()), Ok(BlockToken::Bare(1)));
		assert_eq!(palette.closest(Rgb::new(250, 250, 250), &IdFilter::all()), Ok(BlockToken::Bare(2)));
	}

	#[test]
	fn test_tie_goes_to_first() {
		static TIED: &[Entry] = &[
			Entry::new(Rgb::new(0, 0, 0), BlockToken::Bare(7)),
			Entry::new(Rgb::new(20, 0, 0), BlockToken::Bare(8)),
			Entry::new(Rgb::new(0, 0, 0), BlockToken::Bare(9)),
		];

		let palette = Palette::new(TIED);

		for _ in 0..4 {
			assert_eq!(palette.closest(Rgb::new(10, 0, 0), &IdFilter::all()), Ok(BlockToken::Bare(7)));
		}
	}

	#[test]
	fn test_exact_colors_map_to_themselves() {
		let palette = Palette::standard();

		for entry in palette.entries() {
			let found = palette.closest_entry(entry.color, &IdFilter::all()).unwrap();

			assert_eq!(found.color, entry.color);
			assert_eq!(found.token, entry.token);
		}
	}

	#[test]
	fn test_closest_is_minimal() {
		let palette = Palette::standard();

		for &color in &[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), Rgb::new(200, 30, 30), Rgb::new(12, 200, 90), Rgb::new(128, 128, 128)] {
			let chosen = palette.closest_entry(color, &IdFilter::all()).unwrap();
			let distance = chosen.color.distance_squared(color);

			for entry in palette.entries() {
				assert!(distance <= entry.color.distance_squared(color), "{:?} is closer to {:?} than {:?}", entry, color, chosen);
			}
		}
	}

	#[test]
	fn test_restricted() {
		let palette = Palette::standard();
		let filter = IdFilter::wool_and_terracotta();

		// Hardened clay is the exact match, but it is not in the restricted set.
		let token = palette.closest(Rgb::new(152, 94, 67), &filter).unwrap();

		assert!(filter.matches(&token));
		assert_ne!(token.id(), 172);

		// Concrete powder for white is excluded, so the exact color falls back to a neighbor.
		assert_ne!(palette.closest(Rgb::new(226, 228, 228), &filter).unwrap().id(), 252);
	}

	#[test]
	fn test_standard_examples() {
		let palette = Palette::standard();

		assert_eq!(palette.closest(Rgb::new(161, 39, 35), &IdFilter::all()), Ok(BlockToken::WithVariant(35, 14)));
		assert_eq!(palette.closest(Rgb::new(152, 94, 67), &IdFilter::all()), Ok(BlockToken::Bare(172)));
		assert_eq!(Rgb::from([8, 10, 15, 0]), Rgb::new(8, 10, 15));
	}

	#[test]
	fn test_empty_palette() {
		assert_matches!(Palette::new(BLACK_WHITE).closest(Rgb::new(1, 2, 3), &IdFilter::only(&[])), Err(Error::EmptyPalette));
		assert_matches!(Palette::new(&[]).closest(Rgb::new(1, 2, 3), &IdFilter::all()), Err(Error::EmptyPalette));
		assert_matches!(
			Palette::standard().closest(Rgb::new(1, 2, 3), &IdFilter::only(&[1])),
			Err(Error::EmptyPalette)
		);
	}
}
