//! Block colors used to classify voxels.
//!
//! Order matters: when two entries are equally close to a color, the one
//! listed first wins.

use crate::{Entry, Rgb};
use schematic::BlockToken;

pub const HARDENED_CLAY: u8 = 172;
pub const CONCRETE: u8 = 251;
pub const CONCRETE_POWDER: u8 = 252;
pub const STAINED_CLAY: u8 = 159;
pub const WOOL: u8 = 35;

// Light gray entries carry data value 7 rather than 8. Existing schematics
// converted with this table depend on it.
pub static STANDARD: &[Entry] = &[
	Entry::new(Rgb::new(152, 94, 67), BlockToken::Bare(HARDENED_CLAY)),

	// black
	Entry::new(Rgb::new(8, 10, 15), BlockToken::WithVariant(CONCRETE, 15)),
	Entry::new(Rgb::new(25, 27, 32), BlockToken::WithVariant(CONCRETE_POWDER, 15)),
	Entry::new(Rgb::new(37, 23, 16), BlockToken::WithVariant(STAINED_CLAY, 15)),
	Entry::new(Rgb::new(21, 21, 26), BlockToken::WithVariant(WOOL, 15)),

	// blue
	Entry::new(Rgb::new(45, 47, 143), BlockToken::WithVariant(CONCRETE, 11)),
	Entry::new(Rgb::new(70, 73, 167), BlockToken::WithVariant(CONCRETE_POWDER, 11)),
	Entry::new(Rgb::new(74, 60, 91), BlockToken::WithVariant(STAINED_CLAY, 11)),
	Entry::new(Rgb::new(53, 57, 157), BlockToken::WithVariant(WOOL, 11)),

	// brown
	Entry::new(Rgb::new(96, 60, 32), BlockToken::WithVariant(CONCRETE, 12)),
	Entry::new(Rgb::new(126, 85, 54), BlockToken::WithVariant(CONCRETE_POWDER, 12)),
	Entry::new(Rgb::new(77, 51, 36), BlockToken::WithVariant(STAINED_CLAY, 12)),
	Entry::new(Rgb::new(114, 72, 41), BlockToken::WithVariant(WOOL, 12)),

	// cyan
	Entry::new(Rgb::new(21, 119, 136), BlockToken::WithVariant(CONCRETE, 9)),
	Entry::new(Rgb::new(37, 148, 157), BlockToken::WithVariant(CONCRETE_POWDER, 9)),
	Entry::new(Rgb::new(87, 91, 91), BlockToken::WithVariant(STAINED_CLAY, 9)),
	Entry::new(Rgb::new(21, 138, 145), BlockToken::WithVariant(WOOL, 9)),

	// gray
	Entry::new(Rgb::new(55, 58, 62), BlockToken::WithVariant(CONCRETE, 7)),
	Entry::new(Rgb::new(77, 81, 85), BlockToken::WithVariant(CONCRETE_POWDER, 7)),
	Entry::new(Rgb::new(58, 42, 36), BlockToken::WithVariant(STAINED_CLAY, 7)),
	Entry::new(Rgb::new(63, 68, 72), BlockToken::WithVariant(WOOL, 7)),

	// green
	Entry::new(Rgb::new(73, 91, 36), BlockToken::WithVariant(CONCRETE, 13)),
	Entry::new(Rgb::new(97, 119, 45), BlockToken::WithVariant(CONCRETE_POWDER, 13)),
	Entry::new(Rgb::new(76, 83, 42), BlockToken::WithVariant(STAINED_CLAY, 13)),
	Entry::new(Rgb::new(85, 110, 27), BlockToken::WithVariant(WOOL, 13)),

	// light blue
	Entry::new(Rgb::new(36, 137, 199), BlockToken::WithVariant(CONCRETE, 3)),
	Entry::new(Rgb::new(74, 181, 214), BlockToken::WithVariant(CONCRETE_POWDER, 3)),
	Entry::new(Rgb::new(114, 109, 138), BlockToken::WithVariant(STAINED_CLAY, 3)),
	Entry::new(Rgb::new(58, 175, 217), BlockToken::WithVariant(WOOL, 3)),

	// light gray
	Entry::new(Rgb::new(125, 125, 115), BlockToken::WithVariant(CONCRETE, 7)),
	Entry::new(Rgb::new(155, 155, 148), BlockToken::WithVariant(CONCRETE_POWDER, 7)),
	Entry::new(Rgb::new(135, 107, 98), BlockToken::WithVariant(STAINED_CLAY, 7)),
	Entry::new(Rgb::new(142, 142, 135), BlockToken::WithVariant(WOOL, 7)),

	// lime
	Entry::new(Rgb::new(94, 169, 25), BlockToken::WithVariant(CONCRETE, 5)),
	Entry::new(Rgb::new(126, 189, 42), BlockToken::WithVariant(CONCRETE_POWDER, 5)),
	Entry::new(Rgb::new(103, 118, 53), BlockToken::WithVariant(STAINED_CLAY, 5)),
	Entry::new(Rgb::new(112, 185, 26), BlockToken::WithVariant(WOOL, 5)),

	// magenta
	Entry::new(Rgb::new(169, 48, 159), BlockToken::WithVariant(CONCRETE, 2)),
	Entry::new(Rgb::new(193, 84, 185), BlockToken::WithVariant(CONCRETE_POWDER, 2)),
	Entry::new(Rgb::new(150, 88, 109), BlockToken::WithVariant(STAINED_CLAY, 2)),
	Entry::new(Rgb::new(189, 69, 180), BlockToken::WithVariant(WOOL, 2)),

	// orange
	Entry::new(Rgb::new(224, 97, 1), BlockToken::WithVariant(CONCRETE, 1)),
	Entry::new(Rgb::new(227, 132, 32), BlockToken::WithVariant(CONCRETE_POWDER, 1)),
	Entry::new(Rgb::new(162, 84, 38), BlockToken::WithVariant(STAINED_CLAY, 1)),
	Entry::new(Rgb::new(241, 118, 20), BlockToken::WithVariant(WOOL, 1)),

	// pink
	Entry::new(Rgb::new(214, 101, 143), BlockToken::WithVariant(CONCRETE, 6)),
	Entry::new(Rgb::new(229, 154, 181), BlockToken::WithVariant(CONCRETE_POWDER, 6)),
	Entry::new(Rgb::new(162, 78, 79), BlockToken::WithVariant(STAINED_CLAY, 6)),
	Entry::new(Rgb::new(238, 141, 173), BlockToken::WithVariant(WOOL, 6)),

	// purple
	Entry::new(Rgb::new(100, 32, 156), BlockToken::WithVariant(CONCRETE, 10)),
	Entry::new(Rgb::new(132, 56, 178), BlockToken::WithVariant(CONCRETE_POWDER, 10)),
	Entry::new(Rgb::new(118, 70, 86), BlockToken::WithVariant(STAINED_CLAY, 10)),
	Entry::new(Rgb::new(122, 42, 173), BlockToken::WithVariant(WOOL, 10)),

	// red
	Entry::new(Rgb::new(142, 33, 33), BlockToken::WithVariant(CONCRETE, 14)),
	Entry::new(Rgb::new(168, 54, 51), BlockToken::WithVariant(CONCRETE_POWDER, 14)),
	Entry::new(Rgb::new(143, 61, 47), BlockToken::WithVariant(STAINED_CLAY, 14)),
	Entry::new(Rgb::new(161, 39, 35), BlockToken::WithVariant(WOOL, 14)),

	// white
	Entry::new(Rgb::new(207, 213, 214), BlockToken::WithVariant(CONCRETE, 0)),
	Entry::new(Rgb::new(226, 228, 228), BlockToken::WithVariant(CONCRETE_POWDER, 0)),
	Entry::new(Rgb::new(210, 178, 161), BlockToken::WithVariant(STAINED_CLAY, 0)),
	Entry::new(Rgb::new(234, 236, 237), BlockToken::WithVariant(WOOL, 0)),

	// yellow
	Entry::new(Rgb::new(241, 175, 21), BlockToken::WithVariant(CONCRETE, 4)),
	Entry::new(Rgb::new(233, 199, 55), BlockToken::WithVariant(CONCRETE_POWDER, 4)),
	Entry::new(Rgb::new(186, 133, 35), BlockToken::WithVariant(STAINED_CLAY, 4)),
	Entry::new(Rgb::new(249, 198, 40), BlockToken::WithVariant(WOOL, 4)),
];
