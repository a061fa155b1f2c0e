//! Restricts which palette entries a color may be matched against.
use crate::table::{CONCRETE, STAINED_CLAY, WOOL};
use fxhash::FxHashSet;
use schematic::BlockToken;

/// Accepts tokens by block id, ignoring the data value.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum IdFilter {
	/// No restriction.
	All,
	/// Only the listed block ids.
	Only(FxHashSet<u8>),
}

impl IdFilter {
	pub fn all() -> Self {
		IdFilter::All
	}

	pub fn only(ids: &[u8]) -> Self {
		IdFilter::Only(ids.iter().copied().collect())
	}

	/// Stained clay, concrete, and wool: the blocks that come in every dye color.
	pub fn wool_and_terracotta() -> Self {
		IdFilter::only(&[STAINED_CLAY, WOOL, CONCRETE])
	}

	pub fn matches(&self, token: &BlockToken) -> bool {
		match *self {
			IdFilter::All => true,
			IdFilter::Only(ref ids) => ids.contains(&token.id()),
		}
	}
}

impl Default for IdFilter {
	fn default() -> Self {
		IdFilter::All
	}
}

#[cfg(test)]
mod test {
	use super::IdFilter;
	use schematic::BlockToken;

	#[test]
	fn test_all_and_empty() {
		let token = BlockToken::WithVariant(35, 3);

		assert!(IdFilter::all().matches(&token));
		assert!(!IdFilter::only(&[]).matches(&token));
	}

	#[test]
	fn test_ignores_variant() {
		let filter = IdFilter::only(&[35]);

		assert!(filter.matches(&BlockToken::Bare(35)));
		assert!(filter.matches(&BlockToken::WithVariant(35, 14)));
		assert!(!filter.matches(&BlockToken::WithVariant(251, 14)));
	}

	#[test]
	fn test_wool_and_terracotta() {
		let filter = IdFilter::wool_and_terracotta();

		assert!(filter.matches(&BlockToken::WithVariant(159, 0)));
		assert!(filter.matches(&BlockToken::WithVariant(35, 0)));
		assert!(filter.matches(&BlockToken::WithVariant(251, 0)));
		assert!(!filter.matches(&BlockToken::WithVariant(252, 0)));
		assert!(!filter.matches(&BlockToken::Bare(172)));
	}
}
