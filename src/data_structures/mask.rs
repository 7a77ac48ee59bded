use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};
use std::fmt;

/// A fixed-width bit-field recording which component types an entity carries.
///
/// Bit `i` is set when the entity has the component type assigned to bit `i`.
#[derive(Default, Copy, Clone, Hash, Eq, PartialEq)]
pub struct Mask {
	value: u64,
}

impl Mask {
	/// Number of distinct component types a mask can describe.
	pub const BITS: usize = u64::BITS as usize;

	pub const EMPTY: Mask = Mask { value: 0 };

	/// Create a mask with only the bit at index `i` set.
	///
	/// # Arguments
	/// * `i` - The bit position, must be lower than [Mask::BITS]
	#[inline(always)]
	pub const fn bit(i: usize) -> Self {
		debug_assert!(i < Self::BITS);
		Self { value: 1 << i }
	}

	#[inline(always)]
	pub const fn from_bits(value: u64) -> Self {
		Self { value }
	}

	#[inline(always)]
	pub const fn bits(&self) -> u64 {
		self.value
	}

	#[inline(always)]
	pub const fn is_empty(&self) -> bool {
		self.value == 0
	}

	/// Check if every bit of `other` is also set in this mask.
	/// Extra bits in `self` are permitted.
	#[inline(always)]
	pub const fn contains(&self, other: Mask) -> bool {
		(self.value & other.value) == other.value
	}

	/// Check if at least one bit is set in both masks.
	#[inline(always)]
	pub const fn intersects(&self, other: Mask) -> bool {
		(self.value & other.value) != 0
	}

	#[inline(always)]
	pub fn insert(&mut self, other: Mask) {
		self.value |= other.value;
	}

	#[inline(always)]
	pub fn remove(&mut self, other: Mask) {
		self.value &= !other.value;
	}

	pub fn clear(&mut self) {
		self.value = 0;
	}

	/// Number of set bits.
	pub const fn count(&self) -> usize {
		self.value.count_ones() as usize
	}

	/// Iterate over the positions of the set bits, lowest first.
	pub fn iter(&self) -> MaskIterator {
		MaskIterator { remaining: self.value }
	}
}

impl From<u64> for Mask {
	fn from(value: u64) -> Self {
		Self::from_bits(value)
	}
}

impl From<Mask> for u64 {
	fn from(mask: Mask) -> Self {
		mask.value
	}
}

impl BitOr for Mask {
	type Output = Mask;
	fn bitor(self, rhs: Self) -> Self::Output {
		Mask { value: self.value | rhs.value }
	}
}

impl BitOrAssign for Mask {
	fn bitor_assign(&mut self, rhs: Self) {
		self.value |= rhs.value;
	}
}

impl BitAnd for Mask {
	type Output = Mask;
	fn bitand(self, rhs: Self) -> Self::Output {
		Mask { value: self.value & rhs.value }
	}
}

impl BitAndAssign for Mask {
	fn bitand_assign(&mut self, rhs: Self) {
		self.value &= rhs.value;
	}
}

impl Not for Mask {
	type Output = Mask;
	fn not(self) -> Self::Output {
		Mask { value: !self.value }
	}
}

impl fmt::Debug for Mask {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Mask({:#b})", self.value)
	}
}

/// Iterates over the set bit positions of a [Mask].
pub struct MaskIterator {
	remaining: u64,
}

impl Iterator for MaskIterator {
	type Item = usize;

	fn next(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 {
			return None;
		}

		let bit = self.remaining.trailing_zeros() as usize;
		self.remaining &= self.remaining - 1;
		Some(bit)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let count = self.remaining.count_ones() as usize;
		(count, Some(count))
	}
}

impl ExactSizeIterator for MaskIterator {}
