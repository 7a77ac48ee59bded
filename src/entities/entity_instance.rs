use crate::data_structures::Mask;
use std::fmt;

/// A lightweight handle to an [Entity] slot.
#[derive(Default, Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct EntityId(pub(crate) usize);

impl EntityId {
	pub const fn new(index: usize) -> Self {
		Self(index)
	}

	#[inline(always)]
	pub const fn index(&self) -> usize {
		self.0
	}
}

impl From<usize> for EntityId {
	fn from(index: usize) -> Self {
		Self(index)
	}
}

impl fmt::Debug for EntityId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Entity({})", self.0)
	}
}

impl fmt::Display for EntityId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// An entry of the entity table.
///
/// `id` never changes once the slot has been created; `mask` records which
/// [components](crate::components::Component) are currently attached and is reset on despawn.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entity {
	pub(crate) id: EntityId,
	pub(crate) mask: Mask,
	pub(crate) alive: bool,
}

impl Entity {
	pub(crate) fn new(id: EntityId) -> Self {
		Self {
			id,
			mask: Mask::EMPTY,
			alive: true,
		}
	}

	#[inline(always)]
	pub fn id(&self) -> EntityId {
		self.id
	}

	#[inline(always)]
	pub fn mask(&self) -> Mask {
		self.mask
	}

	#[inline(always)]
	pub fn is_alive(&self) -> bool {
		self.alive
	}

	/// Check if the entity carries every component in `mask`.
	#[inline(always)]
	pub fn has(&self, mask: Mask) -> bool {
		has(self, mask)
	}
}

/// `(entity.mask & mask) == mask`: the entity must have every requested bit, extra bits are permitted.
#[inline(always)]
pub fn has(entity: &Entity, mask: Mask) -> bool {
	entity.mask.contains(mask)
}
