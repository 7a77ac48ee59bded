use crate::entities::{Entity, EntityId};
use crate::data_structures::Mask;
use std::slice::Iter;

/// Defines the set of [components](crate::components::Component) an [entity](Entity) must or must not include.
#[derive(Default, Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct Filter {
	include: Mask,
	exclude: Mask,
}

impl Filter {
	pub const fn new() -> Self {
		Self {
			include: Mask::EMPTY,
			exclude: Mask::EMPTY,
		}
	}

	/// A filter matching entities that carry every component in `mask`.
	pub const fn include(mask: Mask) -> Self {
		Self {
			include: mask,
			exclude: Mask::EMPTY,
		}
	}

	/// Also reject entities carrying any component in `mask`.
	pub const fn exclude(self, mask: Mask) -> Self {
		Self {
			include: self.include,
			exclude: Mask::from_bits(self.exclude.bits() | mask.bits()),
		}
	}

	pub const fn included(&self) -> Mask {
		self.include
	}

	pub const fn excluded(&self) -> Mask {
		self.exclude
	}

	#[inline(always)]
	pub fn matches(&self, entity: &Entity) -> bool {
		entity.is_alive() && entity.has(self.include) && !entity.mask().intersects(self.exclude)
	}
}

/// A lazy scan of the entity table in id order, yielding the live entities matching a [Filter].
///
/// The query borrows the registry, so entities cannot be spawned, despawned or modified while it is alive.
/// Clone a query before consuming it to walk the same matches again.
#[derive(Clone)]
pub struct Query<'l> {
	entities: Iter<'l, Entity>,
	filter: Filter,
}

impl<'l> Query<'l> {
	pub(crate) fn new(entities: &'l [Entity], filter: Filter) -> Self {
		Self {
			entities: entities.iter(),
			filter,
		}
	}

	/// Yield the ids of the matching entities instead of the entities themselves.
	pub fn ids(self) -> impl Iterator<Item = EntityId> + Clone + 'l {
		self.map(Entity::id)
	}
}

impl<'l> Iterator for Query<'l> {
	type Item = &'l Entity;

	fn next(&mut self) -> Option<Self::Item> {
		let filter = self.filter;
		self.entities.by_ref().find(|e| filter.matches(e))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(0, self.entities.size_hint().1)
	}
}
