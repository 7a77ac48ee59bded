use crate::entities::{Entity, EntityId};
use crate::data_structures::FreeList;
use crate::error::{EcsError, Result};

/// The entity slots and the ids available for reuse.
pub(crate) struct EntityTable {
	entities: Vec<Entity>,
	free: FreeList,
}

impl EntityTable {
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			entities: Vec::with_capacity(capacity),
			free: FreeList::with_capacity(capacity),
		}
	}

	/// Reuse the most recently freed slot, or append a new one.
	pub fn spawn(&mut self) -> EntityId {
		match self.free.pop() {
			Some(index) => {
				let entity = &mut self.entities[index];
				debug_assert!(!entity.alive && entity.mask.is_empty());
				entity.alive = true;
				entity.id
			},
			None => {
				let id = EntityId(self.entities.len());
				self.entities.push(Entity::new(id));
				id
			},
		}
	}

	/// Clear the slot's mask and hand its id to the free list.
	/// Returns `false` if the slot was already dead.
	pub fn despawn(&mut self, id: EntityId) -> Result<bool> {
		let len = self.entities.len();
		let entity = self.entities.get_mut(id.0).ok_or(EcsError::OutOfRange { id: id.0, len })?;

		if !entity.alive {
			return Ok(false);
		}

		entity.mask.clear();
		entity.alive = false;
		self.free.push(id.0);
		Ok(true)
	}

	pub fn get(&self, id: EntityId) -> Result<&Entity> {
		self.entities.get(id.0).ok_or(EcsError::OutOfRange {
			id: id.0,
			len: self.entities.len(),
		})
	}

	pub fn get_mut(&mut self, id: EntityId) -> Result<&mut Entity> {
		let len = self.entities.len();
		self.entities.get_mut(id.0).ok_or(EcsError::OutOfRange { id: id.0, len })
	}

	pub fn is_alive(&self, id: EntityId) -> bool {
		self.entities.get(id.0).map_or(false, Entity::is_alive)
	}

	#[inline(always)]
	pub fn as_slice(&self) -> &[Entity] {
		&self.entities
	}

	pub fn len(&self) -> usize {
		self.entities.len()
	}

	pub fn free_count(&self) -> usize {
		self.free.len()
	}

	pub fn free_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
		self.free.iter().map(EntityId)
	}

	/// Free the table and free list backing memory.
	/// Returns the number of slots and free ids released.
	pub fn release(&mut self) -> (usize, usize) {
		let slots = self.entities.len();
		self.entities = Vec::new();
		(slots, self.free.release())
	}
}
