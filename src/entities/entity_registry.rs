use crate::components::{
	AnyStore, Component, ComponentSet, ComponentStore, ComponentType, TeardownRegistry, TypeRegistry,
};
use crate::entities::{Entity, EntityId, EntityTable, Filter, Query};
use crate::error::{EcsError, Result};
use crate::data_structures::Mask;
use crate::config::RegistryConfig;

/// A container for [entities](Entity) and their associated [components](Component).
///
/// Every entity is a slot in a dense table holding its id and the [Mask] of attached components.
/// Each registered component type gets one bit of that mask and one [ComponentStore],
/// where the value of entity `id` lives at position `id`.
pub struct EntityRegistry {
	config: RegistryConfig,
	table: EntityTable,
	types: TypeRegistry,
	stores: Vec<Box<dyn AnyStore>>,
	teardown: TeardownRegistry,
}

/// What [EntityRegistry::deinit] released.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub struct TeardownReport {
	/// Entity slots freed, live or not.
	pub entities: usize,
	/// Recycled ids that were waiting on the free list.
	pub free_ids: usize,
	/// Component stores released through their teardown callback.
	pub stores_released: usize,
}

impl EntityRegistry {
	pub fn new() -> Self {
		Self::with_config(RegistryConfig::default())
	}

	pub fn with_config(config: RegistryConfig) -> Self {
		Self {
			config,
			table: EntityTable::with_capacity(config.initial_capacity),
			types: TypeRegistry::new(),
			stores: Vec::new(),
			teardown: TeardownRegistry::new(),
		}
	}

	pub fn config(&self) -> &RegistryConfig {
		&self.config
	}

	/// Creates a single [entity](Entity) with no [components](Component) attached.
	///
	/// The most recently despawned id is reused first; otherwise the table grows by one slot.
	pub fn spawn(&mut self) -> EntityId {
		let id = self.table.spawn();
		log::trace!("Spawned {:?}", id);
		id
	}

	/// Clears the entity's mask and makes its id available to the next [spawn](EntityRegistry::spawn).
	///
	/// Component values are left in their stores: they become unreachable and are overwritten
	/// by the next [add](EntityRegistry::add) for the same id.
	/// Returns `false` if the entity was already dead.
	pub fn despawn(&mut self, entity: EntityId) -> Result<bool> {
		let despawned = self.table.despawn(entity)?;
		match despawned {
			true => log::trace!("Despawned {:?}", entity),
			false => log::warn!("{:?} has already been despawned", entity),
		}
		Ok(despawned)
	}

	/// Same as [despawn](EntityRegistry::despawn), addressed by raw id.
	pub fn despawn_by_id(&mut self, id: usize) -> Result<bool> {
		self.despawn(EntityId(id))
	}

	/// Gets the table slot for `id`, whether it is currently alive or not.
	pub fn get_by_id(&self, id: usize) -> Result<&Entity> {
		self.table.get(EntityId(id))
	}

	pub fn entity(&self, entity: EntityId) -> Result<&Entity> {
		self.table.get(entity)
	}

	pub fn is_alive(&self, entity: EntityId) -> bool {
		self.table.is_alive(entity)
	}

	/// Number of slots in the entity table, dead ones included.
	pub fn len(&self) -> usize {
		self.table.len()
	}

	pub fn is_empty(&self) -> bool {
		self.table.len() == 0
	}

	pub fn live_count(&self) -> usize {
		self.table.len() - self.table.free_count()
	}

	pub fn free_count(&self) -> usize {
		self.table.free_count()
	}

	/// Ids waiting for reuse, in the order [spawn](EntityRegistry::spawn) will hand them out.
	pub fn free_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
		self.table.free_ids()
	}

	/// Assigns `T` the next free mask bit and creates its store.
	/// Registering the same type again returns the bit it already owns.
	pub fn register<T: Component>(&mut self) -> Result<Mask> {
		let (ty, created) = self.types.register::<T>()?;
		if created {
			debug_assert_eq!(ty.bit(), self.stores.len());
			self.stores.push(Box::new(ComponentStore::<T>::with_capacity(self.config.initial_capacity)));
			self.teardown.push(&ty);
			log::debug!("Registered `{}` as {:?}", ty.name(), ty.mask());
		}

		Ok(ty.mask())
	}

	pub fn is_registered<T: Component>(&self) -> bool {
		self.types.contains::<T>()
	}

	pub fn component_type<T: Component>(&self) -> Result<&ComponentType> {
		self.types.lookup::<T>()
	}

	pub fn registered_count(&self) -> usize {
		self.types.len()
	}

	pub fn types(&self) -> &TypeRegistry {
		&self.types
	}

	/// The combined mask of a set of registered types, e.g. `registry.mask_of::<(Rect, Velocity)>()`.
	pub fn mask_of<S: ComponentSet>(&self) -> Result<Mask> {
		S::mask(&self.types)
	}

	/// Attaches `value` to the entity, replacing the previous value if it already had a `T`.
	pub fn add<T: Component>(&mut self, entity: EntityId, value: T) -> Result<()> {
		let ty = self.types.lookup::<T>()?;
		let (bit, mask) = (ty.bit(), ty.mask());

		let instance = self.table.get_mut(entity)?;
		if !instance.is_alive() {
			return Err(EcsError::DeadEntity { id: entity.0 });
		}

		instance.mask.insert(mask);
		store_mut::<T>(&mut self.stores, bit).insert(entity.0, value);
		Ok(())
	}

	/// Detaches `T` from the entity and returns its value.
	/// Returns `None` if the entity did not have a `T`.
	pub fn remove<T: Component>(&mut self, entity: EntityId) -> Result<Option<T>> {
		let ty = self.types.lookup::<T>()?;
		let (bit, mask) = (ty.bit(), ty.mask());

		let instance = self.table.get_mut(entity)?;
		if !instance.has(mask) {
			return Ok(None);
		}

		instance.mask.remove(mask);
		Ok(store_mut::<T>(&mut self.stores, bit).take(entity.0))
	}

	/// Check if the entity currently carries a `T`.
	pub fn contains<T: Component>(&self, entity: EntityId) -> bool {
		match (self.types.get::<T>(), self.table.get(entity)) {
			(Some(ty), Ok(instance)) => instance.has(ty.mask()),
			_ => false,
		}
	}

	/// Gets a reference to the entity's `T`.
	pub fn get<T: Component>(&self, entity: EntityId) -> Result<&T> {
		let ty = self.types.lookup::<T>()?;
		let instance = self.table.get(entity)?;
		let missing = EcsError::ComponentNotPresent {
			id: entity.0,
			name: ty.name(),
		};

		if !instance.has(ty.mask()) {
			return Err(missing);
		}

		store::<T>(&self.stores, ty.bit()).get(entity.0).ok_or(missing)
	}

	/// Gets a mutable reference to the entity's `T`.
	pub fn get_mut<T: Component>(&mut self, entity: EntityId) -> Result<&mut T> {
		let ty = self.types.lookup::<T>()?;
		let instance = self.table.get(entity)?;
		let missing = EcsError::ComponentNotPresent {
			id: entity.0,
			name: ty.name(),
		};

		if !instance.has(ty.mask()) {
			return Err(missing);
		}

		store_mut::<T>(&mut self.stores, ty.bit()).get_mut(entity.0).ok_or(missing)
	}

	/// `(entity.mask & mask) == mask`.
	#[inline(always)]
	pub fn has(entity: &Entity, mask: Mask) -> bool {
		entity.has(mask)
	}

	/// Iterate the live entities carrying every component in `mask`, in id order.
	pub fn query(&self, mask: Mask) -> Query {
		self.query_filtered(Filter::include(mask))
	}

	/// Iterate the live entities accepted by `filter`, in id order.
	pub fn query_filtered(&self, filter: Filter) -> Query {
		Query::new(self.table.as_slice(), filter)
	}

	/// Collect the ids matched by [query](EntityRegistry::query) so the registry can be mutated while walking them.
	pub fn query_snapshot(&self, mask: Mask) -> Vec<EntityId> {
		self.query(mask).ids().collect()
	}

	/// Yields the entity with the given id if it is alive.
	pub fn query_by_id(&self, id: usize) -> impl Iterator<Item = &Entity> + Clone {
		self.table.as_slice().get(id).filter(|e| e.is_alive()).into_iter()
	}

	/// Releases the entity table, the free list and, through the teardown callbacks, every component store.
	pub fn deinit(mut self) -> TeardownReport {
		let report = self.release();
		log::info!(
			"Registry torn down: {} entity slots, {} free ids, {} component stores",
			report.entities,
			report.free_ids,
			report.stores_released
		);
		report
	}

	fn release(&mut self) -> TeardownReport {
		let (entities, free_ids) = self.table.release();
		log::debug!("Running {} teardown callbacks", self.teardown.len());
		let stores_released = self.teardown.run(&mut self.stores);
		self.stores = Vec::new();
		self.types.clear();

		TeardownReport {
			entities,
			free_ids,
			stores_released,
		}
	}
}

impl Default for EntityRegistry {
	fn default() -> Self {
		Self::new()
	}
}

// Stores are pushed in bit order and only through `register::<T>`, so the store at a type's bit always holds `T`.
fn store<T: Component>(stores: &[Box<dyn AnyStore>], bit: usize) -> &ComponentStore<T> {
	stores[bit]
		.as_any()
		.downcast_ref::<ComponentStore<T>>()
		.unwrap_or_else(|| panic!("Store at bit {} does not hold `{}` values", bit, T::name()))
}

fn store_mut<T: Component>(stores: &mut [Box<dyn AnyStore>], bit: usize) -> &mut ComponentStore<T> {
	stores[bit]
		.as_any_mut()
		.downcast_mut::<ComponentStore<T>>()
		.unwrap_or_else(|| panic!("Store at bit {} does not hold `{}` values", bit, T::name()))
}
