use crate::entities::{EntityRegistry, TeardownReport};
use crate::systems::{System, SystemStore};
use crate::config::RegistryConfig;
use std::ops::{Deref, DerefMut};
use crate::error::Result;

/// A container for an [EntityRegistry] and the systems driving it.
///
/// The context dereferences to its registry, so entities and components
/// can be manipulated directly through it.
pub struct EcsContext {
	registry: EntityRegistry,
	system_store: SystemStore,
}

impl EcsContext {
	pub fn new() -> Self {
		Self::with_config(RegistryConfig::default())
	}

	pub fn with_config(config: RegistryConfig) -> Self {
		Self {
			registry: EntityRegistry::with_config(config),
			system_store: SystemStore::new(),
		}
	}

	/// Add a new [system](System) to the [EcsContext].
	/// Systems can only be added before [setup_systems](EcsContext::setup_systems) is called.
	pub fn register_system<T: System>(&mut self, system: T) -> Result<()> {
		self.system_store.add_system(system)
	}

	/// Initialize all [systems](System).
	/// Must be called before any system can be run.
	pub fn setup_systems(&mut self) -> Result<()> {
		self.system_store.setup_systems(&mut self.registry)
	}

	/// Execute all [systems](System) once, in the order they were added.
	pub fn run_systems(&mut self) -> Result<()> {
		self.system_store.run_systems(&mut self.registry)
	}

	pub fn system_count(&self) -> usize {
		self.system_store.len()
	}

	pub fn systems_initialized(&self) -> bool {
		self.system_store.is_initialized()
	}

	pub fn registry(&self) -> &EntityRegistry {
		&self.registry
	}

	pub fn registry_mut(&mut self) -> &mut EntityRegistry {
		&mut self.registry
	}

	/// Drop the systems and tear the registry down.
	pub fn deinit(self) -> TeardownReport {
		self.registry.deinit()
	}
}

impl Default for EcsContext {
	fn default() -> Self {
		Self::new()
	}
}

impl Deref for EcsContext {
	type Target = EntityRegistry;

	#[inline(always)]
	fn deref(&self) -> &Self::Target {
		&self.registry
	}
}

impl DerefMut for EcsContext {
	#[inline(always)]
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.registry
	}
}
