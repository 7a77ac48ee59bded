use crate::entities::EntityRegistry;
use crate::error::{EcsError, Result};
use std::collections::HashSet;
use crate::systems::System;
use std::any::{type_name, TypeId};

/// The ordered list of passes run by an [EcsContext](crate::context::EcsContext).
pub(crate) struct SystemStore {
	state: State,
	set: HashSet<TypeId>,
	systems: Vec<Box<dyn System>>,
}

#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
enum State {
	#[default]
	Uninitialized,
	Initializing,
	Initialized,
}

impl SystemStore {
	pub fn new() -> Self {
		Self {
			set: HashSet::default(),
			state: State::default(),
			systems: Vec::default(),
		}
	}

	pub fn len(&self) -> usize {
		self.systems.len()
	}

	pub fn is_initialized(&self) -> bool {
		self.state == State::Initialized
	}

	pub fn add_system<T: System>(&mut self, system: T) -> Result<()> {
		match self.state {
			State::Uninitialized => {
				if !self.set.insert(TypeId::of::<T>()) {
					return Err(EcsError::DuplicateSystem { name: type_name::<T>() });
				}
				log::debug!("Added system `{}`", type_name::<T>());
				self.systems.push(Box::new(system));
				Ok(())
			},
			State::Initializing => Err(EcsError::SetupInProgress),
			State::Initialized => Err(EcsError::SystemsAlreadyInitialized),
		}
	}

	pub fn setup_systems(&mut self, registry: &mut EntityRegistry) -> Result<()> {
		match self.state {
			State::Uninitialized => {
				self.state = State::Initializing;
				let result = self.systems.iter_mut().try_for_each(|s| s.setup(registry));
				self.state = match result {
					Ok(_) => State::Initialized,
					Err(_) => State::Uninitialized,
				};
				result
			},
			State::Initializing => Err(EcsError::SetupInProgress),
			State::Initialized => Err(EcsError::SystemsAlreadyInitialized),
		}
	}

	/// Run every system once, in insertion order, stopping at the first failure.
	pub fn run_systems(&mut self, registry: &mut EntityRegistry) -> Result<()> {
		match self.state {
			State::Uninitialized | State::Initializing => Err(EcsError::SystemsNotInitialized),
			State::Initialized => self.systems.iter_mut().try_for_each(|s| s.run(registry)),
		}
	}
}
