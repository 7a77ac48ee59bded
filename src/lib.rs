extern crate self as bitmask_ecs;

pub mod data_structures;
pub mod components;
pub mod entities;
pub mod systems;
pub mod global;
mod context;
mod config;
mod error;

pub use config::*;
pub use error::{EcsError, Result};

pub mod prelude {
	pub use crate::systems::*;
	pub use crate::components::{Component, ComponentSet, ComponentType};
	pub use crate::context::EcsContext;
	pub use crate::config::RegistryConfig;
	pub use crate::data_structures::Mask;
	pub use crate::error::{EcsError, Result};
	pub use crate::entities::{has, Entity, EntityId, EntityRegistry, Filter, Query, TeardownReport};
}

#[cfg(test)]
mod tests;
