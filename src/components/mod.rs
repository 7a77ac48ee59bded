//! [Components](Component) are the pieces of data attached to [entities](crate::entities::Entity).
//!
//! Each registered type owns one bit of the entity [mask](crate::data_structures::Mask)
//! and one [ComponentStore] indexed by entity id.

mod teardown;
mod component_set;
mod type_registry;
mod component_type;
mod component_store;

pub use component_set::*;
pub use type_registry::*;
pub use component_type::*;
pub use component_store::*;
pub use bitmask_ecs_derive::Component;

pub(crate) use teardown::*;
