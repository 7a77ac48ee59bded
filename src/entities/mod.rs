//! [Entities](Entity) represent the individual "things" in your simulation.
//!
//! An [Entity] doesn't store any data and has no associated behaviour;
//! it is an id plus a [mask](crate::data_structures::Mask) saying which
//! [components](crate::components::Component) belong to it.

mod entity_query;
mod entity_table;
mod entity_registry;
mod entity_instance;

pub use entity_query::*;
pub use entity_registry::*;
pub use entity_instance::*;

pub(crate) use entity_table::*;
