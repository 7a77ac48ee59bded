//! [Systems](System) provide the logic for modifying the state of [Entities](crate::entities::Entity)
//! and their associated [Components](crate::components::Component).
//!
//! A [System] must be manually added to an [EcsContext](crate::context::EcsContext)
//! for it to become active. Systems run in the order they were added, once per tick.

mod system;
mod system_store;

pub use system::*;
pub(crate) use system_store::*;
