use crate::entities::EntityRegistry;
use crate::error::Result;

/// A processing pass run once per tick.
///
/// It provides the logic for modifying the state of [Entities](crate::entities::Entity)
/// and their associated [Components](crate::components::Component).
pub trait System: 'static {
	/// Initialises the [System], typically by registering the component types it uses.
	/// **This function should not be called by user code.**
	fn setup(&mut self, _registry: &mut EntityRegistry) -> Result<()> {
		Ok(())
	}

	/// Executes the system.
	fn run(&mut self, registry: &mut EntityRegistry) -> Result<()>;
}
