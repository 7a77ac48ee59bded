//! Error kinds reported by the [registry](crate::entities::EntityRegistry) and the system store.

/// Errors that can occur while driving an [EntityRegistry](crate::entities::EntityRegistry).
///
/// Setup mistakes (unregistered types, too many types) are programming errors.
/// They are still returned as values so the top-level driver decides whether to abort.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EcsError {
	/// An entity id past the end of the entity table.
	#[error("entity id {id} is out of range (table holds {len} slots)")]
	OutOfRange { id: usize, len: usize },

	/// Components can only be attached to live entities.
	#[error("entity {id} has been despawned")]
	DeadEntity { id: usize },

	/// A component type was used before being registered.
	#[error("forgot to register `{name}` component first")]
	UnregisteredComponent { name: &'static str },

	/// Every bit of the component mask is already taken.
	#[error("cannot register `{name}`: all {max} component bits are in use")]
	CapacityExceeded { name: &'static str, max: usize },

	/// The entity does not currently carry the requested component.
	#[error("entity {id} has no `{name}` component")]
	ComponentNotPresent { id: usize, name: &'static str },

	#[error("system `{name}` was already added to the current context")]
	DuplicateSystem { name: &'static str },

	#[error("systems have already been initialized")]
	SystemsAlreadyInitialized,

	#[error("systems must be initialized before they can run")]
	SystemsNotInitialized,

	#[error("systems cannot be modified while they are being initialized")]
	SetupInProgress,
}

pub type Result<T> = std::result::Result<T, EcsError>;
