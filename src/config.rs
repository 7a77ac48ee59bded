/// Initial capacity of every growable table, matching the classic dynamic-array default.
pub const DEFAULT_INITIAL_CAPACITY: usize = 256;

/// Construction parameters for an [EntityRegistry](crate::entities::EntityRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
	/// Number of entity slots, free ids and component values reserved up front.
	pub initial_capacity: usize,
}

impl RegistryConfig {
	pub const fn new() -> Self {
		Self {
			initial_capacity: DEFAULT_INITIAL_CAPACITY,
		}
	}

	/// Set the number of slots reserved by the entity table and each component store.
	pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
		self.initial_capacity = initial_capacity;
		self
	}
}

impl Default for RegistryConfig {
	fn default() -> Self {
		Self::new()
	}
}
