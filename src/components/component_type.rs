use crate::components::{AnyStore, ComponentStore};
use crate::data_structures::Mask;
use std::fmt;

/// Data attached to an [entity](crate::entities::Entity).
///
/// Usually implemented through `#[derive(Component)]`, which also reports the type's short name.
pub trait Component: 'static + Send {
	/// A human-readable name used in diagnostics.
	fn name() -> &'static str {
		std::any::type_name::<Self>()
	}
}

/// Releases the backing memory of a type-erased [ComponentStore] and returns the number of values dropped.
pub type ReleaseFn = fn(&mut dyn AnyStore) -> usize;

/// A runtime representation of a registered [`Component`] type.
#[derive(Clone)]
pub struct ComponentType {
	bit: usize,
	name: &'static str,
	release: ReleaseFn,
}

impl ComponentType {
	pub(crate) fn of<T: Component>(bit: usize) -> Self {
		Self {
			bit,
			name: T::name(),
			release: release_store::<T>,
		}
	}

	/// The bit position assigned to the type.
	pub const fn bit(&self) -> usize {
		self.bit
	}

	pub const fn mask(&self) -> Mask {
		Mask::bit(self.bit)
	}

	pub const fn name(&self) -> &'static str {
		self.name
	}

	pub fn release_fn(&self) -> ReleaseFn {
		self.release
	}
}

impl fmt::Debug for ComponentType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ComponentType").field("bit", &self.bit).field("name", &self.name).finish()
	}
}

impl Eq for ComponentType {}

impl PartialEq<Self> for ComponentType {
	fn eq(&self, other: &Self) -> bool {
		self.bit == other.bit
	}
}

fn release_store<T: Component>(store: &mut dyn AnyStore) -> usize {
	match store.as_any_mut().downcast_mut::<ComponentStore<T>>() {
		Some(store) => store.release(),
		None => 0,
	}
}
