use std::any::Any;
use std::iter::repeat_with;

/// A growable sequence holding the value of one component type for every entity that has it.
///
/// The value of entity `id` always lives at position `id`.
/// Positions of entities that never received the component are empty holes.
pub struct ComponentStore<T> {
	values: Vec<Option<T>>,
}

impl<T> ComponentStore<T> {
	pub fn new() -> Self {
		Self::with_capacity(0)
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			values: Vec::with_capacity(capacity),
		}
	}

	/// Store `value` at position `index`, returning the value previously stored there.
	pub fn insert(&mut self, index: usize, value: T) -> Option<T> {
		if index >= self.values.len() {
			let missing = index + 1 - self.values.len();
			self.values.extend(repeat_with(|| None).take(missing));
		}
		self.values[index].replace(value)
	}

	#[inline(always)]
	pub fn get(&self, index: usize) -> Option<&T> {
		self.values.get(index)?.as_ref()
	}

	#[inline(always)]
	pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
		self.values.get_mut(index)?.as_mut()
	}

	pub fn take(&mut self, index: usize) -> Option<T> {
		self.values.get_mut(index)?.take()
	}

	/// Number of positions, holes included.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Number of positions holding a value.
	pub fn occupied(&self) -> usize {
		self.values.iter().filter(|v| v.is_some()).count()
	}

	/// Drop every stored value and free the backing allocation.
	pub fn release(&mut self) -> usize {
		let dropped = self.occupied();
		self.values = Vec::new();
		dropped
	}
}

impl<T> Default for ComponentStore<T> {
	fn default() -> Self {
		Self::new()
	}
}

/// A type-erased [ComponentStore].
pub trait AnyStore: Send {
	fn as_any(&self) -> &dyn Any;
	fn as_any_mut(&mut self) -> &mut dyn Any;
	fn len(&self) -> usize;
}

impl<T: 'static + Send> AnyStore for ComponentStore<T> {
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}

	fn len(&self) -> usize {
		self.values.len()
	}
}
