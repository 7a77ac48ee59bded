//! Lazy assignment of mask bits to [component](Component) types.
//!
//! Bits are handed out by a counter shared by every type registered in the same
//! [registry](crate::entities::EntityRegistry); the first type gets bit 0, the next bit 1, and so on.
//! The counter never goes backwards, so at most [Mask::BITS] types can ever be registered.

use crate::components::{Component, ComponentType};
use crate::error::{EcsError, Result};
use crate::data_structures::Mask;
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use std::any::TypeId;

type Hasher = BuildHasherDefault<NoHashHasher<u64>>;

#[derive(Default)]
pub struct TypeRegistry {
	next_bit: usize,
	types: HashMap<TypeId, ComponentType, Hasher>,
}

impl TypeRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Assign `T` the next free bit.
	/// Returns the type and whether this call registered it.
	pub(crate) fn register<T: Component>(&mut self) -> Result<(ComponentType, bool)> {
		if let Some(ty) = self.types.get(&TypeId::of::<T>()) {
			return Ok((ty.clone(), false));
		}

		if self.next_bit >= Mask::BITS {
			log::error!("Cannot register `{}`: all {} component bits are in use", T::name(), Mask::BITS);
			return Err(EcsError::CapacityExceeded {
				name: T::name(),
				max: Mask::BITS,
			});
		}

		let ty = ComponentType::of::<T>(self.next_bit);
		self.next_bit += 1;
		self.types.insert(TypeId::of::<T>(), ty.clone());
		Ok((ty, true))
	}

	pub fn get<T: Component>(&self) -> Option<&ComponentType> {
		self.types.get(&TypeId::of::<T>())
	}

	/// Same as [TypeRegistry::get], reporting unregistered types as an error.
	pub fn lookup<T: Component>(&self) -> Result<&ComponentType> {
		match self.get::<T>() {
			Some(ty) => Ok(ty),
			None => {
				log::error!("Forgot to register `{}` component first", T::name());
				Err(EcsError::UnregisteredComponent { name: T::name() })
			},
		}
	}

	pub fn mask_of<T: Component>(&self) -> Result<Mask> {
		self.lookup::<T>().map(ComponentType::mask)
	}

	pub fn contains<T: Component>(&self) -> bool {
		self.types.contains_key(&TypeId::of::<T>())
	}

	/// Number of registered types.
	pub fn len(&self) -> usize {
		self.types.len()
	}

	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}

	/// Number of bits still available for new types.
	pub fn remaining(&self) -> usize {
		Mask::BITS - self.next_bit
	}

	pub(crate) fn clear(&mut self) {
		self.types = HashMap::default();
	}
}
