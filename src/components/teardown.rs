use crate::components::{AnyStore, ComponentType, ReleaseFn};

struct TeardownEntry {
	bit: usize,
	name: &'static str,
	release: ReleaseFn,
}

/// One release callback per registered [component type](ComponentType), run together at shutdown.
#[derive(Default)]
pub(crate) struct TeardownRegistry {
	entries: Vec<TeardownEntry>,
}

impl TeardownRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, ty: &ComponentType) {
		self.entries.push(TeardownEntry {
			bit: ty.bit(),
			name: ty.name(),
			release: ty.release_fn(),
		});
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Invoke every callback in registration order, then free the registry itself.
	/// Returns the number of stores released.
	pub fn run(&mut self, stores: &mut [Box<dyn AnyStore>]) -> usize {
		let entries = std::mem::take(&mut self.entries);
		let mut released = 0;

		for entry in &entries {
			match stores.get_mut(entry.bit) {
				Some(store) => {
					let dropped = (entry.release)(&mut **store);
					log::debug!("Released `{}` store ({} values)", entry.name, dropped);
					released += 1;
				},
				None => log::warn!("No store found for `{}` during teardown", entry.name),
			}
		}

		released
	}
}
