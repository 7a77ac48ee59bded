//! A process-wide [EntityRegistry], created on first use.
//!
//! Every access goes through one lock, so structural changes and queries never overlap.
//! Calling [with] from inside the closure passed to [with] deadlocks.

use crate::entities::{EntityRegistry, TeardownReport};
use lazy_static::lazy_static;
use parking_lot::Mutex;

lazy_static! {
	static ref GLOBAL_REGISTRY: Mutex<Option<EntityRegistry>> = Mutex::new(None);
}

/// Run `func` against the process-wide registry, creating it if needed.
pub fn with<R>(func: impl FnOnce(&mut EntityRegistry) -> R) -> R {
	let mut guard = GLOBAL_REGISTRY.lock();
	let registry = guard.get_or_insert_with(|| {
		log::debug!("Initializing the global registry");
		EntityRegistry::new()
	});
	func(registry)
}

pub fn is_initialized() -> bool {
	GLOBAL_REGISTRY.lock().is_some()
}

/// Tear the process-wide registry down.
///
/// Returns `None` if it was never created or has already been torn down.
/// A later call to [with] starts over with an empty registry.
pub fn deinit() -> Option<TeardownReport> {
	let registry = GLOBAL_REGISTRY.lock().take();
	registry.map(EntityRegistry::deinit)
}
