use crate::entities::{EntityRegistry, TeardownReport};
use std::sync::atomic::{AtomicUsize, Ordering};
use crate::components::Component;
use crate::RegistryConfig;
use std::sync::Arc;

#[derive(Component)]
struct Tracked(Arc<AtomicUsize>);

impl Drop for Tracked {
	fn drop(&mut self) {
		self.0.fetch_add(1, Ordering::SeqCst);
	}
}

#[derive(Component, Default)]
struct Marker;

#[test]
pub fn deinit_releases_everything() {
	let drops = Arc::new(AtomicUsize::new(0));
	let mut registry = EntityRegistry::with_config(RegistryConfig::new().with_initial_capacity(4));
	registry.register::<Tracked>().unwrap();
	registry.register::<Marker>().unwrap();

	let ids = (0..6).map(|_| registry.spawn()).collect::<Vec<_>>();
	for id in &ids {
		registry.add(*id, Tracked(drops.clone())).unwrap();
	}
	registry.add(ids[0], Marker).unwrap();
	registry.despawn(ids[3]).unwrap();
	registry.despawn(ids[4]).unwrap();

	assert_eq!(drops.load(Ordering::SeqCst), 0, "Despawn must not drop component values");

	let report = registry.deinit();
	assert_eq!(
		report,
		TeardownReport {
			entities: 6,
			free_ids: 2,
			stores_released: 2,
		}
	);
	assert_eq!(drops.load(Ordering::SeqCst), 6, "Every stored value, stale ones included, is released");
}

#[test]
pub fn teardown_callback_is_not_duplicated() {
	let mut registry = EntityRegistry::new();
	for _ in 0..3 {
		registry.register::<Marker>().unwrap();
	}

	assert_eq!(registry.deinit().stores_released, 1);
}

#[test]
pub fn overwritten_values_are_dropped() {
	let drops = Arc::new(AtomicUsize::new(0));
	let mut registry = EntityRegistry::new();
	registry.register::<Tracked>().unwrap();

	let id = registry.spawn();
	registry.add(id, Tracked(drops.clone())).unwrap();
	registry.add(id, Tracked(drops.clone())).unwrap();
	assert_eq!(drops.load(Ordering::SeqCst), 1);

	drop(registry.remove::<Tracked>(id).unwrap());
	assert_eq!(drops.load(Ordering::SeqCst), 2);

	registry.deinit();
	assert_eq!(drops.load(Ordering::SeqCst), 2);
}

#[test]
pub fn empty_registry_teardown() {
	let registry = EntityRegistry::default();
	assert_eq!(registry.deinit(), TeardownReport::default());
}
