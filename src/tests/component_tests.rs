use crate::entities::{EntityId, EntityRegistry};
use crate::components::Component;
use crate::data_structures::Mask;
use crate::error::EcsError;
use rand::prelude::SliceRandom;
use rand::thread_rng;

#[derive(Component, Default, Debug, Copy, Clone, PartialEq)]
struct Position {
	x: i32,
	y: i32,
}

#[derive(Component, Default, Debug, Copy, Clone, PartialEq)]
struct Velocity {
	dx: i32,
	dy: i32,
}

#[derive(Component, Debug, Clone, PartialEq)]
struct Renderable(char);

#[derive(Component)]
struct Tag<const N: usize>;

#[test]
pub fn register_is_idempotent() {
	let mut registry = EntityRegistry::new();

	let first = registry.register::<Position>().unwrap();
	let second = registry.register::<Position>().unwrap();

	assert_eq!(first, second);
	assert_eq!(first, Mask::bit(0));
	assert_eq!(registry.registered_count(), 1);
	assert!(registry.is_registered::<Position>());
	assert!(!registry.is_registered::<Velocity>());
}

#[test]
pub fn bits_follow_registration_order() {
	let mut registry = EntityRegistry::new();

	let velocity = registry.register::<Velocity>().unwrap();
	let position = registry.register::<Position>().unwrap();
	let renderable = registry.register::<Renderable>().unwrap();

	assert_eq!(velocity.bits(), 1);
	assert_eq!(position.bits(), 2);
	assert_eq!(renderable.bits(), 4);
	assert_eq!(registry.mask_of::<(Position, Renderable)>().unwrap().bits(), 6);
	assert_eq!(registry.component_type::<Renderable>().unwrap().bit(), 2);
	assert_eq!(registry.component_type::<Renderable>().unwrap().name(), "Renderable");
}

#[test]
pub fn capacity_is_reported() {
	let mut registry = EntityRegistry::new();

	macro_rules! register_tags {
		($($n: literal)*) => {
			$(registry.register::<Tag<$n>>().unwrap();)*
		};
	}

	register_tags!(
		0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31
		32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63
	);

	assert_eq!(registry.registered_count(), Mask::BITS);
	assert_eq!(registry.types().remaining(), 0);
	assert_eq!(registry.mask_of::<(Tag<63>,)>().unwrap(), Mask::bit(63));

	let result = registry.register::<Position>();
	assert_eq!(result, Err(EcsError::CapacityExceeded { name: "Position", max: 64 }));
	assert!(!registry.is_registered::<Position>());

	// Already registered types are still resolved.
	assert_eq!(registry.register::<Tag<0>>(), Ok(Mask::bit(0)));
}

#[test]
pub fn add_then_get() {
	let mut registry = EntityRegistry::new();
	registry.register::<Position>().unwrap();
	registry.register::<Velocity>().unwrap();

	let entity = registry.spawn();
	registry.add(entity, Position { x: 3, y: 4 }).unwrap();
	registry.add(entity, Velocity { dx: 1, dy: 0 }).unwrap();

	assert_eq!(registry.get::<Position>(entity), Ok(&Position { x: 3, y: 4 }));
	assert_eq!(registry.get::<Velocity>(entity), Ok(&Velocity { dx: 1, dy: 0 }));
	assert_eq!(registry.entity(entity).unwrap().mask().bits(), 3);

	registry.get_mut::<Position>(entity).unwrap().x += 10;
	assert_eq!(registry.get::<Position>(entity).unwrap().x, 13);

	registry.add(entity, Position { x: -1, y: -1 }).unwrap();
	assert_eq!(registry.get::<Position>(entity), Ok(&Position { x: -1, y: -1 }));
}

#[test]
pub fn unregistered_component_is_rejected() {
	let mut registry = EntityRegistry::new();
	let entity = registry.spawn();

	let result = registry.add(entity, Renderable('@'));
	assert_eq!(result, Err(EcsError::UnregisteredComponent { name: "Renderable" }));
	assert_eq!(registry.entity(entity).unwrap().mask(), Mask::EMPTY);
	assert!(registry.get::<Renderable>(entity).is_err());
	assert!(registry.mask_of::<(Renderable,)>().is_err());
}

#[test]
pub fn missing_component_is_reported() {
	let mut registry = EntityRegistry::new();
	registry.register::<Position>().unwrap();
	registry.register::<Velocity>().unwrap();

	let entity = registry.spawn();
	registry.add(entity, Position::default()).unwrap();

	assert_eq!(
		registry.get::<Velocity>(entity),
		Err(EcsError::ComponentNotPresent { id: 0, name: "Velocity" })
	);
	assert!(!registry.contains::<Velocity>(entity));
	assert!(registry.contains::<Position>(entity));
	assert!(matches!(
		registry.get::<Position>(EntityId::new(9)),
		Err(EcsError::OutOfRange { id: 9, .. })
	));
}

#[test]
pub fn despawn_hides_stale_values() {
	let mut registry = EntityRegistry::new();
	registry.register::<Position>().unwrap();

	let entity = registry.spawn();
	registry.add(entity, Position { x: 1, y: 1 }).unwrap();
	registry.despawn(entity).unwrap();

	assert!(matches!(registry.get::<Position>(entity), Err(EcsError::ComponentNotPresent { .. })));
	assert_eq!(registry.add(entity, Position::default()), Err(EcsError::DeadEntity { id: 0 }));

	let respawned = registry.spawn();
	assert_eq!(respawned, entity);
	assert!(registry.get::<Position>(respawned).is_err(), "A recycled id must start without components");

	registry.add(respawned, Position { x: 2, y: 2 }).unwrap();
	assert_eq!(registry.get::<Position>(respawned), Ok(&Position { x: 2, y: 2 }));
}

#[test]
pub fn values_follow_ids_in_any_order() {
	let mut registry = EntityRegistry::new();
	registry.register::<Position>().unwrap();
	registry.register::<Velocity>().unwrap();

	let mut entities = (0..32).map(|_| registry.spawn()).collect::<Vec<_>>();
	for entity in entities.iter().step_by(3) {
		registry.despawn(*entity).unwrap();
	}
	entities.retain(|e| registry.is_alive(*e));
	let recycled = (0..6).map(|_| registry.spawn()).collect::<Vec<_>>();
	entities.extend(recycled);
	entities.shuffle(&mut thread_rng());

	for entity in &entities {
		let i = entity.index() as i32;
		registry.add(*entity, Position { x: i, y: -i }).unwrap();
		if i % 2 == 0 {
			registry.add(*entity, Velocity { dx: i, dy: i }).unwrap();
		}
	}

	for entity in &entities {
		let i = entity.index() as i32;
		assert_eq!(registry.get::<Position>(*entity), Ok(&Position { x: i, y: -i }));
		match i % 2 {
			0 => assert_eq!(registry.get::<Velocity>(*entity), Ok(&Velocity { dx: i, dy: i })),
			_ => assert!(registry.get::<Velocity>(*entity).is_err()),
		}
	}
}

#[test]
pub fn remove_detaches_the_component() {
	let mut registry = EntityRegistry::new();
	registry.register::<Renderable>().unwrap();

	let entity = registry.spawn();
	registry.add(entity, Renderable('o')).unwrap();

	assert_eq!(registry.remove::<Renderable>(entity), Ok(Some(Renderable('o'))));
	assert_eq!(registry.remove::<Renderable>(entity), Ok(None));
	assert!(!registry.contains::<Renderable>(entity));
	assert!(registry.is_alive(entity));
}
