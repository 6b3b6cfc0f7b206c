//! End-to-end checks that filters stay exact through entity churn.

use ember_ecs::{EcsError, Entity, FilterId, FilterSpec, World};

#[derive(Debug, Default, PartialEq)]
struct Position {
    x: f32,
    y: f32,
}

#[derive(Debug, Default, PartialEq)]
struct Velocity {
    dx: f32,
    dy: f32,
}

#[derive(Debug, PartialEq)]
struct Health(i32);

struct Frozen;

fn filter_contains(world: &World, filter: FilterId, entity: Entity) -> bool {
    world.filter_entities(filter).any(|e| e == entity)
}

#[test]
fn test_removing_required_component_drops_entity_from_filter() {
    let mut world = World::new();
    let e1 = world.create_entity();
    let e2 = world.create_entity();
    for entity in [e1, e2] {
        world.add_component(entity, Position::default()).unwrap();
        world.add_component(entity, Velocity::default()).unwrap();
    }

    let moving = world.create_filter(FilterSpec::new().with::<Position>().with::<Velocity>());
    assert!(filter_contains(&world, moving, e1));
    assert!(filter_contains(&world, moving, e2));

    world.remove_component::<Velocity>(e1);
    assert!(!filter_contains(&world, moving, e1));
    assert!(filter_contains(&world, moving, e2));

    // e1 lost its filter membership, not its life or its other data.
    assert!(world.is_alive(e1));
    assert!(world.get_component::<Position>(e1).is_ok());
}

#[test]
fn test_destroy_evicts_from_every_filter() {
    let mut world = World::new();
    let doomed = world.create_entity();
    let bystander = world.create_entity();
    for entity in [doomed, bystander] {
        world.add_component(entity, Position::default()).unwrap();
        world.add_component(entity, Health(10)).unwrap();
    }

    let positioned = world.create_filter(FilterSpec::new().with::<Position>());
    let mortal = world.create_filter(FilterSpec::new().with::<Health>());

    world.destroy_entity(doomed);

    assert!(!filter_contains(&world, positioned, doomed));
    assert!(!filter_contains(&world, mortal, doomed));
    assert!(filter_contains(&world, positioned, bystander));
    assert!(filter_contains(&world, mortal, bystander));
}

#[test]
fn test_destroyed_id_returns_with_next_generation() {
    let mut world = World::new();
    let first = world.create_entity();
    world
        .add_component(first, Position { x: 1.0, y: 1.0 })
        .unwrap();
    world.destroy_entity(first);

    let second = world.create_entity();
    assert_eq!(second.id(), first.id());
    assert_eq!(second.generation(), first.generation() + 1);
    assert!(world.is_alive(second));
    assert!(!world.is_alive(first));

    // The stale handle cannot reach the successor's slot.
    assert!(matches!(
        world.get_component::<Position>(first),
        Err(EcsError::EntityDead(_))
    ));
}

#[test]
fn test_filter_stays_current_through_mutations() {
    let mut world = World::new();
    let chilled = world.create_filter(
        FilterSpec::new()
            .with::<Position>()
            .with::<Velocity>()
            .without::<Frozen>(),
    );
    let entity = world.create_entity();

    world.add_component(entity, Position::default()).unwrap();
    assert!(!filter_contains(&world, chilled, entity));

    world.add_component(entity, Velocity::default()).unwrap();
    assert!(filter_contains(&world, chilled, entity));

    world.add_component(entity, Frozen).unwrap();
    assert!(!filter_contains(&world, chilled, entity));

    world.remove_component::<Frozen>(entity);
    assert!(filter_contains(&world, chilled, entity));

    world.remove_component::<Velocity>(entity);
    assert!(!filter_contains(&world, chilled, entity));

    world.add_component(entity, Velocity::default()).unwrap();
    assert!(filter_contains(&world, chilled, entity));

    world.destroy_entity(entity);
    assert_eq!(world.filter_entities(chilled).count(), 0);
}

#[test]
fn test_empty_spec_tracks_entities_through_mutations() {
    let mut world = World::new();
    let veteran = world.create_entity();

    // Alive at construction: seeded by the one-time scan.
    let everyone = world.create_filter(FilterSpec::new());
    assert!(filter_contains(&world, everyone, veteran));

    // Created afterwards: joins only once a component changes.
    let newcomer = world.create_entity();
    assert!(!filter_contains(&world, everyone, newcomer));
    world.add_component(newcomer, Position::default()).unwrap();
    assert!(filter_contains(&world, everyone, newcomer));

    world.destroy_entity(veteran);
    assert!(!filter_contains(&world, everyone, veteran));
}

#[test]
fn test_filter_created_mid_simulation_seeds_current_state() {
    let mut world = World::new();

    let mut movers = Vec::new();
    for i in 0..8 {
        let entity = world.create_entity();
        world.add_component(entity, Position::default()).unwrap();
        if i % 2 == 0 {
            world.add_component(entity, Velocity::default()).unwrap();
            movers.push(entity);
        }
    }
    let lost = movers.pop().unwrap();
    world.destroy_entity(lost);

    let moving = world.create_filter(FilterSpec::new().with::<Position>().with::<Velocity>());
    let mut matched: Vec<Entity> = world.filter_entities(moving).collect();
    matched.sort();
    assert_eq!(matched, movers);
}

#[test]
fn test_stale_handle_is_inert() {
    let mut world = World::new();
    let entity = world.create_entity();
    world.add_component(entity, Health(5)).unwrap();
    world.destroy_entity(entity);

    assert!(matches!(
        world.add_component(entity, Health(1)),
        Err(EcsError::EntityDead(_))
    ));
    assert!(matches!(
        world.get_component::<Health>(entity),
        Err(EcsError::EntityDead(_))
    ));
    assert_eq!(world.remove_component::<Health>(entity), None);
    assert!(!world.has_component::<Health>(entity));

    world.destroy_entity(entity);
    assert_eq!(world.entity_count(), 0);
}

#[test]
fn test_worlds_are_independent() {
    let mut alpha = World::new();
    let mut beta = World::new();

    let a = alpha.create_entity();
    let b = beta.create_entity();
    alpha.add_component(a, Health(3)).unwrap();

    // Equal handles, different worlds: beta knows nothing of alpha's data.
    assert_eq!(a, b);
    assert!(!beta.has_component::<Health>(b));

    beta.destroy_entity(b);
    assert!(alpha.is_alive(a));
    assert_eq!(alpha.entity_count(), 1);
    assert!(beta.is_empty());
}
