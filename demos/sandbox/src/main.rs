//! Sandbox — a self-contained simulation over the demo systems.
//!
//! Spawns a few actors, runs the movement and reaper systems at a fixed
//! tick rate for three simulated seconds, then reports the survivors:
//! the runner drifts along +x, the frozen statue stays put, and the
//! depleted actor is reaped on the first tick.

mod tick;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use components::{Frozen, Health, Label, Position, Velocity};
use demo_systems::{MovementSystem, ReaperSystem};
use ember_ecs::{EcsError, FilterId, FilterSpec, World};
use ember_system::SystemGroup;

use crate::tick::{TickConfig, TickLoop};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sandbox=info".parse()?))
        .init();

    let mut world = World::new();
    spawn_actors(&mut world)?;

    // Register the roster before the world moves into the group; the id
    // stays valid because the filter lives with the world.
    let roster = world.create_filter(FilterSpec::new().with::<Label>());

    let mut group = SystemGroup::new(world);
    group.add(MovementSystem::new());
    group.add(ReaperSystem::new());

    let config = TickConfig {
        tick_rate: 60.0,
        max_ticks: 180,
    };
    let mut sim = TickLoop::new(config, group);
    sim.run();

    report(sim.group().world(), roster)?;
    sim.group_mut().destroy();
    Ok(())
}

fn spawn_actors(world: &mut World) -> Result<(), EcsError> {
    let runner = world.create_entity();
    world.add_component(runner, Label::new("runner"))?;
    world.add_component(runner, Position::ORIGIN)?;
    world.add_component(runner, Velocity::new(1.0, 0.0, 0.0))?;

    // Carries a velocity it never gets to use.
    let statue = world.create_entity();
    world.add_component(statue, Label::new("statue"))?;
    world.add_component(statue, Position::new(0.0, 0.0, 5.0))?;
    world.add_component(statue, Velocity::new(1.0, 0.0, 0.0))?;
    world.add_component(statue, Frozen)?;

    let doomed = world.create_entity();
    world.add_component(doomed, Label::new("doomed"))?;
    world.add_component(doomed, Position::new(0.0, 3.0, 0.0))?;
    let mut health = Health::full(10.0);
    health.damage(10.0);
    world.add_component(doomed, health)?;

    info!(entities = world.entity_count(), "actors spawned");
    Ok(())
}

fn report(world: &World, roster: FilterId) -> Result<(), EcsError> {
    for entity in world.filter_entities(roster) {
        let label = world.get_component::<Label>(entity)?;
        let position = world.get_component::<Position>(entity)?;
        info!(
            entity = %entity,
            name = %label.value,
            x = position.point.x,
            y = position.point.y,
            z = position.point.z,
            "final state"
        );
    }
    Ok(())
}
