//! Movement system — integrates velocity into position each tick.

use components::{Frozen, Position, Velocity};
use ember_ecs::{FilterId, FilterSpec, World};
use ember_system::System;

/// Applies `velocity * dt` to every entity carrying both a [`Position`]
/// and a [`Velocity`], skipping anything [`Frozen`].
#[derive(Debug, Default)]
pub struct MovementSystem {
    moving: Option<FilterId>,
}

impl MovementSystem {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl System for MovementSystem {
    fn on_initialize(&mut self, world: &mut World) {
        self.moving = Some(
            world.create_filter(
                FilterSpec::new()
                    .with::<Position>()
                    .with::<Velocity>()
                    .without::<Frozen>(),
            ),
        );
    }

    fn on_update(&mut self, world: &mut World, dt: f32) {
        let Some(moving) = self.moving else {
            return;
        };
        // Snapshot the matches before mutating the world.
        let entities: Vec<_> = world.filter_entities(moving).collect();
        for entity in entities {
            let step = match world.get_component::<Velocity>(entity) {
                Ok(velocity) => velocity.linear * dt,
                Err(_) => continue,
            };
            if let Ok(position) = world.get_component_mut::<Position>(entity) {
                position.point += step;
            }
        }
    }

    fn name(&self) -> &'static str {
        "movement"
    }
}

#[cfg(test)]
mod tests {
    use ember_system::SystemGroup;

    use super::*;

    #[test]
    fn test_movement_integrates_velocity() {
        let mut group = SystemGroup::new(World::new());
        let runner = group.world_mut().create_entity();
        group
            .world_mut()
            .add_component(runner, Position::ORIGIN)
            .unwrap();
        group
            .world_mut()
            .add_component(runner, Velocity::new(2.0, 0.0, 0.0))
            .unwrap();

        group.add(MovementSystem::new());
        group.update(0.5);

        let position = group.world().get_component::<Position>(runner).unwrap();
        assert_eq!(position.point.x, 1.0);
    }

    #[test]
    fn test_frozen_entities_stay_put() {
        let mut group = SystemGroup::new(World::new());
        let statue = group.world_mut().create_entity();
        group
            .world_mut()
            .add_component(statue, Position::ORIGIN)
            .unwrap();
        group
            .world_mut()
            .add_component(statue, Velocity::new(5.0, 0.0, 0.0))
            .unwrap();
        group.world_mut().add_component(statue, Frozen).unwrap();

        group.add(MovementSystem::new());
        group.update(1.0);
        let position = group.world().get_component::<Position>(statue).unwrap();
        assert_eq!(*position, Position::ORIGIN);

        // Thawing re-admits the entity to the movement filter.
        group.world_mut().remove_component::<Frozen>(statue);
        group.update(1.0);
        let position = group.world().get_component::<Position>(statue).unwrap();
        assert_eq!(position.point.x, 5.0);
    }
}
