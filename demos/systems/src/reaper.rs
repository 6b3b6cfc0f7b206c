//! Reaper system — destroys entities whose health is exhausted.

use components::Health;
use ember_ecs::{FilterId, FilterSpec, World};
use ember_system::System;
use tracing::debug;

/// Destroys every entity whose [`Health`] has dropped to zero.
#[derive(Debug, Default)]
pub struct ReaperSystem {
    mortal: Option<FilterId>,
}

impl ReaperSystem {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl System for ReaperSystem {
    fn on_initialize(&mut self, world: &mut World) {
        self.mortal = Some(world.create_filter(FilterSpec::new().with::<Health>()));
    }

    fn on_update(&mut self, world: &mut World, _dt: f32) {
        let Some(mortal) = self.mortal else {
            return;
        };
        let entities: Vec<_> = world.filter_entities(mortal).collect();
        for entity in entities {
            let depleted = world
                .get_component::<Health>(entity)
                .map(|health| health.is_dead())
                .unwrap_or(false);
            if depleted {
                debug!(entity = %entity, "reaping depleted entity");
                world.destroy_entity(entity);
            }
        }
    }

    fn name(&self) -> &'static str {
        "reaper"
    }
}
