//! System group — owns a world and drives systems through their lifecycle.

use ember_ecs::World;
use tracing::debug;

use crate::system::System;

/// An ordered collection of systems bound to one world.
///
/// The group owns its world, so every system it runs mutates the same
/// state and no system can be driven against two worlds at once. Systems
/// run in registration order, in every phase.
pub struct SystemGroup {
    world: World,
    systems: Vec<Box<dyn System>>,
}

impl SystemGroup {
    /// Create a group around the given world.
    #[must_use]
    pub fn new(world: World) -> Self {
        Self {
            world,
            systems: Vec::new(),
        }
    }

    /// The world this group drives.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the world, for setup outside any system.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Add a system to the end of the run order. Its
    /// [`on_initialize`](System::on_initialize) hook runs immediately.
    pub fn add<S: System + 'static>(&mut self, mut system: S) {
        system.on_initialize(&mut self.world);
        debug!(system = system.name(), "system bound");
        self.systems.push(Box::new(system));
    }

    /// Run one tick: every system's [`on_update`](System::on_update), in
    /// registration order.
    pub fn update(&mut self, dt: f32) {
        debug!(dt, systems = self.systems.len(), "group update");
        for system in &mut self.systems {
            system.on_update(&mut self.world, dt);
        }
    }

    /// Shut the group down: every system's
    /// [`on_destroy`](System::on_destroy), in registration order, then drop
    /// them all. The world itself stays intact; further updates are no-ops.
    pub fn destroy(&mut self) {
        for system in &mut self.systems {
            system.on_destroy(&mut self.world);
            debug!(system = system.name(), "system destroyed");
        }
        self.systems.clear();
    }

    /// Count of registered systems.
    #[must_use]
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}
