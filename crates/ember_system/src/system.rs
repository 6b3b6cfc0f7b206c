//! The system trait: logic with a three-phase lifecycle over a world.

use ember_ecs::World;

/// A unit of simulation logic run by a [`SystemGroup`](crate::SystemGroup).
///
/// All three hooks default to no-ops, so a system implements only the
/// phases it needs. Hooks receive exclusive world access; systems therefore
/// run one after another, in registration order.
pub trait System {
    /// Called once, when the system is added to a group. Typical place to
    /// create the filters the system will read every tick.
    fn on_initialize(&mut self, _world: &mut World) {}

    /// Called every tick with the elapsed time in seconds.
    fn on_update(&mut self, _world: &mut World, _dt: f32) {}

    /// Called once, when the owning group shuts down.
    fn on_destroy(&mut self, _world: &mut World) {}

    /// Name used in logs. Defaults to the implementing type's name.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
