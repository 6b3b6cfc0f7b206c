//! ECS error types.

use crate::entity::Entity;

/// Errors raised by the failing [`World`](crate::World) accessors.
///
/// Both variants mark caller sequencing mistakes, not transient conditions:
/// nothing in this crate retries or degrades. [`World::is_alive`] and
/// [`World::has_component`] are the non-failing guards to call first when a
/// handle's state is uncertain.
///
/// [`World::is_alive`]: crate::World::is_alive
/// [`World::has_component`]: crate::World::has_component
#[derive(Debug, thiserror::Error)]
pub enum EcsError {
    /// The target handle failed the liveness check: its generation is stale,
    /// or its id was never allocated or is currently free.
    #[error("entity {0} is dead")]
    EntityDead(Entity),

    /// The entity is alive but has no component of the requested type.
    #[error("component '{0}' not found on entity {1}")]
    ComponentNotFound(&'static str, Entity),
}
