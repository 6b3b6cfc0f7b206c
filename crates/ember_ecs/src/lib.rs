//! # ember_ecs
//!
//! A sparse-set entity-component core with generation-guarded handles and
//! incrementally maintained filters.
//!
//! This crate provides:
//!
//! - [`Entity`] — copyable id/generation handle; stale handles are detected,
//!   not dangling.
//! - [`Component`] — blanket trait; any `Send + Sync + 'static` type is a
//!   component.
//! - [`ComponentPool`] — sparse-set storage, one pool per component type.
//! - [`World`] — entity allocator, pool registry, and filter host.
//! - [`FilterSpec`] / [`FilterId`] — include/exclude queries kept current on
//!   every mutation, so reads never scan.
//!
//! ```rust
//! use ember_ecs::{EcsError, FilterSpec, World};
//!
//! struct Position { x: f32 }
//! struct Velocity { dx: f32 }
//!
//! # fn main() -> Result<(), EcsError> {
//! let mut world = World::new();
//! let entity = world.create_entity();
//! world.add_component(entity, Position { x: 0.0 })?;
//! world.add_component(entity, Velocity { dx: 2.0 })?;
//!
//! let moving = world.create_filter(
//!     FilterSpec::new().with::<Position>().with::<Velocity>(),
//! );
//!
//! // Snapshot before mutating: the borrow on `world` must end first.
//! let entities: Vec<_> = world.filter_entities(moving).collect();
//! for entity in entities {
//!     let dx = world.get_component::<Velocity>(entity)?.dx;
//!     world.get_component_mut::<Position>(entity)?.x += dx;
//! }
//!
//! assert_eq!(world.get_component::<Position>(entity)?.x, 2.0);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod filter;
pub mod pool;
pub mod world;

pub use entity::Entity;
pub use error::EcsError;
pub use filter::{FilterId, FilterSpec};
pub use pool::{Component, ComponentPool};
pub use world::World;
