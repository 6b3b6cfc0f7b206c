//! # ember_system
//!
//! The logic layer over [`ember_ecs`]: a [`System`] trait with an
//! initialize/update/destroy lifecycle, and a [`SystemGroup`] that owns a
//! world and runs its systems against it in registration order.
//!
//! ```rust
//! use ember_ecs::World;
//! use ember_system::{System, SystemGroup};
//!
//! struct Heartbeat {
//!     beats: u32,
//! }
//!
//! impl System for Heartbeat {
//!     fn on_update(&mut self, _world: &mut World, _dt: f32) {
//!         self.beats += 1;
//!     }
//! }
//!
//! let mut group = SystemGroup::new(World::new());
//! group.add(Heartbeat { beats: 0 });
//! group.update(1.0 / 60.0);
//! group.update(1.0 / 60.0);
//! group.destroy();
//! ```

pub mod group;
pub mod system;

pub use group::SystemGroup;
pub use system::System;
