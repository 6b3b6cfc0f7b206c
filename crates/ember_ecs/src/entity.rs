//! Entity handle type.
//!
//! An [`Entity`] is a lightweight `{id, generation}` pair with no inherent
//! data. The id names a slot in the issuing world's table; the generation is
//! bumped every time that slot is recycled, so a handle held across a destroy
//! reports dead forever instead of silently aliasing the slot's next occupant.

use serde::{Deserialize, Serialize};

/// A generation-guarded entity handle.
///
/// Entities are pure identifiers — they carry no data of their own.
/// Components attached through the world give them meaning, and the handle is
/// only a lookup key into that storage, never an owning reference.
///
/// Two handles are equal iff both the id and the generation match. Handles
/// are issued by [`World::create_entity`](crate::World::create_entity) and
/// validated by [`World::is_alive`](crate::World::is_alive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entity {
    id: u32,
    generation: u32,
}

impl Entity {
    /// The null / invalid entity sentinel.
    ///
    /// Its id is the unsigned image of `-1`; worlds issue ids densely from
    /// zero and never reach it. Its generation is 0, below every issued
    /// generation.
    pub const NULL: Entity = Entity {
        id: u32::MAX,
        generation: 0,
    };

    /// Create a handle from raw parts.
    ///
    /// Worlds issue their own handles; this is for reconstructing one that
    /// crossed an external boundary (wire messages, tooling, logs).
    #[must_use]
    pub const fn new(id: u32, generation: u32) -> Self {
        Self { id, generation }
    }

    /// Returns the slot id.
    #[must_use]
    pub const fn id(self) -> u32 {
        self.id
    }

    /// Returns the generation this handle was issued under.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }

    /// Returns `true` if this is the null sentinel.
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.id == u32::MAX
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::NULL
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({}:{})", self.id, self.generation)
    }
}
