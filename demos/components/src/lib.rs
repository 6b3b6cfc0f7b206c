//! Demo component definitions.
//!
//! Any `Send + Sync + 'static` type is a component; these add `serde`
//! derives so entity state can also be snapshotted as JSON.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A 3D position component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    /// Location in world units.
    pub point: Vec3,
}

impl Position {
    /// The world origin.
    pub const ORIGIN: Self = Self { point: Vec3::ZERO };

    /// Create a new position.
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            point: Vec3::new(x, y, z),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// A 3D velocity component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Velocity {
    /// Linear velocity in world units per second.
    pub linear: Vec3,
}

impl Velocity {
    /// Zero velocity.
    pub const ZERO: Self = Self { linear: Vec3::ZERO };

    /// Create a new velocity.
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            linear: Vec3::new(x, y, z),
        }
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A health component with current and maximum hit points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Health {
    /// Current hit points.
    pub current: f32,
    /// Maximum hit points.
    pub max: f32,
}

impl Health {
    /// Create a new health component at full HP.
    #[must_use]
    pub fn full(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Returns `true` once hit points are exhausted.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    /// Apply damage, clamping to zero.
    pub fn damage(&mut self, amount: f32) {
        self.current = (self.current - amount).max(0.0);
    }

    /// Heal, clamping to max.
    pub fn heal(&mut self, amount: f32) {
        self.current = (self.current + amount).min(self.max);
    }
}

/// Tag component: excluded by the movement filter, so a frozen entity
/// keeps its velocity but stops moving.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Frozen;

/// A simple name tag component for logs and debugging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Label {
    /// The entity's display name.
    pub value: String,
}

impl Label {
    /// Create a new label.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { value: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_serialization() {
        let p = Position::new(1.0, 2.0, 3.0);
        let json = serde_json::to_string(&p).unwrap();
        let restored: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(p, restored);
    }

    #[test]
    fn test_health_damage_and_heal() {
        let mut h = Health::full(100.0);
        assert!(!h.is_dead());
        h.damage(60.0);
        assert_eq!(h.current, 40.0);
        h.heal(30.0);
        assert_eq!(h.current, 70.0);
        h.damage(200.0);
        assert_eq!(h.current, 0.0);
        assert!(h.is_dead());
    }

    #[test]
    fn test_heal_never_exceeds_max() {
        let mut h = Health::full(50.0);
        h.heal(25.0);
        assert_eq!(h.current, 50.0);
    }

    #[test]
    fn test_defaults_are_at_rest() {
        assert_eq!(Position::default(), Position::ORIGIN);
        assert_eq!(Velocity::default(), Velocity::ZERO);
    }

    #[test]
    fn test_label_roundtrip() {
        let label = Label::new("Player");
        let json = serde_json::to_string(&label).unwrap();
        let restored: Label = serde_json::from_str(&json).unwrap();
        assert_eq!(label, restored);
    }
}
