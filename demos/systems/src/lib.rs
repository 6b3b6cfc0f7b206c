//! Demo systems: reusable logic over the demo component set.

pub mod movement;
pub mod reaper;

pub use movement::MovementSystem;
pub use reaper::ReaperSystem;
